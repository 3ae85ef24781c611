use crate::encode::names::put_local;
use crate::encode::ops::put_op;
use crate::encode::types::put_type;
use crate::encode::values::put_val;
use crate::encode::put_seq;
use crate::ir::{Inst, Next, Param};
use crate::schema::tags::{InstTag, NextTag};
use crate::sink::ByteSink;

/// Emits a `Next`. `Succ`/`Fail` are accepted by the source grammar but
/// have no wire tag in this revision; encoding either one panics rather
/// than guessing a tag.
fn put_next(sink: &mut ByteSink, next: &Next) {
    match next {
        Next::None => sink.put_i32_be(NextTag::None.into()),
        Next::Unwind(label) => {
            sink.put_i32_be(NextTag::Unwind.into());
            put_local(sink, *label);
        }
        Next::Label(label, args) => {
            sink.put_i32_be(NextTag::Label.into());
            put_local(sink, *label);
            put_seq(sink, args, |sink, v| put_val(sink, v));
        }
        Next::Case(value, next) => {
            sink.put_i32_be(NextTag::Case.into());
            put_val(sink, value);
            put_next(sink, next);
        }
        Next::Succ(_) | Next::Fail(_) => {
            panic!("Next::Succ/Next::Fail have no wire tag in this revision");
        }
    }
}

fn put_param(sink: &mut ByteSink, param: &Param) {
    put_local(sink, param.name);
    put_type(sink, &param.ty);
}

/// Emits an `Inst`: an `i32` tag, then payload. `Let` picks between
/// [`InstTag::Let`] and [`InstTag::LetUnwind`] depending on whether its
/// `Next` is `Next::None`.
pub(crate) fn put_inst(sink: &mut ByteSink, inst: &Inst) {
    match inst {
        Inst::None => sink.put_i32_be(InstTag::None.into()),
        Inst::Label(name, params) => {
            sink.put_i32_be(InstTag::Label.into());
            put_local(sink, *name);
            put_seq(sink, params, |sink, p| put_param(sink, p));
        }
        Inst::Let(name, op, unwind) => {
            let tag = if matches!(unwind, Next::None) {
                InstTag::Let
            } else {
                InstTag::LetUnwind
            };
            sink.put_i32_be(tag.into());
            put_local(sink, *name);
            put_op(sink, op);
            if !matches!(unwind, Next::None) {
                put_next(sink, unwind);
            }
        }
        Inst::Unreachable => sink.put_i32_be(InstTag::Unreachable.into()),
        Inst::Ret(value) => {
            sink.put_i32_be(InstTag::Ret.into());
            put_val(sink, value);
        }
        Inst::Jump(next) => {
            sink.put_i32_be(InstTag::Jump.into());
            put_next(sink, next);
        }
        Inst::If(cond, then, otherwise) => {
            sink.put_i32_be(InstTag::If.into());
            put_val(sink, cond);
            put_next(sink, then);
            put_next(sink, otherwise);
        }
        Inst::Switch(value, default, cases) => {
            sink.put_i32_be(InstTag::Switch.into());
            put_val(sink, value);
            put_next(sink, default);
            put_seq(sink, cases, |sink, case| put_next(sink, case));
        }
        Inst::Throw(value, unwind) => {
            sink.put_i32_be(InstTag::Throw.into());
            put_val(sink, value);
            put_next(sink, unwind);
        }
    }
}
