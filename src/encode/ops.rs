use crate::encode::leaf::{put_bin, put_comp, put_conv};
use crate::encode::names::{put_global, put_sig};
use crate::encode::types::put_type;
use crate::encode::{put_seq, put_seq_i32};
use crate::ir::Op;
use crate::schema::tags::OpTag;
use crate::encode::values::put_val;
use crate::sink::ByteSink;

/// Emits an `Op`: an `i32` tag, then the variant's fixed payload schema.
/// `Load`/`Store` assert `!volatile` before writing anything for that
/// operation — a `true` flag is a precondition violation, not recoverable
/// input.
pub(crate) fn put_op(sink: &mut ByteSink, op: &Op) {
    match op {
        Op::Call(ty, callee, args) => {
            sink.put_i32_be(OpTag::Call.into());
            put_type(sink, ty);
            put_val(sink, callee);
            put_seq(sink, args, |sink, v| put_val(sink, v));
        }
        Op::Load(ty, ptr, volatile) => {
            assert!(!*volatile, "Op::Load with volatile=true is not encodable");
            sink.put_i32_be(OpTag::Load.into());
            put_type(sink, ty);
            put_val(sink, ptr);
        }
        Op::Store(ty, value, ptr, volatile) => {
            assert!(!*volatile, "Op::Store with volatile=true is not encodable");
            sink.put_i32_be(OpTag::Store.into());
            put_type(sink, ty);
            put_val(sink, value);
            put_val(sink, ptr);
        }
        Op::Elem(ty, base, indices) => {
            sink.put_i32_be(OpTag::Elem.into());
            put_type(sink, ty);
            put_val(sink, base);
            put_seq(sink, indices, |sink, v| put_val(sink, v));
        }
        Op::Extract(aggregate, indices) => {
            sink.put_i32_be(OpTag::Extract.into());
            put_val(sink, aggregate);
            put_seq_i32(sink, indices);
        }
        Op::Insert(aggregate, value, indices) => {
            sink.put_i32_be(OpTag::Insert.into());
            put_val(sink, aggregate);
            put_val(sink, value);
            put_seq_i32(sink, indices);
        }
        Op::Stackalloc(ty, count) => {
            sink.put_i32_be(OpTag::Stackalloc.into());
            put_type(sink, ty);
            put_val(sink, count);
        }
        Op::Bin(kind, ty, lhs, rhs) => {
            sink.put_i32_be(OpTag::Bin.into());
            put_bin(sink, *kind);
            put_type(sink, ty);
            put_val(sink, lhs);
            put_val(sink, rhs);
        }
        Op::Comp(kind, ty, lhs, rhs) => {
            sink.put_i32_be(OpTag::Comp.into());
            put_comp(sink, *kind);
            put_type(sink, ty);
            put_val(sink, lhs);
            put_val(sink, rhs);
        }
        Op::Conv(kind, ty, value) => {
            sink.put_i32_be(OpTag::Conv.into());
            put_conv(sink, *kind);
            put_type(sink, ty);
            put_val(sink, value);
        }
        Op::Select(cond, then, otherwise) => {
            sink.put_i32_be(OpTag::Select.into());
            put_val(sink, cond);
            put_val(sink, then);
            put_val(sink, otherwise);
        }
        Op::Classalloc(name) => {
            sink.put_i32_be(OpTag::Classalloc.into());
            put_global(sink, name);
        }
        Op::Fieldload(ty, obj, field) => {
            sink.put_i32_be(OpTag::Fieldload.into());
            put_type(sink, ty);
            put_val(sink, obj);
            put_global(sink, field);
        }
        Op::Fieldstore(ty, obj, field, value) => {
            sink.put_i32_be(OpTag::Fieldstore.into());
            put_type(sink, ty);
            put_val(sink, obj);
            put_global(sink, field);
            put_val(sink, value);
        }
        Op::Method(receiver, sig) => {
            sink.put_i32_be(OpTag::Method.into());
            put_val(sink, receiver);
            put_sig(sink, sig);
        }
        Op::Dynmethod(receiver, sig) => {
            sink.put_i32_be(OpTag::Dynmethod.into());
            put_val(sink, receiver);
            put_sig(sink, sig);
        }
        Op::Module(name) => {
            sink.put_i32_be(OpTag::Module.into());
            put_global(sink, name);
        }
        Op::As(ty, value) => {
            sink.put_i32_be(OpTag::As.into());
            put_type(sink, ty);
            put_val(sink, value);
        }
        Op::Is(ty, value) => {
            sink.put_i32_be(OpTag::Is.into());
            put_type(sink, ty);
            put_val(sink, value);
        }
        Op::Box(ty, value) => {
            sink.put_i32_be(OpTag::Box.into());
            put_type(sink, ty);
            put_val(sink, value);
        }
        Op::Unbox(ty, value) => {
            sink.put_i32_be(OpTag::Unbox.into());
            put_type(sink, ty);
            put_val(sink, value);
        }
        Op::Sizeof(ty) => {
            sink.put_i32_be(OpTag::Sizeof.into());
            put_type(sink, ty);
        }
        Op::Copy(value) => {
            sink.put_i32_be(OpTag::Copy.into());
            put_val(sink, value);
        }
        Op::Closure(ty, func, captures) => {
            sink.put_i32_be(OpTag::Closure.into());
            put_type(sink, ty);
            put_val(sink, func);
            put_seq(sink, captures, |sink, v| put_val(sink, v));
        }
        Op::Var(ty) => {
            sink.put_i32_be(OpTag::Var.into());
            put_type(sink, ty);
        }
        Op::Varload(slot) => {
            sink.put_i32_be(OpTag::Varload.into());
            put_val(sink, slot);
        }
        Op::Varstore(slot, value) => {
            sink.put_i32_be(OpTag::Varstore.into());
            put_val(sink, slot);
            put_val(sink, value);
        }
        Op::Arrayalloc(ty, length) => {
            sink.put_i32_be(OpTag::Arrayalloc.into());
            put_type(sink, ty);
            put_val(sink, length);
        }
        Op::Arrayload(ty, array, index) => {
            sink.put_i32_be(OpTag::Arrayload.into());
            put_type(sink, ty);
            put_val(sink, array);
            put_val(sink, index);
        }
        Op::Arraystore(ty, array, index, value) => {
            sink.put_i32_be(OpTag::Arraystore.into());
            put_type(sink, ty);
            put_val(sink, array);
            put_val(sink, index);
            put_val(sink, value);
        }
        Op::Arraylength(array) => {
            sink.put_i32_be(OpTag::Arraylength.into());
            put_val(sink, array);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Type;

    #[test]
    #[should_panic(expected = "volatile=true is not encodable")]
    fn volatile_load_panics() {
        let mut sink = ByteSink::new();
        put_op(&mut sink, &Op::Load(Type::Int, crate::ir::Val::Unit, true));
    }

    #[test]
    #[should_panic(expected = "volatile=true is not encodable")]
    fn volatile_store_panics() {
        let mut sink = ByteSink::new();
        put_op(
            &mut sink,
            &Op::Store(Type::Int, crate::ir::Val::Unit, crate::ir::Val::Unit, true),
        );
    }
}
