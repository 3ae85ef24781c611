use crate::ir::names::Local;
use crate::ir::ops::Op;
use crate::ir::types::Type;
use crate::ir::values::Val;

/// A formal parameter of a `Label` instruction: a locally-scoped SSA name
/// paired with its type.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Local,
    pub ty: Type,
}

/// A control-flow successor: a label target, an unwind handler, or a switch
/// case.
///
/// `Succ` and `Fail` are part of the accepted source grammar but have no
/// assigned wire tag in this revision — encoding either one is a
/// precondition violation, never a silently invented tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    None,
    Unwind(Local),
    Label(Local, Vec<Val>),
    Case(Val, Box<Next>),
    Succ(Local),
    Fail(Local),
}

/// A control-flow-carrying or terminator instruction.
///
/// The two `Let` shapes share one logical constructor but are distinguished
/// at the wire level by separate tags, chosen by whether `unwind` is
/// `Next::None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Inst {
    None,
    Label(Local, Vec<Param>),
    Let(Local, Op, Next),
    Unreachable,
    Ret(Val),
    Jump(Next),
    If(Val, Next, Next),
    Switch(Val, Box<Next>, Vec<Next>),
    Throw(Val, Next),
}
