use crate::ir::names::{Global, Local};
use crate::ir::types::Type;

/// A typed value: a literal, an SSA reference, or a global reference.
///
/// `Null` is a legal value to construct (it has to be — callers write IR
/// that contains null pointer constants) but has no tag of its own on the
/// wire; the encoder aliases it onto `Zero(Type::Ptr)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    None,
    True,
    False,
    Null,
    Zero(Type),
    Undef(Type),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    StructValue(Vec<Val>),
    ArrayValue(Type, Vec<Val>),
    Chars(String),
    Local(Local, Type),
    Global(Global, Type),
    Unit,
    Const(Box<Val>),
    String(String),
    /// Uses a full `i64`, unlike most other integral payloads in this IR
    /// which fit in `i32` or smaller.
    Virtual(i64),
}

/// Arithmetic operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bin {
    Iadd,
    Fadd,
    Isub,
    Fsub,
    Imul,
    Fmul,
    Sdiv,
    Udiv,
    Fdiv,
    Srem,
    Urem,
    Frem,
    Shl,
    Lshr,
    Ashr,
    And,
    Or,
    Xor,
}

/// Comparison operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comp {
    Ieq,
    Ine,
    Ugt,
    Uge,
    Ult,
    Ule,
    Sgt,
    Sge,
    Slt,
    Sle,
    Feq,
    Fne,
    Fgt,
    Fge,
    Flt,
    Fle,
}

/// Conversion operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conv {
    Trunc,
    Zext,
    Sext,
    Fptrunc,
    Fpext,
    Fptoui,
    Fptosi,
    Uitofp,
    Sitofp,
    Ptrtoint,
    Inttoptr,
    Bitcast,
}
