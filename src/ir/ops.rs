use crate::ir::names::{Global, Sig};
use crate::ir::types::Type;
use crate::ir::values::{Bin as BinKind, Comp as CompKind, Conv as ConvKind, Val};

/// The operation algebra bound by a `Let` instruction: calls, loads/stores,
/// aggregate access, stack/heap allocation, arithmetic, comparison,
/// conversion, selection, field access, dynamic/static dispatch, module
/// access, type tests/casts, copies, size-of, closure construction,
/// mutable-slot operations, and array primitives.
///
/// `Load`/`Store`'s `volatile` flag must be `false`; the encoder asserts
/// this rather than accepting it silently.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Call(Type, Val, Vec<Val>),
    Load(Type, Val, bool),
    Store(Type, Val, Val, bool),
    Elem(Type, Val, Vec<Val>),
    Extract(Val, Vec<i32>),
    Insert(Val, Val, Vec<i32>),
    Stackalloc(Type, Val),
    Bin(BinKind, Type, Val, Val),
    Comp(CompKind, Type, Val, Val),
    Conv(ConvKind, Type, Val),
    Select(Val, Val, Val),
    Classalloc(Global),
    Fieldload(Type, Val, Global),
    Fieldstore(Type, Val, Global, Val),
    Method(Val, Sig),
    Dynmethod(Val, Sig),
    Module(Global),
    As(Type, Val),
    Is(Type, Val),
    Box(Type, Val),
    Unbox(Type, Val),
    Sizeof(Type),
    Copy(Val),
    Closure(Type, Val, Vec<Val>),
    Var(Type),
    Varload(Val),
    Varstore(Val, Val),
    Arrayalloc(Type, Val),
    Arrayload(Type, Val, Val),
    Arraystore(Type, Val, Val, Val),
    Arraylength(Val),
}
