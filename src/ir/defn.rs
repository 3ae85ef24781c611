use crate::ir::attrs::Attrs;
use crate::ir::control::Inst;
use crate::ir::names::Global;
use crate::ir::types::Type;
use crate::ir::values::Val;

/// A top-level IR definition: a global variable, constant, function
/// declaration/definition, or trait/class/module.
#[derive(Debug, Clone, PartialEq)]
pub enum Defn {
    Var(Attrs, Global, Type, Val),
    Const(Attrs, Global, Type, Val),
    Declare(Attrs, Global, Type),
    Define(Attrs, Global, Type, Vec<Inst>),
    Trait(Attrs, Global, Vec<Global>),
    Class(Attrs, Global, Option<Global>, Vec<Global>),
    Module(Attrs, Global, Option<Global>, Vec<Global>),
}

impl Defn {
    /// Every variant's second field is its `Global` name; the name index is
    /// built from this regardless of which kind of definition it is.
    #[must_use]
    pub fn name(&self) -> &Global {
        match self {
            Self::Var(_, name, _, _)
            | Self::Const(_, name, _, _)
            | Self::Declare(_, name, _)
            | Self::Define(_, name, _, _)
            | Self::Trait(_, name, _)
            | Self::Class(_, name, _, _)
            | Self::Module(_, name, _, _) => name,
        }
    }
}
