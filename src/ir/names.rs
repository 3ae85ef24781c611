use crate::ir::types::Type;

/// A function-scope SSA name: an opaque 64-bit identity.
pub type Local = u64;

/// A fully-qualified IR symbol name.
///
/// `Member`'s owner is boxed rather than narrowed to a plain `String`
/// precisely so a malformed `Member` whose owner is not a `Top` can be
/// *constructed* — the encoder is what enforces that constraint, by
/// panicking, not the type system.
#[derive(Debug, Clone, PartialEq)]
pub enum Global {
    None,
    Top(String),
    Member(Box<Global>, Sig),
}

/// A signature discriminator disambiguating members that share an owner.
#[derive(Debug, Clone, PartialEq)]
pub enum Sig {
    Field(String),
    Ctor(Vec<Type>),
    Method(String, Vec<Type>),
    Proxy(String, Vec<Type>),
    Extern(String),
    Generated(String),
    Duplicate(Box<Sig>, Vec<Type>),
}
