/// A single definition attribute. `Link` is the one variant that carries a
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    MayInline,
    InlineHint,
    NoInline,
    AlwaysInline,
    Dyn,
    Stub,
    Extern,
    Link(String),
}

impl Attr {
    /// The stable ordinal used both as this attribute's wire tag and as the
    /// sort key that gives an `Attrs` set a canonical, reproducible encoding
    /// order regardless of how the caller built it.
    #[must_use]
    pub(crate) fn ordinal(&self) -> i32 {
        match self {
            Self::MayInline => 0,
            Self::InlineHint => 1,
            Self::NoInline => 2,
            Self::AlwaysInline => 3,
            Self::Dyn => 4,
            Self::Stub => 5,
            Self::Extern => 6,
            Self::Link(_) => 7,
        }
    }
}

/// `Attrs` is modeled as an unordered set at the API boundary: callers may
/// build it in any order, including with duplicate or conflicting members,
/// and the encoder does not police set semantics. What the encoder does
/// guarantee is a canonical emission order, so two `Attrs` with the same
/// members always encode identically no matter what order they were pushed
/// in.
pub type Attrs = Vec<Attr>;
