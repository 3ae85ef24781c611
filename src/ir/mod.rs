//! The in-memory IR data model this crate knows how to serialize.
//!
//! Every type here is a closed sum type (or a thin wrapper over one), owned
//! and fully materialized — there are no lazy or remote references. The
//! encoder in [`crate::encode`] is a strict recursive descent over this
//! grammar.

mod attrs;
mod control;
mod defn;
mod names;
mod ops;
mod types;
mod values;

pub use attrs::{Attr, Attrs};
pub use control::{Inst, Next, Param};
pub use defn::Defn;
pub use names::{Global, Local, Sig};
pub use ops::Op;
pub use types::Type;
pub use values::{Bin, Comp, Conv, Val};
