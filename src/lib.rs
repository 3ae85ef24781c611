//! A binary serializer for a compiler's SSA-style intermediate
//! representation.
//!
//! [`serialize`] turns a sequence of [`ir::Defn`] roots into a tagged,
//! self-describing byte stream: a header, a name index that permits
//! locating any single definition's payload without decoding the whole
//! stream, then the definition payloads themselves. The encoder is the
//! only thing in scope here — there is no parser, optimizer, or decoder;
//! the tag identities in `schema::tags` are the wire contract a matching
//! decoder must agree with.

mod encode;
pub mod ir;
mod schema;
mod serializer;
pub mod sink;

pub use serializer::{serialize, COMPAT_VERSION, MAGIC, REVISION};
