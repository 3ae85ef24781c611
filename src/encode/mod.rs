//! Primitive writers and leaf/structural encoders, organized as free
//! functions dispatching on the [`crate::ir`] grammar.
//!
//! There is no `Encode` trait: each sum type gets one `put_x` function doing
//! a recursive-descent match over its variants, emitting the variant's tag
//! then its payload fields in declaration order. This mirrors a strict
//! grammar walk rather than hiding dispatch behind a trait object.

mod control;
mod defn;
mod leaf;
mod names;
mod ops;
mod types;
mod values;

pub(crate) use control::put_inst;
pub(crate) use defn::put_defn;
pub(crate) use names::put_global;
pub(crate) use ops::put_op;

use crate::sink::ByteSink;

/// Emits a UTF-8 string as an `i32` byte length followed by its bytes, with
/// no trailing NUL.
pub(crate) fn put_string(sink: &mut ByteSink, value: &str) {
    let bytes = value.as_bytes();
    sink.put_i32_be(i32::try_from(bytes.len()).expect("string length exceeds i32::MAX"));
    sink.put_bytes(bytes);
}

/// Emits an `Option<T>` as a presence byte, followed by the payload only
/// when present.
pub(crate) fn put_option<T>(sink: &mut ByteSink, value: &Option<T>, put: impl FnOnce(&mut ByteSink, &T)) {
    match value {
        None => sink.put_bool(false),
        Some(inner) => {
            sink.put_bool(true);
            put(sink, inner);
        }
    }
}

/// Emits a homogeneous sequence as an `i32` element count followed by each
/// element's encoding in order.
pub(crate) fn put_seq<T>(sink: &mut ByteSink, items: &[T], mut put: impl FnMut(&mut ByteSink, &T)) {
    sink.put_i32_be(i32::try_from(items.len()).expect("sequence length exceeds i32::MAX"));
    for item in items {
        put(sink, item);
    }
}

/// `Seq<i32>` specialization.
pub(crate) fn put_seq_i32(sink: &mut ByteSink, items: &[i32]) {
    put_seq(sink, items, |sink, value| sink.put_i32_be(*value));
}
