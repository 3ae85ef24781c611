//! The top-level entry point: header, name index, payloads, back-patch.

use crate::encode::{put_defn, put_global};
use crate::ir::Defn;
use crate::sink::ByteSink;

/// Opaque magic constant identifying this wire format. A decoder must
/// reject any stream whose header does not start with this value.
pub const MAGIC: i32 = 0x4952_4B30; // "IRK0"

/// Compatibility version. A decoder rejects a stream whose `compat` word
/// does not match what it expects; bumped only on a breaking wire change.
pub const COMPAT_VERSION: i32 = 1;

/// Format revision. Bumped whenever a tag is added, removed, or reassigned.
pub const REVISION: i32 = 1;

/// Encodes an ordered sequence of top-level definitions into a complete,
/// self-describing byte stream.
///
/// The layout is header, then a name index with one `(Global, offset)` pair
/// per definition, then the definition payloads in the same order. The
/// index's offsets are back-patched after the payloads are known, because
/// each payload's length is not known until it has been written.
///
/// This function never fails: the only way it could is a
/// [`crate::sink::Error`] from [`ByteSink::set_position`], and every seek
/// here targets a slot position recorded earlier in this same call, which
/// by construction is always within the buffer written so far. Malformed
/// IR is instead caught by the assertions documented on the individual
/// leaf encoders — this function does not validate its input beyond that.
#[must_use]
pub fn serialize(defns: &[Defn]) -> Vec<u8> {
    let mut sink = ByteSink::new();

    sink.put_i32_be(MAGIC);
    sink.put_i32_be(COMPAT_VERSION);
    sink.put_i32_be(REVISION);

    sink.put_i32_be(i32::try_from(defns.len()).expect("definition count exceeds i32::MAX"));

    let mut offset_slots = Vec::with_capacity(defns.len());
    for defn in defns {
        put_global(&mut sink, defn.name());
        offset_slots.push(sink.position());
        sink.put_i32_be(0); // placeholder, back-patched below
    }

    let mut payload_offsets = Vec::with_capacity(defns.len());
    for defn in defns {
        payload_offsets.push(sink.position());
        put_defn(&mut sink, defn);
    }

    let end_of_payload = sink.position();

    for (slot, offset) in offset_slots.iter().zip(payload_offsets.iter()) {
        sink.set_position(*slot)
            .expect("offset slot was recorded earlier in this same write");
        sink.put_i32_be(i32::try_from(*offset).expect("payload offset exceeds i32::MAX"));
    }

    sink.set_position(end_of_payload)
        .expect("end-of-payload position was recorded earlier in this same write");

    sink.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Attr, Defn, Global, Type, Val};

    #[test]
    fn empty_input_is_just_the_header_and_a_zero_count() {
        let bytes = serialize(&[]);
        let mut expected = Vec::new();
        expected.extend_from_slice(&MAGIC.to_be_bytes());
        expected.extend_from_slice(&COMPAT_VERSION.to_be_bytes());
        expected.extend_from_slice(&REVISION.to_be_bytes());
        expected.extend_from_slice(&0i32.to_be_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn back_patched_offsets_point_past_the_index_and_account_for_prior_payload_sizes() {
        let defns = vec![
            Defn::Declare(Vec::new(), Global::Top("a".to_string()), Type::Int),
            Defn::Declare(Vec::new(), Global::Top("b".to_string()), Type::Int),
            Defn::Declare(Vec::new(), Global::Top("c".to_string()), Type::Int),
        ];
        let bytes = serialize(&defns);

        // header(12) + count(4) + 3 * (tag(4) + len(4) + id(1) + offset(4))
        let header_and_count = 16;
        let index_entry_len = 4 + 4 + 1 + 4;
        let index_region = 3 * index_entry_len;

        let mut cursor = header_and_count;
        let mut running = header_and_count + index_region;
        for _ in 0..3 {
            // skip name (tag + len + 1 byte id)
            cursor += 4 + 4 + 1;
            let slot = i32::from_be_bytes(bytes[cursor..cursor + 4].try_into().unwrap());
            assert_eq!(slot as usize, running);
            cursor += 4;
            // payload: tag(4) + attrs count(4) + name tag(4)+len(4)+1 + type tag(4)
            running += 4 + 4 + (4 + 4 + 1) + 4;
        }
    }

    #[test]
    fn null_value_const_is_well_formed_and_declares_one_index_entry() {
        let defns = vec![Defn::Const(
            vec![Attr::Extern],
            Global::Top("n".to_string()),
            Type::Ptr,
            Val::Null,
        )];
        let bytes = serialize(&defns);
        let count = i32::from_be_bytes(bytes[12..16].try_into().unwrap());
        assert_eq!(count, 1);
    }
}
