use crate::encode::types::put_type;
use crate::encode::{put_seq, put_string};
use crate::ir::{Global, Local, Sig};
use crate::schema::tags::{GlobalTag, SigTag};
use crate::sink::ByteSink;

/// Emits a `Local` as a raw `i64` id. `Local` is an opaque 64-bit identity,
/// not a magnitude, so the bit pattern is reinterpreted rather than
/// range-checked.
pub(crate) fn put_local(sink: &mut ByteSink, local: Local) {
    sink.put_i64_be(local as i64);
}

/// Emits a `Global`. `Member`'s owner must be a `Top`; any other shape is
/// a precondition violation and panics rather than producing unspecified
/// bytes.
pub(crate) fn put_global(sink: &mut ByteSink, global: &Global) {
    match global {
        Global::None => sink.put_i32_be(GlobalTag::None.into()),
        Global::Top(id) => {
            sink.put_i32_be(GlobalTag::Top.into());
            put_string(sink, id);
        }
        Global::Member(owner, sig) => {
            let Global::Top(owner_id) = owner.as_ref() else {
                panic!("Global::Member owner must be Global::Top, found {owner:?}");
            };
            sink.put_i32_be(GlobalTag::Member.into());
            put_string(sink, owner_id);
            put_sig(sink, sig);
        }
    }
}

pub(crate) fn put_sig(sink: &mut ByteSink, sig: &Sig) {
    match sig {
        Sig::Field(id) => {
            sink.put_i32_be(SigTag::Field.into());
            put_string(sink, id);
        }
        Sig::Ctor(types) => {
            sink.put_i32_be(SigTag::Ctor.into());
            put_seq(sink, types, |sink, ty| put_type(sink, ty));
        }
        Sig::Method(id, types) => {
            sink.put_i32_be(SigTag::Method.into());
            put_string(sink, id);
            put_seq(sink, types, |sink, ty| put_type(sink, ty));
        }
        Sig::Proxy(id, types) => {
            sink.put_i32_be(SigTag::Proxy.into());
            put_string(sink, id);
            put_seq(sink, types, |sink, ty| put_type(sink, ty));
        }
        Sig::Extern(id) => {
            sink.put_i32_be(SigTag::Extern.into());
            put_string(sink, id);
        }
        Sig::Generated(id) => {
            sink.put_i32_be(SigTag::Generated.into());
            put_string(sink, id);
        }
        Sig::Duplicate(inner, types) => {
            sink.put_i32_be(SigTag::Duplicate.into());
            put_sig(sink, inner);
            put_seq(sink, types, |sink, ty| put_type(sink, ty));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_encodes_tag_then_length_prefixed_string() {
        let mut sink = ByteSink::new();
        put_global(&mut sink, &Global::Top("foo".to_string()));
        let mut expected = vec![0, 0, 0, 1];
        expected.extend_from_slice(&3i32.to_be_bytes());
        expected.extend_from_slice(b"foo");
        assert_eq!(sink.as_bytes(), expected);
    }

    #[test]
    #[should_panic(expected = "Global::Member owner must be Global::Top")]
    fn member_with_non_top_owner_panics() {
        let mut sink = ByteSink::new();
        let malformed = Global::Member(Box::new(Global::None), Sig::Extern("x".to_string()));
        put_global(&mut sink, &malformed);
    }
}
