use crate::encode::names::{put_global, put_local};
use crate::encode::types::put_type;
use crate::encode::{put_seq, put_string};
use crate::ir::{Type, Val};
use crate::schema::tags::ValTag;
use crate::sink::ByteSink;

/// Emits a `Val`. `Val::Null` has no tag of its own in this wire revision —
/// it is aliased onto `Zero(Type::Ptr)`; a decoder cannot tell the two
/// apart, which is an acknowledged wart rather than a bug.
pub(crate) fn put_val(sink: &mut ByteSink, val: &Val) {
    match val {
        Val::None => sink.put_i32_be(ValTag::None.into()),
        Val::True => sink.put_i32_be(ValTag::True.into()),
        Val::False => sink.put_i32_be(ValTag::False.into()),
        Val::Null => {
            sink.put_i32_be(ValTag::Zero.into());
            put_type(sink, &Type::Ptr);
        }
        Val::Zero(ty) => {
            sink.put_i32_be(ValTag::Zero.into());
            put_type(sink, ty);
        }
        Val::Undef(ty) => {
            sink.put_i32_be(ValTag::Undef.into());
            put_type(sink, ty);
        }
        Val::Byte(v) => {
            sink.put_i32_be(ValTag::Byte.into());
            sink.put_i8(*v);
        }
        Val::Short(v) => {
            sink.put_i32_be(ValTag::Short.into());
            sink.put_i16_be(*v);
        }
        Val::Int(v) => {
            sink.put_i32_be(ValTag::Int.into());
            sink.put_i32_be(*v);
        }
        Val::Long(v) => {
            sink.put_i32_be(ValTag::Long.into());
            sink.put_i64_be(*v);
        }
        Val::Float(v) => {
            sink.put_i32_be(ValTag::Float.into());
            sink.put_f32_be(*v);
        }
        Val::Double(v) => {
            sink.put_i32_be(ValTag::Double.into());
            sink.put_f64_be(*v);
        }
        Val::StructValue(fields) => {
            sink.put_i32_be(ValTag::StructValue.into());
            put_seq(sink, fields, |sink, v| put_val(sink, v));
        }
        Val::ArrayValue(ty, elems) => {
            sink.put_i32_be(ValTag::ArrayValue.into());
            put_type(sink, ty);
            put_seq(sink, elems, |sink, v| put_val(sink, v));
        }
        Val::Chars(s) => {
            sink.put_i32_be(ValTag::Chars.into());
            put_string(sink, s);
        }
        Val::Local(local, ty) => {
            sink.put_i32_be(ValTag::Local.into());
            put_local(sink, *local);
            put_type(sink, ty);
        }
        Val::Global(name, ty) => {
            sink.put_i32_be(ValTag::Global.into());
            put_global(sink, name);
            put_type(sink, ty);
        }
        Val::Unit => sink.put_i32_be(ValTag::Unit.into()),
        Val::Const(inner) => {
            sink.put_i32_be(ValTag::Const.into());
            put_val(sink, inner);
        }
        Val::String(s) => {
            sink.put_i32_be(ValTag::String.into());
            put_string(sink, s);
        }
        Val::Virtual(v) => {
            sink.put_i32_be(ValTag::Virtual.into());
            sink.put_i64_be(*v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_aliases_zero_ptr() {
        let mut null_sink = ByteSink::new();
        put_val(&mut null_sink, &Val::Null);

        let mut zero_ptr_sink = ByteSink::new();
        put_val(&mut zero_ptr_sink, &Val::Zero(Type::Ptr));

        assert_eq!(null_sink.as_bytes(), zero_ptr_sink.as_bytes());
    }

    #[test]
    fn virtual_uses_a_full_i64_not_i32() {
        let mut sink = ByteSink::new();
        put_val(&mut sink, &Val::Virtual(0x1_0000_0000));
        let tag: i32 = ValTag::Virtual.into();
        let mut expected = tag.to_be_bytes().to_vec();
        expected.extend_from_slice(&0x1_0000_0000i64.to_be_bytes());
        assert_eq!(sink.as_bytes(), expected);
    }
}
