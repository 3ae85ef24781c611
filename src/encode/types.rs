use crate::encode::names::put_global;
use crate::encode::put_seq;
use crate::ir::Type;
use crate::schema::tags::TypeTag;
use crate::sink::ByteSink;

/// Emits a `Type`: an `i32` tag, then composite payload fields in
/// declaration order, recursing through `Type` and `Global`.
pub(crate) fn put_type(sink: &mut ByteSink, ty: &Type) {
    match ty {
        Type::None => sink.put_i32_be(TypeTag::None.into()),
        Type::Void => sink.put_i32_be(TypeTag::Void.into()),
        Type::Vararg => sink.put_i32_be(TypeTag::Vararg.into()),
        Type::Ptr => sink.put_i32_be(TypeTag::Ptr.into()),
        Type::Bool => sink.put_i32_be(TypeTag::Bool.into()),
        Type::Char => sink.put_i32_be(TypeTag::Char.into()),
        Type::Byte => sink.put_i32_be(TypeTag::Byte.into()),
        Type::UByte => sink.put_i32_be(TypeTag::UByte.into()),
        Type::Short => sink.put_i32_be(TypeTag::Short.into()),
        Type::UShort => sink.put_i32_be(TypeTag::UShort.into()),
        Type::Int => sink.put_i32_be(TypeTag::Int.into()),
        Type::UInt => sink.put_i32_be(TypeTag::UInt.into()),
        Type::Long => sink.put_i32_be(TypeTag::Long.into()),
        Type::ULong => sink.put_i32_be(TypeTag::ULong.into()),
        Type::Float => sink.put_i32_be(TypeTag::Float.into()),
        Type::Double => sink.put_i32_be(TypeTag::Double.into()),
        Type::Null => sink.put_i32_be(TypeTag::Null.into()),
        Type::Nothing => sink.put_i32_be(TypeTag::Nothing.into()),
        Type::Virtual => sink.put_i32_be(TypeTag::Virtual.into()),
        Type::Unit => sink.put_i32_be(TypeTag::Unit.into()),
        Type::ArrayValue(elem, len) => {
            sink.put_i32_be(TypeTag::ArrayValue.into());
            put_type(sink, elem);
            sink.put_i32_be(*len);
        }
        Type::StructValue(fields) => {
            sink.put_i32_be(TypeTag::StructValue.into());
            put_seq(sink, fields, |sink, ty| put_type(sink, ty));
        }
        Type::Function(args, ret) => {
            sink.put_i32_be(TypeTag::Function.into());
            put_seq(sink, args, |sink, ty| put_type(sink, ty));
            put_type(sink, ret);
        }
        Type::Var(inner) => {
            sink.put_i32_be(TypeTag::Var.into());
            put_type(sink, inner);
        }
        Type::Array(elem, nullable) => {
            sink.put_i32_be(TypeTag::Array.into());
            put_type(sink, elem);
            sink.put_bool(*nullable);
        }
        Type::Ref(name, exact, nullable) => {
            sink.put_i32_be(TypeTag::Ref.into());
            put_global(sink, name);
            sink.put_bool(*exact);
            sink.put_bool(*nullable);
        }
    }
}
