use crate::encode::control::put_inst;
use crate::encode::leaf::put_attrs;
use crate::encode::names::put_global;
use crate::encode::types::put_type;
use crate::encode::values::put_val;
use crate::encode::{put_option, put_seq};
use crate::ir::Defn;
use crate::schema::tags::DefnTag;
use crate::sink::ByteSink;

/// Emits a `Defn` payload: an `i32` tag, the attrs, the name, then the
/// kind-specific fields in declaration order. The name is written here in
/// full even though it also appears in the name index — the index entry
/// and the payload are independently decodable, so either one alone is
/// enough to read that definition.
pub(crate) fn put_defn(sink: &mut ByteSink, defn: &Defn) {
    match defn {
        Defn::Var(attrs, name, ty, value) => {
            sink.put_i32_be(DefnTag::Var.into());
            put_attrs(sink, attrs);
            put_global(sink, name);
            put_type(sink, ty);
            put_val(sink, value);
        }
        Defn::Const(attrs, name, ty, value) => {
            sink.put_i32_be(DefnTag::Const.into());
            put_attrs(sink, attrs);
            put_global(sink, name);
            put_type(sink, ty);
            put_val(sink, value);
        }
        Defn::Declare(attrs, name, ty) => {
            sink.put_i32_be(DefnTag::Declare.into());
            put_attrs(sink, attrs);
            put_global(sink, name);
            put_type(sink, ty);
        }
        Defn::Define(attrs, name, ty, insts) => {
            sink.put_i32_be(DefnTag::Define.into());
            put_attrs(sink, attrs);
            put_global(sink, name);
            put_type(sink, ty);
            put_seq(sink, insts, |sink, inst| put_inst(sink, inst));
        }
        Defn::Trait(attrs, name, ifaces) => {
            sink.put_i32_be(DefnTag::Trait.into());
            put_attrs(sink, attrs);
            put_global(sink, name);
            put_seq(sink, ifaces, |sink, g| put_global(sink, g));
        }
        Defn::Class(attrs, name, parent, ifaces) => {
            sink.put_i32_be(DefnTag::Class.into());
            put_attrs(sink, attrs);
            put_global(sink, name);
            put_option(sink, parent, |sink, g| put_global(sink, g));
            put_seq(sink, ifaces, |sink, g| put_global(sink, g));
        }
        Defn::Module(attrs, name, parent, ifaces) => {
            sink.put_i32_be(DefnTag::Module.into());
            put_attrs(sink, attrs);
            put_global(sink, name);
            put_option(sink, parent, |sink, g| put_global(sink, g));
            put_seq(sink, ifaces, |sink, g| put_global(sink, g));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Global, Type};

    #[test]
    fn declare_emits_tag_attrs_name_then_type() {
        let mut sink = ByteSink::new();
        let defn = Defn::Declare(
            Vec::new(),
            Global::Top("foo".to_string()),
            Type::Function(vec![Type::Int], Box::new(Type::Int)),
        );
        put_defn(&mut sink, &defn);

        let declare_tag: i32 = DefnTag::Declare.into();
        let top_tag: i32 = crate::schema::tags::GlobalTag::Top.into();
        let fn_tag: i32 = crate::schema::tags::TypeTag::Function.into();
        let int_tag: i32 = crate::schema::tags::TypeTag::Int.into();

        let mut expected = Vec::new();
        expected.extend_from_slice(&declare_tag.to_be_bytes());
        expected.extend_from_slice(&0i32.to_be_bytes());
        expected.extend_from_slice(&top_tag.to_be_bytes());
        expected.extend_from_slice(&3i32.to_be_bytes());
        expected.extend_from_slice(b"foo");
        expected.extend_from_slice(&fn_tag.to_be_bytes());
        expected.extend_from_slice(&1i32.to_be_bytes());
        expected.extend_from_slice(&int_tag.to_be_bytes());
        expected.extend_from_slice(&int_tag.to_be_bytes());

        assert_eq!(sink.as_bytes(), expected);
    }
}
