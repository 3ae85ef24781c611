use crate::encode::{put_seq, put_string};
use crate::ir::{Attr, Attrs, Bin, Comp, Conv};
use crate::schema::tags::{AttrTag, BinTag, CompTag, ConvTag};
use crate::sink::ByteSink;

/// Emits an `Attrs` set as `Seq<Attr>` in canonical (ordinal) order, so two
/// sets with the same members encode identically regardless of how the
/// caller built them.
pub(crate) fn put_attrs(sink: &mut ByteSink, attrs: &Attrs) {
    let mut sorted: Vec<&Attr> = attrs.iter().collect();
    sorted.sort_by_key(|attr| attr.ordinal());
    put_seq(sink, &sorted, |sink, attr| put_attr(sink, attr));
}

fn put_attr(sink: &mut ByteSink, attr: &Attr) {
    match attr {
        Attr::MayInline => sink.put_i32_be(AttrTag::MayInline.into()),
        Attr::InlineHint => sink.put_i32_be(AttrTag::InlineHint.into()),
        Attr::NoInline => sink.put_i32_be(AttrTag::NoInline.into()),
        Attr::AlwaysInline => sink.put_i32_be(AttrTag::AlwaysInline.into()),
        Attr::Dyn => sink.put_i32_be(AttrTag::Dyn.into()),
        Attr::Stub => sink.put_i32_be(AttrTag::Stub.into()),
        Attr::Extern => sink.put_i32_be(AttrTag::Extern.into()),
        Attr::Link(s) => {
            sink.put_i32_be(AttrTag::Link.into());
            put_string(sink, s);
        }
    }
}

pub(crate) fn put_bin(sink: &mut ByteSink, bin: Bin) {
    let tag: BinTag = match bin {
        Bin::Iadd => BinTag::Iadd,
        Bin::Fadd => BinTag::Fadd,
        Bin::Isub => BinTag::Isub,
        Bin::Fsub => BinTag::Fsub,
        Bin::Imul => BinTag::Imul,
        Bin::Fmul => BinTag::Fmul,
        Bin::Sdiv => BinTag::Sdiv,
        Bin::Udiv => BinTag::Udiv,
        Bin::Fdiv => BinTag::Fdiv,
        Bin::Srem => BinTag::Srem,
        Bin::Urem => BinTag::Urem,
        Bin::Frem => BinTag::Frem,
        Bin::Shl => BinTag::Shl,
        Bin::Lshr => BinTag::Lshr,
        Bin::Ashr => BinTag::Ashr,
        Bin::And => BinTag::And,
        Bin::Or => BinTag::Or,
        Bin::Xor => BinTag::Xor,
    };
    sink.put_i32_be(tag.into());
}

pub(crate) fn put_comp(sink: &mut ByteSink, comp: Comp) {
    let tag: CompTag = match comp {
        Comp::Ieq => CompTag::Ieq,
        Comp::Ine => CompTag::Ine,
        Comp::Ugt => CompTag::Ugt,
        Comp::Uge => CompTag::Uge,
        Comp::Ult => CompTag::Ult,
        Comp::Ule => CompTag::Ule,
        Comp::Sgt => CompTag::Sgt,
        Comp::Sge => CompTag::Sge,
        Comp::Slt => CompTag::Slt,
        Comp::Sle => CompTag::Sle,
        Comp::Feq => CompTag::Feq,
        Comp::Fne => CompTag::Fne,
        Comp::Fgt => CompTag::Fgt,
        Comp::Fge => CompTag::Fge,
        Comp::Flt => CompTag::Flt,
        Comp::Fle => CompTag::Fle,
    };
    sink.put_i32_be(tag.into());
}

pub(crate) fn put_conv(sink: &mut ByteSink, conv: Conv) {
    let tag: ConvTag = match conv {
        Conv::Trunc => ConvTag::Trunc,
        Conv::Zext => ConvTag::Zext,
        Conv::Sext => ConvTag::Sext,
        Conv::Fptrunc => ConvTag::Fptrunc,
        Conv::Fpext => ConvTag::Fpext,
        Conv::Fptoui => ConvTag::Fptoui,
        Conv::Fptosi => ConvTag::Fptosi,
        Conv::Uitofp => ConvTag::Uitofp,
        Conv::Sitofp => ConvTag::Sitofp,
        Conv::Ptrtoint => ConvTag::Ptrtoint,
        Conv::Inttoptr => ConvTag::Inttoptr,
        Conv::Bitcast => ConvTag::Bitcast,
    };
    sink.put_i32_be(tag.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrs_encode_in_canonical_order_regardless_of_input_order() {
        let built_forward = vec![Attr::Extern, Attr::MayInline, Attr::Stub];
        let built_backward = vec![Attr::Stub, Attr::Extern, Attr::MayInline];

        let mut a = ByteSink::new();
        put_attrs(&mut a, &built_forward);
        let mut b = ByteSink::new();
        put_attrs(&mut b, &built_backward);

        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(
            a.as_bytes(),
            &[0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 6]
        );
    }

    #[test]
    fn attr_link_carries_its_string_payload() {
        let mut sink = ByteSink::new();
        put_attr(&mut sink, &Attr::Link("libfoo".to_string()));
        let mut expected = vec![0, 0, 0, 7];
        expected.extend_from_slice(&6i32.to_be_bytes());
        expected.extend_from_slice(b"libfoo");
        assert_eq!(sink.as_bytes(), expected);
    }
}
