use irpack::ir::{Attr, Defn, Global, Inst, Next, Op, Sig, Type, Val};
use irpack::{serialize, COMPAT_VERSION, MAGIC, REVISION};

fn header_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAGIC.to_be_bytes());
    bytes.extend_from_slice(&COMPAT_VERSION.to_be_bytes());
    bytes.extend_from_slice(&REVISION.to_be_bytes());
    bytes
}

/// An empty input is exactly the header plus a zero index count.
#[test]
fn empty_input_has_no_index_entries_and_no_payload() {
    let bytes = serialize(&[]);
    let mut expected = header_bytes();
    expected.extend_from_slice(&0i32.to_be_bytes());
    assert_eq!(bytes, expected);
}

/// A single `Declare` exercises the tag-dispatch encoders for `Global`,
/// `Type`, and `Defn` together, and the index's single offset points at the
/// start of the payload.
#[test]
fn single_declare_places_its_offset_at_the_payload_start() {
    let defns = vec![Defn::Declare(
        Vec::new(),
        Global::Top("foo".to_string()),
        Type::Function(vec![Type::Int], Box::new(Type::Int)),
    )];
    let bytes = serialize(&defns);

    let count = i32::from_be_bytes(bytes[12..16].try_into().unwrap());
    assert_eq!(count, 1);

    // Name index entry: Global::Top("foo") then the i32 offset slot.
    // put_global(Top) = tag(4) + len(4) + "foo"(3) = 11 bytes.
    let offset_slot_pos = 16 + 11;
    let offset = i32::from_be_bytes(
        bytes[offset_slot_pos..offset_slot_pos + 4]
            .try_into()
            .unwrap(),
    );
    let payload_start = offset_slot_pos + 4;
    assert_eq!(offset as usize, payload_start);
    assert!(bytes.len() > payload_start);
}

/// `Val::Null` is indistinguishable on the wire from `Val::Zero(Type::Ptr)`.
#[test]
fn null_value_aliases_zero_ptr_on_the_wire() {
    let with_null = vec![Defn::Const(
        Vec::new(),
        Global::Top("n".to_string()),
        Type::Ptr,
        Val::Null,
    )];
    let with_zero_ptr = vec![Defn::Const(
        Vec::new(),
        Global::Top("n".to_string()),
        Type::Ptr,
        Val::Zero(Type::Ptr),
    )];
    assert_eq!(serialize(&with_null), serialize(&with_zero_ptr));
}

/// A volatile load inside a `Define` aborts before the stream is usable.
#[test]
#[should_panic(expected = "volatile=true is not encodable")]
fn volatile_load_inside_a_definition_panics() {
    let defns = vec![Defn::Define(
        Vec::new(),
        Global::Top("f".to_string()),
        Type::Function(Vec::new(), Box::new(Type::Void)),
        vec![Inst::Let(
            1,
            Op::Load(Type::Int, Val::Local(0, Type::Ptr), true),
            Next::None,
        )],
    )];
    serialize(&defns);
}

/// A two-way switch emits a default label then a sequence of `Case`
/// successors, each wrapping its own `Label`.
#[test]
fn switch_with_two_cases_encodes_default_then_each_case() {
    let defns = vec![Defn::Define(
        Vec::new(),
        Global::Top("f".to_string()),
        Type::Function(Vec::new(), Box::new(Type::Void)),
        vec![Inst::Switch(
            Val::Int(0),
            Box::new(Next::Label(0, vec![])),
            vec![
                Next::Case(Val::Int(1), Box::new(Next::Label(1, vec![]))),
                Next::Case(Val::Int(2), Box::new(Next::Label(2, vec![]))),
            ],
        )],
    )];
    // Encoding must succeed and be deterministic.
    let first = serialize(&defns);
    let second = serialize(&defns);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

/// Back-patch ordering: the nth index offset always equals the header size
/// plus the index region plus the sum of all earlier payload sizes,
/// regardless of how large each payload is.
#[test]
fn back_patch_offsets_account_for_growing_prior_payloads() {
    let defns = vec![
        Defn::Declare(Vec::new(), Global::Top("a".to_string()), Type::Int),
        Defn::Declare(
            vec![Attr::Extern, Attr::MayInline],
            Global::Top("bb".to_string()),
            Type::Function(vec![Type::Int, Type::Long], Box::new(Type::Void)),
        ),
        Defn::Declare(Vec::new(), Global::Top("c".to_string()), Type::Bool),
    ];
    let bytes = serialize(&defns);

    let count = i32::from_be_bytes(bytes[12..16].try_into().unwrap());
    assert_eq!(count, 3);

    // Re-derive each index entry's recorded offset and confirm it strictly
    // increases and lands within the buffer.
    let mut cursor = 16usize;
    let mut offsets = Vec::new();
    for name_len in [1usize, 2, 1] {
        // Global::Top(id): tag(4) + len(4) + id bytes.
        cursor += 4 + 4 + name_len;
        let offset = i32::from_be_bytes(bytes[cursor..cursor + 4].try_into().unwrap());
        offsets.push(offset as usize);
        cursor += 4;
    }

    assert!(offsets[0] < offsets[1]);
    assert!(offsets[1] < offsets[2]);
    assert!(offsets[2] <= bytes.len());
}

/// `Attrs` built in different orders still encode identically because the
/// encoder sorts by canonical ordinal.
#[test]
fn attrs_built_in_different_orders_encode_identically() {
    let a = vec![Defn::Declare(
        vec![Attr::Stub, Attr::MayInline, Attr::Extern],
        Global::Top("x".to_string()),
        Type::Int,
    )];
    let b = vec![Defn::Declare(
        vec![Attr::Extern, Attr::Stub, Attr::MayInline],
        Global::Top("x".to_string()),
        Type::Int,
    )];
    assert_eq!(serialize(&a), serialize(&b));
}

/// A `Global::Member` whose owner is not a `Top` is a precondition
/// violation, not recoverable input.
#[test]
#[should_panic(expected = "Global::Member owner must be Global::Top")]
fn member_with_non_top_owner_panics() {
    let defns = vec![Defn::Declare(
        Vec::new(),
        Global::Member(Box::new(Global::None), Sig::Extern("x".to_string())),
        Type::Int,
    )];
    serialize(&defns);
}
