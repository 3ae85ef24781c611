use num_enum::IntoPrimitive;

/// `Defn` variant tags — 7 variants.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum DefnTag {
    Var,
    Const,
    Declare,
    Define,
    Trait,
    Class,
    Module,
}

/// `Attr` variant tags — 8 variants. The discriminant order here is also
/// the canonical sort key an `Attrs` set is ordered by before encoding —
/// see [`crate::ir::Attr::ordinal`].
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum AttrTag {
    MayInline,
    InlineHint,
    NoInline,
    AlwaysInline,
    Dyn,
    Stub,
    Extern,
    Link,
}

/// Arithmetic operation kinds — 18 variants.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum BinTag {
    Iadd,
    Fadd,
    Isub,
    Fsub,
    Imul,
    Fmul,
    Sdiv,
    Udiv,
    Fdiv,
    Srem,
    Urem,
    Frem,
    Shl,
    Lshr,
    Ashr,
    And,
    Or,
    Xor,
}

/// Comparison operation kinds — 16 variants.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum CompTag {
    Ieq,
    Ine,
    Ugt,
    Uge,
    Ult,
    Ule,
    Sgt,
    Sge,
    Slt,
    Sle,
    Feq,
    Fne,
    Fgt,
    Fge,
    Flt,
    Fle,
}

/// Conversion operation kinds — 12 variants.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum ConvTag {
    Trunc,
    Zext,
    Sext,
    Fptrunc,
    Fpext,
    Fptoui,
    Fptosi,
    Uitofp,
    Sitofp,
    Ptrtoint,
    Inttoptr,
    Bitcast,
}

/// `Global` variant tags — 3 variants.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum GlobalTag {
    None,
    Top,
    Member,
}

/// `Sig` variant tags — 7 variants.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum SigTag {
    Field,
    Ctor,
    Method,
    Proxy,
    Extern,
    Generated,
    Duplicate,
}

/// `Type` variant tags. 26 wire variants: 20 primitives plus 6 composites
/// (`ArrayValue`, `StructValue`, `Function`, `Var`, `Array`, `Ref`).
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum TypeTag {
    None,
    Void,
    Vararg,
    Ptr,
    Bool,
    Char,
    Byte,
    UByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Null,
    Nothing,
    Virtual,
    Unit,
    ArrayValue,
    StructValue,
    Function,
    Var,
    Array,
    Ref,
}

/// `Val` variant tags. `Val::Null` has no tag of its own — it aliases
/// [`ValTag::Zero`] — so this enumerates the 20 wire tags backing the 21
/// in-memory variants.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum ValTag {
    None,
    True,
    False,
    Zero,
    Undef,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    StructValue,
    ArrayValue,
    Chars,
    Local,
    Global,
    Unit,
    Const,
    String,
    Virtual,
}

/// `Next` variant tags — 4 variants. `Next::Succ`/`Next::Fail` are
/// constructible in memory but have no tag here; encoding either one
/// panics.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum NextTag {
    None,
    Unwind,
    Label,
    Case,
}

/// `Inst` variant tags — 10 variants. `Let` and `LetUnwind` are a single
/// Rust variant ([`crate::ir::Inst::Let`]) that picks one of these two tags
/// depending on whether its `Next` is `Next::None`.
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum InstTag {
    None,
    Label,
    Let,
    LetUnwind,
    Unreachable,
    Ret,
    Jump,
    If,
    Switch,
    Throw,
}

/// `Op` variant tags — 31 variants, one per operation in the algebra
/// (calls, loads/stores, aggregate access, allocation, arithmetic,
/// comparison, conversion, dispatch, array and mutable-slot primitives).
#[derive(Debug, Clone, Copy, IntoPrimitive)]
#[repr(i32)]
pub enum OpTag {
    Call,
    Load,
    Store,
    Elem,
    Extract,
    Insert,
    Stackalloc,
    Bin,
    Comp,
    Conv,
    Select,
    Classalloc,
    Fieldload,
    Fieldstore,
    Method,
    Dynmethod,
    Module,
    As,
    Is,
    Box,
    Unbox,
    Sizeof,
    Copy,
    Closure,
    Var,
    Varload,
    Varstore,
    Arrayalloc,
    Arrayload,
    Arraystore,
    Arraylength,
}
