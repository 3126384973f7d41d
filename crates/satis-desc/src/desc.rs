//! Structural type descriptors.
//!
//! Defines the core `TypeDesc` enum plus its kind-specific shape data:
//! primitives, structs, enums, arrays, pointers/slices, optionals, error
//! unions, function shapes, and opaque nominal types. The `Display` impl
//! produces the surface syntax quoted verbatim in mismatch diagnostics
//! (`[]const u8`, `?u32`, `anyerror!u32`, ...), so its output is part of
//! the message contract.

use std::fmt;

use serde::Serialize;

/// A primitive scalar type. Compared by exact value equality -- an `i32`
/// never matches a `u32` or an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Primitive {
    /// A fixed-width integer (`u8`, `i64`, ...).
    Int { width: u16, signed: bool },
    /// A fixed-width float (`f32`, `f64`).
    Float { width: u16 },
    Bool,
    Void,
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Int { width, signed: true } => write!(f, "i{}", width),
            Primitive::Int { width, signed: false } => write!(f, "u{}", width),
            Primitive::Float { width } => write!(f, "f{}", width),
            Primitive::Bool => write!(f, "bool"),
            Primitive::Void => write!(f, "void"),
        }
    }
}

/// One struct field: name plus field type, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeDesc,
}

/// One enum variant: name plus its backing integer value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub name: String,
    pub value: i64,
}

/// How many items a pointer designates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SizeClass {
    /// A pointer to exactly one item (`*T`).
    One,
    /// A pointer to an unknown number of items (`[*]T`).
    Many,
    /// A pointer-plus-length pair (`[]T`).
    Slice,
}

/// The error half of an error union: a specific named error set, or the
/// open "any error" set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorSet {
    /// Any error set is acceptable (`anyerror`).
    Any,
    /// A specific, named error set; identity is the name.
    Named(String),
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSet::Any => write!(f, "anyerror"),
            ErrorSet::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A structural type descriptor.
///
/// One variant per type kind. Descriptors carry no nominal identity beyond
/// the names embedded in their shape data; two descriptors denote the same
/// type exactly when they are equal as values, which doubles as the
/// identity fast path in the matcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeDesc {
    Primitive(Primitive),
    /// A struct: named or tuple, fields in declaration order.
    Struct {
        name: String,
        tuple: bool,
        fields: Vec<Field>,
    },
    /// An enum: variants in declaration order, each with a backing value.
    Enum {
        name: String,
        variants: Vec<Variant>,
    },
    /// A fixed-length array.
    Array { len: usize, elem: Box<TypeDesc> },
    /// A pointer or slice, with const/volatile qualifiers.
    Pointer {
        size: SizeClass,
        is_const: bool,
        is_volatile: bool,
        elem: Box<TypeDesc>,
    },
    /// An optional/nullable wrapper around an inner type.
    Optional(Box<TypeDesc>),
    /// An error union: error-set identity plus payload type.
    ErrorUnion {
        set: ErrorSet,
        payload: Box<TypeDesc>,
    },
    /// A function shape: parameter types plus return type.
    Function {
        params: Vec<TypeDesc>,
        ret: Box<TypeDesc>,
    },
    /// Any other kind, compared purely by name.
    Opaque(String),
}

impl TypeDesc {
    /// Create an integer descriptor of the given width and signedness.
    pub fn int(width: u16, signed: bool) -> TypeDesc {
        TypeDesc::Primitive(Primitive::Int { width, signed })
    }

    /// Create a `u8` descriptor.
    pub fn u8() -> TypeDesc {
        TypeDesc::int(8, false)
    }

    /// Create a `u32` descriptor.
    pub fn u32() -> TypeDesc {
        TypeDesc::int(32, false)
    }

    /// Create a `u64` descriptor.
    pub fn u64() -> TypeDesc {
        TypeDesc::int(64, false)
    }

    /// Create an `i32` descriptor.
    pub fn i32() -> TypeDesc {
        TypeDesc::int(32, true)
    }

    /// Create an `i64` descriptor.
    pub fn i64() -> TypeDesc {
        TypeDesc::int(64, true)
    }

    /// Create an `f64` descriptor.
    pub fn f64() -> TypeDesc {
        TypeDesc::Primitive(Primitive::Float { width: 64 })
    }

    /// Create a `bool` descriptor.
    pub fn bool() -> TypeDesc {
        TypeDesc::Primitive(Primitive::Bool)
    }

    /// Create a `void` descriptor.
    pub fn void() -> TypeDesc {
        TypeDesc::Primitive(Primitive::Void)
    }

    /// Create a named-struct descriptor from `(field name, field type)`
    /// pairs in declaration order.
    pub fn struct_of(
        name: impl Into<String>,
        fields: Vec<(&str, TypeDesc)>,
    ) -> TypeDesc {
        TypeDesc::Struct {
            name: name.into(),
            tuple: false,
            fields: fields
                .into_iter()
                .map(|(name, ty)| Field { name: name.to_string(), ty })
                .collect(),
        }
    }

    /// Create a tuple-struct descriptor. Fields are named by position.
    pub fn tuple_of(name: impl Into<String>, types: Vec<TypeDesc>) -> TypeDesc {
        TypeDesc::Struct {
            name: name.into(),
            tuple: true,
            fields: types
                .into_iter()
                .enumerate()
                .map(|(i, ty)| Field { name: i.to_string(), ty })
                .collect(),
        }
    }

    /// Create an enum descriptor from `(variant name, backing value)` pairs
    /// in declaration order.
    pub fn enum_of(name: impl Into<String>, variants: Vec<(&str, i64)>) -> TypeDesc {
        TypeDesc::Enum {
            name: name.into(),
            variants: variants
                .into_iter()
                .map(|(name, value)| Variant { name: name.to_string(), value })
                .collect(),
        }
    }

    /// Create a fixed-length array descriptor.
    pub fn array(len: usize, elem: TypeDesc) -> TypeDesc {
        TypeDesc::Array { len, elem: Box::new(elem) }
    }

    /// Create a pointer descriptor with explicit qualifiers.
    pub fn pointer(
        size: SizeClass,
        is_const: bool,
        is_volatile: bool,
        elem: TypeDesc,
    ) -> TypeDesc {
        TypeDesc::Pointer {
            size,
            is_const,
            is_volatile,
            elem: Box::new(elem),
        }
    }

    /// Create a single-item pointer descriptor (`*T`).
    pub fn single(elem: TypeDesc) -> TypeDesc {
        TypeDesc::pointer(SizeClass::One, false, false, elem)
    }

    /// Create a many-item pointer descriptor (`[*]T`).
    pub fn many(elem: TypeDesc) -> TypeDesc {
        TypeDesc::pointer(SizeClass::Many, false, false, elem)
    }

    /// Create a mutable slice descriptor (`[]T`).
    pub fn slice(elem: TypeDesc) -> TypeDesc {
        TypeDesc::pointer(SizeClass::Slice, false, false, elem)
    }

    /// Create a const slice descriptor (`[]const T`).
    pub fn const_slice(elem: TypeDesc) -> TypeDesc {
        TypeDesc::pointer(SizeClass::Slice, true, false, elem)
    }

    /// Create an optional descriptor (`?T`).
    pub fn optional(inner: TypeDesc) -> TypeDesc {
        TypeDesc::Optional(Box::new(inner))
    }

    /// Create an error union with a specific named error set (`Set!T`).
    pub fn error_union(set: impl Into<String>, payload: TypeDesc) -> TypeDesc {
        TypeDesc::ErrorUnion {
            set: ErrorSet::Named(set.into()),
            payload: Box::new(payload),
        }
    }

    /// Create an error union over the open error set (`anyerror!T`).
    pub fn any_error(payload: TypeDesc) -> TypeDesc {
        TypeDesc::ErrorUnion {
            set: ErrorSet::Any,
            payload: Box::new(payload),
        }
    }

    /// Create a function-shape descriptor.
    pub fn function(params: Vec<TypeDesc>, ret: TypeDesc) -> TypeDesc {
        TypeDesc::Function { params, ret: Box::new(ret) }
    }

    /// Create an opaque nominal descriptor, compared by name only.
    pub fn opaque(name: impl Into<String>) -> TypeDesc {
        TypeDesc::Opaque(name.into())
    }

    /// The placeholder descriptor for the receiver slot (parameter 0 of a
    /// method signature). Never structurally inspected by the checker; any
    /// receiver shape is accepted.
    pub fn receiver() -> TypeDesc {
        TypeDesc::Opaque("Self".to_string())
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Primitive(p) => write!(f, "{}", p),
            TypeDesc::Struct { name, .. } => write!(f, "{}", name),
            TypeDesc::Enum { name, .. } => write!(f, "{}", name),
            TypeDesc::Array { len, elem } => write!(f, "[{}]{}", len, elem),
            TypeDesc::Pointer {
                size,
                is_const,
                is_volatile,
                elem,
            } => {
                match size {
                    SizeClass::One => write!(f, "*")?,
                    SizeClass::Many => write!(f, "[*]")?,
                    SizeClass::Slice => write!(f, "[]")?,
                }
                if *is_const {
                    write!(f, "const ")?;
                }
                if *is_volatile {
                    write!(f, "volatile ")?;
                }
                write!(f, "{}", elem)
            }
            TypeDesc::Optional(inner) => write!(f, "?{}", inner),
            TypeDesc::ErrorUnion { set, payload } => write!(f, "{}!{}", set, payload),
            TypeDesc::Function { params, ret } => {
                write!(f, "fn(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ") -> {}", ret)
            }
            TypeDesc::Opaque(name) => write!(f, "{}", name),
        }
    }
}
