//! Structural type compatibility.
//!
//! Decides whether two descriptors denote behaviorally-compatible types.
//! The comparison is shape-by-shape: a kind-tag mismatch fails without
//! recursion, and each compound kind recurses into its components. There
//! is no variance anywhere -- struct fields are positional, pointer
//! qualifiers must match exactly, and the error-union "any error"
//! relaxation belongs to the checker's return-type path, not here.

use satis_desc::TypeDesc;

/// Whether `got` is structurally compatible with `expected`.
///
/// Struct fields are compared pairwise in declaration order, not by name
/// lookup: the same fields in a different order are incompatible. Const
/// and volatile qualifiers on pointers must match exactly in both
/// directions; callers wanting covariant acceptance pre-normalize their
/// descriptors.
pub fn is_compatible(expected: &TypeDesc, got: &TypeDesc) -> bool {
    // Identity fast path.
    if expected == got {
        return true;
    }

    match (expected, got) {
        (
            TypeDesc::Struct { tuple: t1, fields: f1, .. },
            TypeDesc::Struct { tuple: t2, fields: f2, .. },
        ) => {
            t1 == t2
                && f1.len() == f2.len()
                && f1
                    .iter()
                    .zip(f2)
                    .all(|(a, b)| a.name == b.name && is_compatible(&a.ty, &b.ty))
        }
        (
            TypeDesc::Enum { variants: v1, .. },
            TypeDesc::Enum { variants: v2, .. },
        ) => {
            v1.len() == v2.len()
                && v1
                    .iter()
                    .zip(v2)
                    .all(|(a, b)| a.name == b.name && a.value == b.value)
        }
        (
            TypeDesc::Array { len: l1, elem: e1 },
            TypeDesc::Array { len: l2, elem: e2 },
        ) => l1 == l2 && is_compatible(e1, e2),
        (
            TypeDesc::Pointer {
                size: s1,
                is_const: c1,
                is_volatile: v1,
                elem: e1,
            },
            TypeDesc::Pointer {
                size: s2,
                is_const: c2,
                is_volatile: v2,
                elem: e2,
            },
        ) => s1 == s2 && c1 == c2 && v1 == v2 && is_compatible(e1, e2),
        (TypeDesc::Optional(a), TypeDesc::Optional(b)) => is_compatible(a, b),
        (
            TypeDesc::ErrorUnion { set: s1, payload: p1 },
            TypeDesc::ErrorUnion { set: s2, payload: p2 },
        ) => s1 == s2 && is_compatible(p1, p2),
        (
            TypeDesc::Function { params: p1, ret: r1 },
            TypeDesc::Function { params: p2, ret: r2 },
        ) => {
            p1.len() == p2.len()
                && p1.iter().zip(p2).all(|(a, b)| is_compatible(a, b))
                && is_compatible(r1, r2)
        }
        // Kind mismatch, or same-kind leaves that failed the fast path
        // (primitives, opaques): incompatible.
        _ => false,
    }
}
