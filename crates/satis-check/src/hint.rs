//! Fix suggestions for mismatched descriptor pairs.
//!
//! Generates an optional human-oriented suggestion from the shapes of the
//! expected and actual types. Rules are ordered and first-match-wins, so a
//! mismatch gets at most one hint.

use satis_desc::TypeDesc;

use crate::matcher::is_compatible;

/// Suggest a fix for an `expected` / `got` mismatch, if one of the known
/// shape patterns applies.
pub fn hint(expected: &TypeDesc, got: &TypeDesc) -> Option<String> {
    // 1. Const pointer expected, non-const actual of otherwise-compatible
    //    shape: the one directional case the matcher deliberately rejects.
    if let (
        TypeDesc::Pointer {
            size: s1,
            is_const: true,
            is_volatile: v1,
            elem: e1,
        },
        TypeDesc::Pointer {
            size: s2,
            is_const: false,
            is_volatile: v2,
            elem: e2,
        },
    ) = (expected, got)
    {
        if s1 == s2 && v1 == v2 && is_compatible(e1, e2) {
            return Some(format!(
                "add a 'const' qualifier to the parameter type: expected {}",
                expected
            ));
        }
    }

    // 2 & 3. Optional wrapper present on exactly one side.
    match (expected, got) {
        (TypeDesc::Optional(_), TypeDesc::Optional(_)) => {}
        (TypeDesc::Optional(_), _) => {
            return Some(format!("wrap the type in an optional: ?{}", got));
        }
        (_, TypeDesc::Optional(_)) => {
            return Some(format!("remove the optional wrapper: expected {}", expected));
        }
        _ => {}
    }

    // 4. Two enums.
    if let (TypeDesc::Enum { .. }, TypeDesc::Enum { .. }) = (expected, got) {
        return Some("check that enum variant names and values match exactly".to_string());
    }

    // 5. Two structs.
    if let (
        TypeDesc::Struct { fields: f1, .. },
        TypeDesc::Struct { fields: f2, .. },
    ) = (expected, got)
    {
        if f1.len() != f2.len() {
            return Some(format!(
                "struct field counts differ: expected {} fields, got {}",
                f1.len(),
                f2.len()
            ));
        }
        return Some(
            "check that struct field names and types match exactly, in declaration order"
                .to_string(),
        );
    }

    // 6. Two pointers of differing size class.
    if let (
        TypeDesc::Pointer { size: s1, .. },
        TypeDesc::Pointer { size: s2, .. },
    ) = (expected, got)
    {
        if s1 != s2 {
            return Some(
                "check single-item pointer vs many-item pointer vs slice semantics".to_string(),
            );
        }
    }

    None
}
