//! The compatibility checker.
//!
//! Orchestrates a full verification: ambiguity detection across the embed
//! graph first, then per-method signature checks, then the same full
//! procedure for each embedded interface. Collects every incompatibility
//! instead of stopping at the first, so one check produces a complete
//! picture.

use rustc_hash::FxHashSet;
use satis_desc::{ErrorSet, ImplDesc, TypeDesc};

use crate::iface::Interface;
use crate::matcher::is_compatible;
use crate::record::Incompatibility;
use crate::report;

/// Collect every reason `imp` fails to satisfy `iface`, in order.
///
/// The ambiguity pass runs first over the full composed method set; any
/// conflict short-circuits the signature checks entirely, because a
/// signature comparison is meaningless while the method identity itself is
/// unclear. With no conflicts, records come out in own-method declaration
/// order (within a method: missing or count, then parameters, then
/// return), followed by each embed's records in embed order. Each embed
/// goes through this same full procedure, so an embed whose own embeds
/// conflict contributes its ambiguity records rather than signature checks
/// against the conflicting shapes, and the short-circuit applies within
/// that embed's subtree only.
///
/// Never fails: an empty result means the interface is satisfied.
pub fn incompatibilities(iface: &Interface, imp: &ImplDesc) -> Vec<Incompatibility> {
    let mut records = Vec::new();

    // Ambiguity pass. The raw name list keeps duplicates; dedup here so a
    // twice-required name yields one AmbiguousMethod record, not two.
    let mut seen = FxHashSet::default();
    for name in iface.collect_method_names() {
        if !seen.insert(name) {
            continue;
        }
        if let Some(sources) = iface.find_conflicts(name) {
            records.push(Incompatibility::AmbiguousMethod {
                method: name.to_string(),
                interfaces: sources.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    if !records.is_empty() {
        return records;
    }

    check_own_methods(iface, imp, &mut records);
    for embed in iface.embeds() {
        records.extend(incompatibilities(embed, imp));
    }
    records
}

/// Own-method pass only; embeds are handled by the caller re-entering
/// [`incompatibilities`] so every level runs its own ambiguity pass.
fn check_own_methods(iface: &Interface, imp: &ImplDesc, records: &mut Vec<Incompatibility>) {
    for (name, expected) in iface.methods() {
        let Some(actual) = imp.method(name) else {
            records.push(Incompatibility::MissingMethod {
                method: name.to_string(),
            });
            continue;
        };

        if actual.param_count() != expected.param_count() {
            records.push(Incompatibility::WrongParamCount {
                method: name.to_string(),
                expected: expected.param_count(),
                got: actual.param_count(),
            });
        } else {
            // Parameter 0 is the receiver: any shape accepted, never
            // compared. Indices reported are receiver-inclusive.
            for (idx, (want, have)) in expected
                .params
                .iter()
                .zip(&actual.params)
                .enumerate()
                .skip(1)
            {
                if !is_compatible(want, have) {
                    records.push(Incompatibility::ParamTypeMismatch {
                        method: name.to_string(),
                        param_index: idx,
                        expected: want.clone(),
                        got: have.clone(),
                    });
                }
            }
        }

        if !return_compatible(&expected.ret, &actual.ret) {
            records.push(Incompatibility::ReturnTypeMismatch {
                method: name.to_string(),
                expected: expected.ret.clone(),
                got: actual.ret.clone(),
            });
        }
    }
}

/// Return-type comparison with the any-error relaxation: a required
/// `anyerror!P` accepts any error-union actual whose payload is
/// compatible with `P`, regardless of the concrete error set. Everything
/// else is the matcher's exact comparison.
fn return_compatible(expected: &TypeDesc, got: &TypeDesc) -> bool {
    if let TypeDesc::ErrorUnion {
        set: ErrorSet::Any,
        payload: expected_payload,
    } = expected
    {
        return match got {
            TypeDesc::ErrorUnion { payload, .. } => {
                is_compatible(expected_payload, payload)
            }
            _ => false,
        };
    }
    is_compatible(expected, got)
}

/// Assert that `imp` satisfies `iface`.
///
/// Panics with the full formatted report when it does not -- the abort
/// semantics of a translation-time failure. Callers that want to inspect
/// or recover use [`incompatibilities`] directly.
pub fn satisfied_by(iface: &Interface, imp: &ImplDesc) {
    let records = incompatibilities(iface, imp);
    if !records.is_empty() {
        panic!("{}", report::build_report(&imp.name, iface.name(), &records));
    }
}
