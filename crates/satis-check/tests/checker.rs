//! Integration tests for the compatibility checker: record completeness,
//! receiver exclusion, return-type relaxation, and end-to-end scenarios
//! over a User/Repository domain.

use std::sync::Arc;

use satis_check::{incompatibilities, Incompatibility, Interface};
use satis_desc::{ImplDesc, MethodSig, TypeDesc};

// ── Helpers ────────────────────────────────────────────────────────────

fn sig(params: Vec<TypeDesc>, ret: TypeDesc) -> MethodSig {
    MethodSig::new(params, ret).expect("test signature must have a receiver")
}

fn user() -> TypeDesc {
    TypeDesc::struct_of(
        "User",
        vec![
            ("id", TypeDesc::u32()),
            ("name", TypeDesc::const_slice(TypeDesc::u8())),
        ],
    )
}

/// A repository interface over the User domain type:
/// `create(self, User) -> anyerror!u32`, `delete(self, u32) -> anyerror!void`,
/// `log(self, []const u8) -> void`.
fn repository() -> Arc<Interface> {
    Interface::define(
        "Repository",
        vec![
            (
                "create".to_string(),
                sig(
                    vec![TypeDesc::receiver(), user()],
                    TypeDesc::any_error(TypeDesc::u32()),
                ),
            ),
            (
                "delete".to_string(),
                sig(
                    vec![TypeDesc::receiver(), TypeDesc::u32()],
                    TypeDesc::any_error(TypeDesc::void()),
                ),
            ),
            (
                "log".to_string(),
                sig(
                    vec![TypeDesc::receiver(), TypeDesc::const_slice(TypeDesc::u8())],
                    TypeDesc::void(),
                ),
            ),
        ],
        vec![],
    )
    .expect("interface definition")
}

/// A candidate that satisfies `repository()` fully, returning a concrete
/// named error set where the interface asks for anyerror.
fn good_repo() -> ImplDesc {
    ImplDesc::new("DbRepository")
        .with_method(
            "create",
            sig(
                vec![TypeDesc::receiver(), user()],
                TypeDesc::error_union("DbError", TypeDesc::u32()),
            ),
        )
        .with_method(
            "delete",
            sig(
                vec![TypeDesc::receiver(), TypeDesc::u32()],
                TypeDesc::error_union("DbError", TypeDesc::void()),
            ),
        )
        .with_method(
            "log",
            sig(
                vec![TypeDesc::receiver(), TypeDesc::const_slice(TypeDesc::u8())],
                TypeDesc::void(),
            ),
        )
}

// ── Full satisfaction ──────────────────────────────────────────────────

#[test]
fn fully_compliant_candidate() {
    let iface = repository();
    assert!(incompatibilities(&iface, &good_repo()).is_empty());
}

// ── Completeness of collection ─────────────────────────────────────────

#[test]
fn two_missing_plus_one_wrong_count_is_exactly_three_records() {
    let iface = repository();
    // Missing create and delete; log has a dropped parameter.
    let imp = ImplDesc::new("PartialRepo").with_method(
        "log",
        sig(vec![TypeDesc::receiver()], TypeDesc::void()),
    );

    let records = incompatibilities(&iface, &imp);
    assert_eq!(records.len(), 3, "got: {:?}", records);
    assert_eq!(
        records[0],
        Incompatibility::MissingMethod { method: "create".into() }
    );
    assert_eq!(
        records[1],
        Incompatibility::MissingMethod { method: "delete".into() }
    );
    assert_eq!(
        records[2],
        Incompatibility::WrongParamCount {
            method: "log".into(),
            expected: 2,
            got: 1,
        }
    );
}

// ── End-to-end scenarios ───────────────────────────────────────────────

#[test]
fn missing_create_yields_one_missing_method() {
    let iface = Interface::define(
        "Creator",
        vec![(
            "create".to_string(),
            sig(
                vec![TypeDesc::receiver(), user()],
                TypeDesc::any_error(TypeDesc::u32()),
            ),
        )],
        vec![],
    )
    .unwrap();
    let imp = ImplDesc::new("Nothing");

    let records = incompatibilities(&iface, &imp);
    assert_eq!(
        records,
        vec![Incompatibility::MissingMethod { method: "create".into() }]
    );
}

#[test]
fn const_slice_param_mismatch_reports_index_one() {
    let iface = Interface::define(
        "Logger",
        vec![(
            "log".to_string(),
            sig(
                vec![TypeDesc::receiver(), TypeDesc::const_slice(TypeDesc::u8())],
                TypeDesc::void(),
            ),
        )],
        vec![],
    )
    .unwrap();
    let imp = ImplDesc::new("MutLogger").with_method(
        "log",
        sig(
            vec![TypeDesc::receiver(), TypeDesc::slice(TypeDesc::u8())],
            TypeDesc::void(),
        ),
    );

    let records = incompatibilities(&iface, &imp);
    match records.as_slice() {
        [Incompatibility::ParamTypeMismatch {
            method,
            param_index,
            expected,
            got,
        }] => {
            assert_eq!(method, "log");
            assert_eq!(*param_index, 1);
            assert_eq!(expected.to_string(), "[]const u8");
            assert_eq!(got.to_string(), "[]u8");
        }
        other => panic!("expected one ParamTypeMismatch, got {:?}", other),
    }

    // The rendered record carries the const hint.
    let rendered = records[0].to_string();
    assert!(rendered.contains("Hint: add a 'const' qualifier"), "{}", rendered);
}

#[test]
fn dropped_parameter_reports_receiver_inclusive_counts() {
    let iface = Interface::define(
        "Writer",
        vec![(
            "write".to_string(),
            sig(
                vec![TypeDesc::receiver(), TypeDesc::u32(), TypeDesc::u32()],
                TypeDesc::void(),
            ),
        )],
        vec![],
    )
    .unwrap();
    let imp = ImplDesc::new("ShortWriter").with_method(
        "write",
        sig(vec![TypeDesc::receiver(), TypeDesc::u32()], TypeDesc::void()),
    );

    let records = incompatibilities(&iface, &imp);
    assert_eq!(
        records,
        vec![Incompatibility::WrongParamCount {
            method: "write".into(),
            expected: 3,
            got: 2,
        }]
    );
}

// ── Receiver exclusion ─────────────────────────────────────────────────

#[test]
fn value_and_pointer_receivers_both_accepted() {
    let iface = repository();

    // Same as good_repo but with a by-value struct receiver on one method
    // and a pointer receiver on another.
    let imp = ImplDesc::new("MixedReceivers")
        .with_method(
            "create",
            sig(
                vec![user(), user()],
                TypeDesc::error_union("DbError", TypeDesc::u32()),
            ),
        )
        .with_method(
            "delete",
            sig(
                vec![TypeDesc::single(user()), TypeDesc::u32()],
                TypeDesc::error_union("DbError", TypeDesc::void()),
            ),
        )
        .with_method(
            "log",
            sig(
                vec![TypeDesc::receiver(), TypeDesc::const_slice(TypeDesc::u8())],
                TypeDesc::void(),
            ),
        );

    assert!(incompatibilities(&iface, &imp).is_empty());
}

// ── Error-union payload sensitivity ────────────────────────────────────

#[test]
fn any_error_rejects_differing_payload() {
    let iface = repository();
    let mut imp = good_repo();
    imp = imp.with_method(
        "create",
        sig(
            vec![TypeDesc::receiver(), user()],
            TypeDesc::error_union("DbError", TypeDesc::u64()),
        ),
    );

    let records = incompatibilities(&iface, &imp);
    match records.as_slice() {
        [Incompatibility::ReturnTypeMismatch { method, .. }] => {
            assert_eq!(method, "create");
        }
        other => panic!("expected one ReturnTypeMismatch, got {:?}", other),
    }
}

#[test]
fn param_and_return_mismatch_on_same_method_both_reported() {
    let iface = Interface::define(
        "Counter",
        vec![(
            "bump".to_string(),
            sig(
                vec![TypeDesc::receiver(), TypeDesc::u32()],
                TypeDesc::u32(),
            ),
        )],
        vec![],
    )
    .unwrap();
    let imp = ImplDesc::new("OffCounter").with_method(
        "bump",
        sig(vec![TypeDesc::receiver(), TypeDesc::i32()], TypeDesc::u64()),
    );

    let records = incompatibilities(&iface, &imp);
    assert_eq!(records.len(), 2, "got: {:?}", records);
    assert!(matches!(
        &records[0],
        Incompatibility::ParamTypeMismatch { param_index: 1, .. }
    ));
    assert!(matches!(&records[1], Incompatibility::ReturnTypeMismatch { .. }));
}
