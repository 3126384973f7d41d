//! Diagnostic text rendering.
//!
//! Renders mismatch pairs, single incompatibility records, and whole
//! reports into deterministic plain text. The exact wording and indent
//! markers here are a compatibility contract: tooling is allowed to depend
//! on the message shape, so changing any label is a breaking change.

use satis_desc::TypeDesc;

use crate::hint::hint;
use crate::record::Incompatibility;

/// Render an expected/got pair as an indented two-line block, with a third
/// hint line when one of the hint rules applies.
pub fn format_mismatch(expected: &TypeDesc, got: &TypeDesc) -> String {
    let mut out = format!("  Expected: {}\n  Got: {}", expected, got);
    if let Some(h) = hint(expected, got) {
        out.push_str("\n  Hint: ");
        out.push_str(&h);
    }
    out
}

/// Render one incompatibility record into its multi-line message.
pub fn format_incompatibility(rec: &Incompatibility) -> String {
    match rec {
        Incompatibility::MissingMethod { method } => format!(
            "Missing required method: {}\n  Hint: add a method named '{}' with the signature required by the interface",
            method, method
        ),
        Incompatibility::WrongParamCount {
            method,
            expected,
            got,
        } => format!(
            "Method '{}' has incorrect number of parameters: expected {}, got {}\n  Hint: the receiver is parameter 0 and counts toward the total",
            method, expected, got
        ),
        Incompatibility::ParamTypeMismatch {
            method,
            param_index,
            expected,
            got,
        } => format!(
            "Method '{}' parameter {} has incorrect type:\n{}",
            method,
            param_index,
            format_mismatch(expected, got)
        ),
        Incompatibility::ReturnTypeMismatch {
            method,
            expected,
            got,
        } => format!(
            "Method '{}' return type is incorrect:\n{}",
            method,
            format_mismatch(expected, got)
        ),
        Incompatibility::AmbiguousMethod { method, interfaces } => format!(
            "Method '{}' is ambiguous - it appears in multiple interfaces: {}\n  Hint: resolve the conflict before the interface can be satisfied",
            method,
            interfaces.join(", ")
        ),
    }
}

/// Assemble the full report: a title line naming the implementation type
/// and the interface, then a 1-indexed numbered list of the records in the
/// exact order the checker produced them.
pub fn build_report(
    impl_name: &str,
    iface_name: &str,
    records: &[Incompatibility],
) -> String {
    let mut out = format!(
        "'{}' does not satisfy interface '{}':",
        impl_name, iface_name
    );
    for (idx, rec) in records.iter().enumerate() {
        let rendered = format_incompatibility(rec);
        for (line_no, line) in rendered.lines().enumerate() {
            out.push('\n');
            if line_no == 0 {
                out.push_str("  ");
                out.push_str(&(idx + 1).to_string());
                out.push_str(". ");
                out.push_str(line);
            } else {
                // Continuation lines already carry a two-space indent;
                // shift them under the numbered entry.
                out.push_str("   ");
                out.push_str(line);
            }
        }
    }
    out
}
