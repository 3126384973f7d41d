//! Incompatibility records.
//!
//! Each record is one discrete reason a candidate fails to satisfy an
//! interface. A check produces a fresh, ordered list of these; the list is
//! the normal result of `incompatibilities`, not an error channel.

use std::fmt;

use satis_desc::TypeDesc;
use serde::Serialize;

use crate::report;

/// One reason a candidate does not satisfy an interface.
///
/// Parameter indices are receiver-inclusive: parameter 0 is the receiver
/// (never reported, since it is never checked), so the smallest index that
/// can appear in `ParamTypeMismatch` is 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Incompatibility {
    /// The candidate has no member of the required name.
    MissingMethod { method: String },
    /// The member exists but takes the wrong number of parameters
    /// (receiver included in both counts).
    WrongParamCount {
        method: String,
        expected: usize,
        got: usize,
    },
    /// A parameter at `param_index` is structurally incompatible.
    ParamTypeMismatch {
        method: String,
        param_index: usize,
        expected: TypeDesc,
        got: TypeDesc,
    },
    /// The return type is incompatible.
    ReturnTypeMismatch {
        method: String,
        expected: TypeDesc,
        got: TypeDesc,
    },
    /// The method name is required with conflicting signatures by two or
    /// more interfaces in a composition.
    AmbiguousMethod {
        method: String,
        interfaces: Vec<String>,
    },
}

impl Incompatibility {
    /// The method name this record is about.
    pub fn method(&self) -> &str {
        match self {
            Incompatibility::MissingMethod { method }
            | Incompatibility::WrongParamCount { method, .. }
            | Incompatibility::ParamTypeMismatch { method, .. }
            | Incompatibility::ReturnTypeMismatch { method, .. }
            | Incompatibility::AmbiguousMethod { method, .. } => method,
        }
    }
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", report::format_incompatibility(self))
    }
}
