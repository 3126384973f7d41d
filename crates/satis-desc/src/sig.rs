//! Method signatures and candidate implementation descriptors.
//!
//! A [`MethodSig`] is the callable shape of one method: an ordered,
//! receiver-inclusive parameter list plus a return type. An [`ImplDesc`] is
//! the engine's view of a candidate implementation type -- its name and its
//! member method table -- normally produced by whatever introspection or
//! codegen shim feeds the verifier.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::desc::TypeDesc;

/// A malformed-signature construction error.
///
/// Distinct from an interface-mismatch diagnostic: a signature that cannot
/// even be represented is a programmer error and fails at construction
/// time (never during a check).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SigError {
    /// The parameter list was empty. Parameter 0 is always the receiver, so
    /// every method signature has at least one parameter.
    MissingReceiver,
}

impl fmt::Display for SigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigError::MissingReceiver => write!(
                f,
                "method signature has no parameters; parameter 0 must be the receiver"
            ),
        }
    }
}

impl std::error::Error for SigError {}

/// One method signature: receiver-inclusive parameters plus return type.
///
/// `params[0]` is the receiver and is excluded from structural comparison
/// by the checker -- it only contributes to the parameter count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodSig {
    pub params: Vec<TypeDesc>,
    pub ret: TypeDesc,
}

impl MethodSig {
    /// Create a signature, rejecting an empty parameter list.
    pub fn new(params: Vec<TypeDesc>, ret: TypeDesc) -> Result<Self, SigError> {
        if params.is_empty() {
            return Err(SigError::MissingReceiver);
        }
        Ok(MethodSig { params, ret })
    }

    /// The receiver-inclusive parameter count.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for MethodSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ") -> {}", self.ret)
    }
}

/// A candidate implementation type: name plus member method table.
///
/// Read-only from the engine's perspective. Methods are keyed by name; the
/// engine only ever looks members up, so declaration order is not kept.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ImplDesc {
    pub name: String,
    methods: FxHashMap<String, MethodSig>,
}

impl ImplDesc {
    /// Create an empty candidate descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        ImplDesc {
            name: name.into(),
            methods: FxHashMap::default(),
        }
    }

    /// Add a member method, chainable. A repeated name replaces the
    /// previous entry, mirroring how a later declaration shadows in the
    /// introspected member table.
    pub fn with_method(mut self, name: impl Into<String>, sig: MethodSig) -> Self {
        self.methods.insert(name.into(), sig);
        self
    }

    /// Look up a member method by name.
    pub fn method(&self, name: &str) -> Option<&MethodSig> {
        self.methods.get(name)
    }

    /// Whether the candidate has a member of the given name.
    pub fn has_member(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }
}
