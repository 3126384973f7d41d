//! Interface definitions and composition.
//!
//! An [`Interface`] is a named, immutable set of required method
//! signatures plus an ordered list of embedded interfaces. Embeds are
//! shared `Arc` references to already-built interfaces, so the embed graph
//! is a DAG by construction: a cycle would require referencing an
//! interface before it exists.
//!
//! For ambiguity purposes the interface's own method table and each embed
//! are peers -- an interface that both declares `log` and embeds an
//! interface declaring `log` conflicts with itself, not only when embedded
//! into a further outer interface.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use satis_desc::MethodSig;
use serde::Serialize;

/// A construction-time interface definition error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DefineError {
    /// The own method table declares the same name twice.
    DuplicateMethod { interface: String, method: String },
}

impl fmt::Display for DefineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefineError::DuplicateMethod { interface, method } => write!(
                f,
                "interface '{}' declares method '{}' more than once",
                interface, method
            ),
        }
    }
}

impl std::error::Error for DefineError {}

/// A named set of required method signatures plus embedded interfaces.
///
/// Immutable after construction. May be embedded by any number of outer
/// interfaces; checking is read-only, so a built interface is safe to
/// share across threads.
#[derive(Debug)]
pub struct Interface {
    name: String,
    /// Own methods in declaration order. Iteration order drives the order
    /// of diagnostics, so it must stay deterministic.
    methods: Vec<(String, MethodSig)>,
    /// Embedded interfaces in declaration order.
    embeds: Vec<Arc<Interface>>,
}

impl Interface {
    /// Define an interface from its own method table (declaration order)
    /// and an ordered embed list.
    ///
    /// Duplicate names inside the own table are a programmer error and
    /// rejected here; duplicates *across* the own table and embeds are
    /// legal to construct and surface later as ambiguity.
    pub fn define(
        name: impl Into<String>,
        methods: Vec<(String, MethodSig)>,
        embeds: Vec<Arc<Interface>>,
    ) -> Result<Arc<Interface>, DefineError> {
        let name = name.into();
        let mut seen = FxHashSet::default();
        for (method, _) in &methods {
            if !seen.insert(method.as_str()) {
                return Err(DefineError::DuplicateMethod {
                    interface: name,
                    method: method.clone(),
                });
            }
        }
        Ok(Arc::new(Interface { name, methods, embeds }))
    }

    /// The interface name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &MethodSig)> {
        self.methods.iter().map(|(name, sig)| (name.as_str(), sig))
    }

    /// Embedded interfaces in declaration order.
    pub fn embeds(&self) -> &[Arc<Interface>] {
        &self.embeds
    }

    /// Every required method name: own names first in declaration order,
    /// then each embed's collected names recursively, in embed order.
    /// Duplicates across sources are preserved.
    pub fn collect_method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.methods.iter().map(|(name, _)| name.as_str()).collect();
        for embed in &self.embeds {
            names.extend(embed.collect_method_names());
        }
        names
    }

    /// Whether the method is required directly or by any embed, recursively.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|(n, _)| n == name)
            || self.embeds.iter().any(|embed| embed.has_method(name))
    }

    /// The interfaces that require `name`, when there is more than one.
    ///
    /// Sources are counted at the same level: the own table (listed first
    /// when it contributes) and each embed whose transitive `has_method`
    /// is true, in embed order. At most one source means no conflict.
    pub fn find_conflicts(&self, name: &str) -> Option<Vec<&str>> {
        let mut sources = Vec::new();
        if self.methods.iter().any(|(n, _)| n == name) {
            sources.push(self.name.as_str());
        }
        for embed in &self.embeds {
            if embed.has_method(name) {
                sources.push(embed.name());
            }
        }
        if sources.len() <= 1 {
            None
        } else {
            Some(sources)
        }
    }
}
