//! Structural interface verification engine.
//!
//! Given an [`Interface`] (a named set of required method signatures,
//! optionally composed from embedded interfaces) and a candidate
//! implementation's [`ImplDesc`](satis_desc::ImplDesc), the engine decides
//! whether the candidate satisfies the interface and, if not, collects
//! every incompatibility rather than stopping at the first.
//!
//! The pieces, leaf to root:
//! - [`matcher`]: structural type compatibility over two descriptors
//! - [`hint`]: optional human-oriented fix suggestions for a mismatch
//! - [`report`]: rendering of records into the frozen diagnostic text
//! - [`iface`]: interface definitions, embedding, and conflict detection
//! - [`check`]: the orchestrator producing the ordered record list
//!
//! Everything is a pure function over immutable values; interfaces are
//! shared via `Arc` and safe to check from multiple threads once built.

pub mod check;
pub mod hint;
pub mod iface;
pub mod matcher;
pub mod record;
pub mod report;

pub use check::{incompatibilities, satisfied_by};
pub use iface::{DefineError, Interface};
pub use record::Incompatibility;
pub use report::build_report;
