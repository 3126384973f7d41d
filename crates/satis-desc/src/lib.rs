//! Descriptor data model for the satis interface verifier.
//!
//! Hosts the structural [`TypeDesc`] representation, method signatures, and
//! the candidate-implementation descriptor that the `satis-check` engine
//! compares against interface definitions. Descriptors are plain immutable
//! values: built once per distinct type, compared by structure, and rendered
//! through `Display` into the exact strings used in diagnostics.

pub mod desc;
pub mod sig;

pub use desc::{ErrorSet, Field, Primitive, SizeClass, TypeDesc, Variant};
pub use sig::{ImplDesc, MethodSig, SigError};
