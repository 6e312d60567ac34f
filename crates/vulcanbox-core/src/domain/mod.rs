//! Core domain layer for VulcanBox.
//!
//! Pure artifact logic: the shared templated-file capability, the two
//! concrete artifact kinds, and the pre-construction validation rules.
//! External effects (template lookup, container builds) enter only through
//! the ports defined in [`crate::ports`]; the one filesystem side effect the
//! domain performs itself is writing a rendered artifact to its destination.

pub mod artifact;
pub mod compose;
pub mod context;
pub mod image;
pub mod validation;

// Re-exports for convenience
pub use artifact::{FileKind, TemplatedArtifact};
pub use compose::{ComposeArtifact, ComposeSpec};
pub use context::Context;
pub use image::{ImageArtifact, derive_tag};
