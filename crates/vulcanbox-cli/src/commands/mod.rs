//! Command handlers.
//!
//! Each module translates parsed arguments into core/adapters calls and
//! user-facing output. Validation runs here, *before* artifacts are
//! constructed — the artifacts themselves only re-check the naming rule.

pub mod doctor;
pub mod new;
pub mod repo;
