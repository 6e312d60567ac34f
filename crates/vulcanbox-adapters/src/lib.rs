//! Infrastructure adapters for VulcanBox.
//!
//! This crate implements the ports defined in `vulcanbox_core::ports` and
//! hosts the external-facing glue (Docker CLI, GitHub REST, dependency
//! probes). All I/O beyond writing rendered artifacts lives here.

pub mod doctor;
pub mod engine;
pub mod github;
pub mod template_store;

// Re-export commonly used adapters
pub use engine::{DockerCli, MemoryEngine};
pub use github::{GithubClient, GithubConfig, GithubRepository};
pub use template_store::{BuiltinTemplates, DirStore};
