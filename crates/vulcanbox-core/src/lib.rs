//! VulcanBox Core
//!
//! Domain layer for the VulcanBox scaffolding tool: templated artifacts,
//! validation rules, the two-variant error taxonomy, and the ports the
//! infrastructure crates implement.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         vulcanbox-cli (CLI)             │
//! │   parses args, validates, dispatches    │
//! └──────────────────┬──────────────────────┘
//!                    │ constructs + calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    Artifacts (Image / Compose)          │
//! │    write / build / start / json         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    Ports (TemplateStore, Engine)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  vulcanbox-adapters (Infrastructure)    │
//! │  (BuiltinTemplates, DockerCli, ...)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vulcanbox_core::prelude::*;
//! use serde_json::json;
//!
//! let mut context = Context::new();
//! context.insert("base_image".into(), json!("ubuntu:20.04"));
//! context.insert("ports".into(), json!([8080]));
//!
//! let image = ImageArtifact::new("api.Dockerfile", context)?;
//! // image.write(&store)?;  // store: impl TemplateStore
//! # Ok::<(), vulcanbox_core::error::VulcanBoxError>(())
//! ```

pub mod domain;
pub mod error;
pub mod ports;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        ComposeArtifact, ComposeSpec, Context, FileKind, ImageArtifact, TemplatedArtifact,
        derive_tag,
    };
    pub use crate::error::{VulcanBoxError, VulcanBoxResult, exit_code};
    pub use crate::ports::{
        BuildRequest, ContainerEngine, ContainerHandle, ImageHandle, RunRequest, TemplateStore,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
