//! Driven ports — implemented by infrastructure.
//!
//! The core defines what it needs from the outside world; the
//! `vulcanbox-adapters` crate provides the implementations (builtin/dir
//! template stores, the Docker CLI engine, a memory engine for tests).

use std::path::Path;

use crate::domain::FileKind;
use crate::error::VulcanBoxResult;

/// Port for template body lookup.
///
/// A template is addressed by its source name (a directory under the
/// template root, e.g. `docker`) plus the kind's fixed file suffix.
pub trait TemplateStore: Send + Sync {
    /// Load the raw template body for `source`/`kind`.
    fn load(&self, source: &str, kind: FileKind) -> VulcanBoxResult<String>;
}

/// One image build invocation.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    /// Build context directory passed to the engine.
    pub context_dir: &'a Path,
    /// Rendered Dockerfile driving the build.
    pub dockerfile: &'a Path,
    /// Fully derived image tag.
    pub tag: &'a str,
}

/// Handle to a successfully built image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub id: String,
}

/// One container run invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunRequest<'a> {
    pub image: &'a str,
    pub name: &'a str,
    pub remove_on_exit: bool,
    pub detached: bool,
}

/// Handle to a started container, with whatever logs were captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHandle {
    pub id: String,
    pub logs: String,
}

/// Port for the external container build/run engine.
///
/// One blocking call at a time; the engine runs to completion or returns a
/// `Runtime` error. Timeouts are the engine's own business.
pub trait ContainerEngine: Send + Sync {
    /// Build an image, streaming build-log lines into `on_log` as they
    /// arrive.
    fn build(
        &self,
        request: &BuildRequest<'_>,
        on_log: &mut dyn FnMut(&str),
    ) -> VulcanBoxResult<ImageHandle>;

    /// Run a container from a built image.
    fn run(&self, request: &RunRequest<'_>) -> VulcanBoxResult<ContainerHandle>;
}
