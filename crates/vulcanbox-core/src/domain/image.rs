//! Dockerfile artifact with a build/tag lifecycle.
//!
//! Lifecycle: created → rendered to disk (`write`) → optionally built
//! (`build`, sets the tag exactly once) → optionally serialized (`json`).
//! A second build on the same instance is an input error; there is no
//! rebuild-in-place.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tracing::debug;

use crate::domain::artifact::{self, FileKind, TemplatedArtifact};
use crate::domain::context::Context;
use crate::error::{VulcanBoxError, VulcanBoxResult};
use crate::ports::{BuildRequest, ContainerEngine, ContainerHandle, ImageHandle, RunRequest};

/// Template source directory for Dockerfile bodies.
const TEMPLATE_SOURCE: &str = "docker";

/// Namespacing prefix for derived image tags.
const TAG_PREFIX: &str = "vulcanbox";

/// A templated Dockerfile plus the lifecycle of the image built from it.
#[derive(Debug, Clone)]
pub struct ImageArtifact {
    name: String,
    destination: PathBuf,
    context: Context,
    /// Exposed ports, mirrored from the `ports` list in the context. The
    /// context stays the single source of truth for render-time parameters;
    /// this field only serves `json()` and downstream callers.
    ports: Vec<u16>,
    /// Set exactly once, by a successful `build`.
    image_tag: Option<String>,
    keep_whitespace: bool,
}

impl ImageArtifact {
    /// Construct an artifact destined for the current working directory.
    ///
    /// Fails with an input error when `name` lacks the `Dockerfile` marker,
    /// or when the context's `ports` entry is not a list of port numbers.
    /// Does not touch the filesystem.
    pub fn new(name: impl Into<String>, context: Context) -> VulcanBoxResult<Self> {
        let cwd = artifact::working_dir()?;
        Self::at(cwd, name, context)
    }

    /// Construct an artifact destined for an explicit base directory.
    pub fn at(
        base_dir: impl AsRef<Path>,
        name: impl Into<String>,
        context: Context,
    ) -> VulcanBoxResult<Self> {
        let name = name.into();
        artifact::check_name(&name, FileKind::Dockerfile)?;

        let ports = extract_ports(&context)?;
        let destination = artifact::resolve_destination(base_dir.as_ref(), &name);

        Ok(Self {
            name,
            destination,
            context,
            ports,
            image_tag: None,
            keep_whitespace: true,
        })
    }

    /// Disable blank-line preservation in the rendered output.
    pub fn without_whitespace(mut self) -> Self {
        self.keep_whitespace = false;
        self
    }

    /// `true` iff a build has completed successfully on this instance.
    pub fn is_built(&self) -> bool {
        self.image_tag.is_some()
    }

    /// The derived image tag, set by a successful `build`.
    pub fn image_tag(&self) -> Option<&str> {
        self.image_tag.as_deref()
    }

    /// Exposed ports tracked by this artifact.
    pub fn ports(&self) -> &[u16] {
        &self.ports
    }

    /// Current configuration as JSON: `{name, tag, ports, context}`.
    ///
    /// `tag` is `null` until the image has been built.
    pub fn json(&self) -> Value {
        json!({
            "name": self.name,
            "tag": self.image_tag,
            "ports": self.ports,
            "context": self.context,
        })
    }

    /// Build the image from the rendered Dockerfile.
    ///
    /// Derives the tag from `requested_name` (see [`derive_tag`]), invokes
    /// the engine with the destination file as build input, and streams
    /// build-log lines into `on_log`. Engine failures propagate as `Runtime`
    /// errors and leave the artifact unbuilt.
    pub fn build(
        &mut self,
        engine: &dyn ContainerEngine,
        requested_name: &str,
        on_log: &mut dyn FnMut(&str),
    ) -> VulcanBoxResult<ImageHandle> {
        if let Some(tag) = &self.image_tag {
            return Err(VulcanBoxError::input(format!("Image already built: {tag}")));
        }

        let tag = derive_tag(requested_name);
        let context_dir = self
            .destination
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        debug!(%tag, dockerfile = %self.destination.display(), "building image");

        let handle = engine.build(
            &BuildRequest {
                context_dir: &context_dir,
                dockerfile: &self.destination,
                tag: &tag,
            },
            on_log,
        )?;

        self.image_tag = Some(tag);
        Ok(handle)
    }

    /// Run a container from the built image.
    ///
    /// Requires a completed `build`; otherwise a `Runtime` error ("no image
    /// tag set") is returned.
    pub fn start(&self, engine: &dyn ContainerEngine) -> VulcanBoxResult<ContainerHandle> {
        let tag = self.image_tag.as_deref().ok_or_else(|| {
            VulcanBoxError::runtime("no image tag set; build the image before starting a container")
        })?;

        engine.run(&RunRequest {
            image: tag,
            name: &self.container_name(),
            remove_on_exit: true,
            detached: true,
        })
    }

    /// Container name derived from the artifact name.
    fn container_name(&self) -> String {
        let stem = self
            .name
            .trim_end_matches(FileKind::Dockerfile.marker())
            .trim_end_matches('.');
        if stem.is_empty() {
            format!("{TAG_PREFIX}-container")
        } else {
            format!("{TAG_PREFIX}-{}", sanitize(stem))
        }
    }
}

impl TemplatedArtifact for ImageArtifact {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> &Path {
        &self.destination
    }

    fn template_source(&self) -> &str {
        TEMPLATE_SOURCE
    }

    fn kind(&self) -> FileKind {
        FileKind::Dockerfile
    }

    fn context(&self) -> &Context {
        &self.context
    }

    /// Adds the derived `expose_directives` block (one `EXPOSE <port>` line
    /// per tracked port). The retained context copy is left untouched.
    fn render_context(&self) -> Context {
        let mut ctx = self.context.clone();
        let directives = self
            .ports
            .iter()
            .map(|p| format!("EXPOSE {p}"))
            .collect::<Vec<_>>()
            .join("\n");
        ctx.insert("expose_directives".into(), Value::String(directives));
        ctx
    }

    fn keep_whitespace(&self) -> bool {
        self.keep_whitespace
    }
}

/// Derive a globally-recognizable image tag from a requested name.
///
/// `vulcanbox-{sanitized}-{YYYYMMDD-HHMMSS}`, where sanitizing replaces
/// space, `/`, and `:` with `-`. Case is preserved.
pub fn derive_tag(requested_name: &str) -> String {
    let now = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("{TAG_PREFIX}-{}-{now}", sanitize(requested_name))
}

fn sanitize(name: &str) -> String {
    name.replace([' ', '/', ':'], "-")
}

/// Mirror the `ports` list out of the context, defaulting to empty.
fn extract_ports(context: &Context) -> VulcanBoxResult<Vec<u16>> {
    let Some(value) = context.get("ports") else {
        return Ok(Vec::new());
    };

    let items = value
        .as_array()
        .ok_or_else(|| VulcanBoxError::input("Context key 'ports' must be a list of ports"))?;

    items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| {
                    VulcanBoxError::input(format!("Invalid port in context: {item}"))
                })
        })
        .collect()
}
