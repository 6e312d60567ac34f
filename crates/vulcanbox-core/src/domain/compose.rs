//! Compose artifact: a write-only, multi-replica service descriptor.
//!
//! All range validation (replica floor, privileged ports) happens *before*
//! construction, at the CLI boundary — see [`crate::domain::validation`].
//! Construction itself only fixes the destination and derives the context.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::domain::artifact::{self, FileKind, TemplatedArtifact};
use crate::domain::context::Context;
use crate::error::VulcanBoxResult;

/// Template source directory for compose bodies.
const TEMPLATE_SOURCE: &str = "compose";

/// Shared private network name rendered when networking is requested.
const NETWORK_NAME: &str = "vulcanbox-net";

/// Validated inputs for a compose artifact.
///
/// The caller is expected to have run the validation rules first; a spec
/// that reaches this type is taken at face value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeSpec {
    /// Dockerfile used as the build source for every replica.
    pub image: String,
    /// Number of service replicas, >= 1.
    pub replicas: u32,
    /// Port each replica exposes, >= 1024 or exactly 22.
    pub port: u16,
    /// Whether replicas are linked by a shared private network.
    pub with_network: bool,
}

/// A templated `docker-compose.yml`. Write-only: no build/tag lifecycle.
#[derive(Debug, Clone)]
pub struct ComposeArtifact {
    destination: PathBuf,
    spec: ComposeSpec,
    context: Context,
}

impl ComposeArtifact {
    /// Construct an artifact destined for the current working directory.
    pub fn new(spec: ComposeSpec) -> VulcanBoxResult<Self> {
        let cwd = artifact::working_dir()?;
        Ok(Self::at(cwd, spec))
    }

    /// Construct an artifact destined for an explicit base directory.
    ///
    /// The name is the fixed `docker-compose.yml` marker, so the naming
    /// rule holds by construction.
    pub fn at(base_dir: impl AsRef<Path>, spec: ComposeSpec) -> Self {
        let destination =
            artifact::resolve_destination(base_dir.as_ref(), FileKind::DockerCompose.marker());

        let mut context = Context::new();
        context.insert("image".into(), json!(spec.image));
        context.insert("count".into(), json!(spec.replicas));
        context.insert("port".into(), json!(spec.port));
        context.insert("with_network".into(), json!(spec.with_network));

        Self {
            destination,
            spec,
            context,
        }
    }

    /// One indented service stanza per replica.
    fn services_block(&self) -> String {
        let mut block = String::new();
        for i in 1..=self.spec.replicas {
            block.push_str(&format!(
                "  box-{i}:\n    build:\n      context: .\n      dockerfile: {image}\n    container_name: vulcanbox-{i}\n    expose:\n      - \"{port}\"\n",
                image = self.spec.image,
                port = self.spec.port,
            ));
            if self.spec.with_network {
                block.push_str(&format!("    networks:\n      - {NETWORK_NAME}\n"));
            }
        }
        block
    }

    /// Top-level networks section, empty unless networking was requested.
    fn network_block(&self) -> String {
        if self.spec.with_network {
            format!("networks:\n  {NETWORK_NAME}:\n    driver: bridge\n")
        } else {
            String::new()
        }
    }
}

impl TemplatedArtifact for ComposeArtifact {
    fn name(&self) -> &str {
        FileKind::DockerCompose.marker()
    }

    fn destination(&self) -> &Path {
        &self.destination
    }

    fn template_source(&self) -> &str {
        TEMPLATE_SOURCE
    }

    fn kind(&self) -> FileKind {
        FileKind::DockerCompose
    }

    fn context(&self) -> &Context {
        &self.context
    }

    fn render_context(&self) -> Context {
        let mut ctx = self.context.clone();
        ctx.insert("services_block".into(), Value::String(self.services_block()));
        ctx.insert("network_block".into(), Value::String(self.network_block()));
        ctx
    }
}
