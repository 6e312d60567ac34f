//! Container engine backed by the `docker` command-line client.
//!
//! One blocking subprocess per operation; build output is streamed
//! line-by-line into the caller's log sink while the build runs. The
//! engine's stderr is inherited so diagnostics reach the terminal directly.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use vulcanbox_core::error::{VulcanBoxError, VulcanBoxResult};
use vulcanbox_core::ports::{
    BuildRequest, ContainerEngine, ContainerHandle, ImageHandle, RunRequest,
};

/// Engine that shells out to the Docker CLI.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
}

impl DockerCli {
    pub fn new() -> Self {
        Self {
            binary: "docker".into(),
        }
    }

    /// Use a non-default binary name (e.g. `podman`).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> VulcanBoxError {
        VulcanBoxError::runtime_with_help(
            format!("failed to invoke '{}': {e}", self.binary),
            "Is Docker installed and on your PATH? Run 'vulcanbox doctor' to check.",
        )
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerEngine for DockerCli {
    fn build(
        &self,
        request: &BuildRequest<'_>,
        on_log: &mut dyn FnMut(&str),
    ) -> VulcanBoxResult<ImageHandle> {
        debug!(tag = request.tag, dockerfile = %request.dockerfile.display(), "docker build");

        let mut child = Command::new(&self.binary)
            .args(["build", "--no-cache", "--force-rm", "-f"])
            .arg(request.dockerfile)
            .args(["-t", request.tag])
            .arg(request.context_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                let line = line.map_err(|e| {
                    VulcanBoxError::runtime(format!("failed to read build output: {e}"))
                })?;
                on_log(line.trim_end());
            }
        }

        let status = child
            .wait()
            .map_err(|e| VulcanBoxError::runtime(format!("docker build did not finish: {e}")))?;
        if !status.success() {
            return Err(VulcanBoxError::runtime(format!(
                "docker build failed with {status}"
            )));
        }

        info!(tag = request.tag, "docker build finished");
        Ok(ImageHandle {
            id: self.image_id(request.tag),
        })
    }

    fn run(&self, request: &RunRequest<'_>) -> VulcanBoxResult<ContainerHandle> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("run");
        if request.detached {
            cmd.arg("-d");
        }
        if request.remove_on_exit {
            cmd.arg("--rm");
        }
        cmd.args(["--name", request.name]).arg(request.image);

        let output = cmd.output().map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            return Err(VulcanBoxError::runtime(format!(
                "docker run failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let logs = self.container_logs(&id);
        info!(container = %id, "container started");

        Ok(ContainerHandle { id, logs })
    }
}

impl DockerCli {
    /// Resolve the image id for a tag; falls back to the tag itself when
    /// inspection fails (the image exists either way — the build succeeded).
    fn image_id(&self, tag: &str) -> String {
        Command::new(&self.binary)
            .args(["image", "inspect", "--format", "{{.Id}}", tag])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| tag.to_string())
    }

    /// Best-effort log capture for a detached container.
    fn container_logs(&self, id: &str) -> String {
        Command::new(&self.binary)
            .args(["logs", id])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .map(|o| String::from_utf8_lossy(&o.stdout).into_owned())
            .unwrap_or_default()
    }
}
