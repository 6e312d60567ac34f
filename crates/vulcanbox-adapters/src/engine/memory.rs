//! Recording in-memory engine for tests.

use std::sync::Mutex;

use vulcanbox_core::error::{VulcanBoxError, VulcanBoxResult};
use vulcanbox_core::ports::{
    BuildRequest, ContainerEngine, ContainerHandle, ImageHandle, RunRequest,
};

/// One recorded build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRecord {
    pub dockerfile: std::path::PathBuf,
    pub tag: String,
}

/// One recorded run invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub image: String,
    pub name: String,
    pub remove_on_exit: bool,
    pub detached: bool,
}

#[derive(Debug, Default)]
struct State {
    builds: Vec<BuildRecord>,
    runs: Vec<RunRecord>,
}

/// Fake engine: records invocations, emits canned log lines, never touches
/// Docker. `failing()` makes every build return a runtime error.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    state: Mutex<State>,
    log_lines: Vec<String>,
    fail_builds: bool,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose builds always fail.
    pub fn failing() -> Self {
        Self {
            fail_builds: true,
            ..Self::default()
        }
    }

    /// Engine that streams the given lines to the log sink on every build.
    pub fn with_log_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            log_lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn build_count(&self) -> usize {
        self.state.lock().unwrap().builds.len()
    }

    pub fn last_build(&self) -> Option<BuildRecord> {
        self.state.lock().unwrap().builds.last().cloned()
    }

    pub fn last_run(&self) -> Option<RunRecord> {
        self.state.lock().unwrap().runs.last().cloned()
    }
}

impl ContainerEngine for MemoryEngine {
    fn build(
        &self,
        request: &BuildRequest<'_>,
        on_log: &mut dyn FnMut(&str),
    ) -> VulcanBoxResult<ImageHandle> {
        if self.fail_builds {
            return Err(VulcanBoxError::runtime("memory engine: build failed"));
        }

        for line in &self.log_lines {
            on_log(line);
        }

        let mut state = self.state.lock().unwrap();
        state.builds.push(BuildRecord {
            dockerfile: request.dockerfile.to_path_buf(),
            tag: request.tag.to_string(),
        });

        Ok(ImageHandle {
            id: format!("sha256:mem{:04}", state.builds.len()),
        })
    }

    fn run(&self, request: &RunRequest<'_>) -> VulcanBoxResult<ContainerHandle> {
        let mut state = self.state.lock().unwrap();
        state.runs.push(RunRecord {
            image: request.image.to_string(),
            name: request.name.to_string(),
            remove_on_exit: request.remove_on_exit,
            detached: request.detached,
        });

        Ok(ContainerHandle {
            id: format!("mem-container-{:04}", state.runs.len()),
            logs: String::new(),
        })
    }
}
