//! Dependency probes for `vulcanbox doctor`.
//!
//! Each tool is checked by running its version command and reading the exit
//! status; the first stdout line doubles as the human-readable version.

use std::process::Command;

use tracing::debug;

/// One external tool VulcanBox leans on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliDependency {
    pub name: &'static str,
    /// Program plus arguments for the version check.
    pub command: &'static [&'static str],
    pub install_guide: &'static str,
}

/// Tools the doctor checks by default.
pub const REQUIRED_TOOLS: &[CliDependency] = &[
    CliDependency {
        name: "Docker",
        command: &["docker", "--version"],
        install_guide: "https://docs.docker.com/get-started/get-docker/",
    },
    CliDependency {
        name: "Docker Compose",
        command: &["docker", "compose", "version"],
        install_guide: "https://docs.docker.com/compose/install/",
    },
    CliDependency {
        name: "Git",
        command: &["git", "--version"],
        install_guide: "https://git-scm.com/book/en/v2/Getting-Started-Installing-Git",
    },
];

/// Run a dependency's version command.
///
/// Returns the first stdout line on success, `None` when the tool is
/// missing or the command exits non-zero.
pub fn probe(dep: &CliDependency) -> Option<String> {
    let (program, args) = dep.command.split_first()?;
    let output = Command::new(program).args(args).output().ok()?;

    debug!(tool = dep.name, status = %output.status, "probed dependency");
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_probes_none() {
        let dep = CliDependency {
            name: "Nonexistent",
            command: &["vulcanbox-no-such-binary", "--version"],
            install_guide: "https://example.invalid",
        };
        assert_eq!(probe(&dep), None);
    }

    #[test]
    fn present_tool_reports_version_line() {
        // `sh` exists on any unix CI box this runs on.
        let dep = CliDependency {
            name: "Shell",
            command: &["sh", "-c", "echo tool version 1.0"],
            install_guide: "https://example.invalid",
        };
        assert_eq!(probe(&dep).as_deref(), Some("tool version 1.0"));
    }

    #[test]
    fn required_tools_cover_docker_and_git() {
        let names: Vec<_> = REQUIRED_TOOLS.iter().map(|t| t.name).collect();
        assert!(names.contains(&"Docker"));
        assert!(names.contains(&"Git"));
    }
}
