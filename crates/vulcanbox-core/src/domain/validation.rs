//! Pre-construction validation rules.
//!
//! Invoked by the CLI before an artifact is built. Every failure is an
//! input error (exit code 2); the compose overwrite confirmation is the one
//! soft abort and is handled interactively at the CLI, not here.

use std::path::Path;

use crate::domain::artifact::{self, FileKind};
use crate::error::{VulcanBoxError, VulcanBoxResult};

/// Lowest port a non-root process may bind; anything below is privileged.
const PRIVILEGED_PORT_CEILING: u16 = 1024;

/// SSH is allowed through the privileged-port restriction.
const SSH_PORT: u16 = 22;

/// Artifact names must carry their kind's file-type marker.
pub fn ensure_name_has_marker(name: &str, kind: FileKind) -> VulcanBoxResult<()> {
    artifact::check_name(name, kind)
}

/// A new Dockerfile must not clobber an existing file.
pub fn ensure_destination_free(path: &Path) -> VulcanBoxResult<()> {
    if path.exists() {
        return Err(VulcanBoxError::input(format!(
            "Dockerfile already exists: {}",
            path.display()
        )));
    }
    Ok(())
}

/// The Dockerfile a compose file builds from must exist on disk.
pub fn ensure_source_exists(path: &Path) -> VulcanBoxResult<()> {
    if !path.exists() {
        return Err(VulcanBoxError::input(format!(
            "Specified Dockerfile does not exist: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Replica counts start at one.
pub fn ensure_replica_floor(count: u32) -> VulcanBoxResult<()> {
    if count < 1 {
        return Err(VulcanBoxError::input(format!(
            "Replica count must be at least 1 but got {count}"
        )));
    }
    Ok(())
}

/// Ports below 1024 are rejected, with an exception for SSH.
pub fn ensure_unprivileged_port(port: u16) -> VulcanBoxResult<()> {
    if port < PRIVILEGED_PORT_CEILING && port != SSH_PORT {
        return Err(VulcanBoxError::input(format!(
            "Cannot expose port {port} (privileged)"
        )));
    }
    Ok(())
}
