//! Container engine implementations.
//!
//! [`DockerCli`] shells out to the `docker` binary for real builds;
//! [`MemoryEngine`] is a recording fake for tests.

mod docker_cli;
mod memory;

pub use docker_cli::DockerCli;
pub use memory::MemoryEngine;
