//! Implementation of `vulcanbox doctor`.

use tracing::instrument;

use vulcanbox_adapters::doctor::{REQUIRED_TOOLS, probe};

use crate::{error::CliResult, output::OutputManager};

/// Probe every required external tool and print a report.
///
/// A missing tool is advisory, not fatal: the report lists install guides
/// and the command still exits 0.
#[instrument(skip_all)]
pub fn run(output: &OutputManager) -> CliResult<()> {
    output.header("VulcanBox Doctor")?;

    let mut missing = Vec::new();
    for tool in REQUIRED_TOOLS {
        match probe(tool) {
            Some(version) => output.success(&version)?,
            None => {
                output.error(&format!("{} not installed", tool.name))?;
                missing.push(tool);
            }
        }
    }

    output.print(&"-".repeat(20))?;

    if missing.is_empty() {
        output.success(&format!(
            "All {} dependencies ready!",
            REQUIRED_TOOLS.len()
        ))?;
    } else {
        output.warning(&format!(
            "Doctor found {} missing dependencies!",
            missing.len()
        ))?;
        for tool in missing {
            output.print(&format!("  {} install guide: {}", tool.name, tool.install_guide))?;
        }
    }

    Ok(())
}
