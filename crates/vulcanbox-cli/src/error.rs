//! CLI-boundary error handling.
//!
//! Everything funnels into [`CliError`], which preserves the core taxonomy's
//! two exit codes: 2 for input errors, 1 for everything that went wrong at
//! runtime. The boundary in `main.rs` is the single place these become
//! user-facing text and an OS exit code.

use std::io;

use owo_colors::OwoColorize;
use thiserror::Error;

use vulcanbox_core::error::{DEFAULT_HELP, VulcanBoxError, exit_code};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the core taxonomy; carries its own exit
    /// code and help text.
    #[error(transparent)]
    Core(#[from] VulcanBoxError),

    /// An I/O operation failed outside the artifact pipeline.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    /// `repo` commands need credentials that were not configured.
    #[error("GitHub credentials are not configured")]
    MissingCredentials,
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Exit code to pass to the OS — 2 for input errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(core) => core.exit_code(),
            Self::Io { .. } => exit_code::RUNTIME_ERROR,
            Self::MissingCredentials => exit_code::INPUT_ERROR,
        }
    }

    /// Short help string shown under the error message.
    pub fn help_text(&self) -> &str {
        match self {
            Self::Core(core) => core.help_text(),
            Self::Io { .. } => DEFAULT_HELP,
            Self::MissingCredentials => {
                "Set GITHUB_USERNAME and GITHUB_API_TOKEN in the environment (a .env file works too)."
            }
        }
    }

    /// Emit a structured log event at the right severity.
    pub fn log(&self) {
        if self.exit_code() == exit_code::INPUT_ERROR {
            tracing::warn!("Input error: {self}");
        } else {
            tracing::error!("Runtime error: {self}");
        }
        if let Some(source) = std::error::Error::source(self) {
            tracing::debug!("Caused by: {source}");
        }
    }

    /// Format the error for a colour-capable terminal.
    pub fn format_colored(&self) -> String {
        format!(
            "{} {}\n  {}\n",
            "\u{2717}".red().bold(), // ✗
            self.to_string().red(),
            self.help_text().dimmed(),
        )
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        format!("Error: {self}\n  {}\n", self.help_text())
    }
}
