//! # VulcanBox CLI
//!
//! Container boilerplate scaffolding tool.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` (silently skipped when absent).
//! 2. Parse CLI arguments (`--help` / `--version` exit 0, parse errors 2).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration from the environment.
//! 5. Build the [`OutputManager`] and dispatch to the command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Runtime / system error  |
//! |  2   | User / input error      |

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, NewCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — the GitHub credentials may live there.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Requested output, not a failure.
            print!("{}", e.render());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Render clap's own error (already user-friendly) and exit 2.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = AppConfig::from_env();

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("VulcanBox completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(NewCommands::Image(args)) => {
            commands::new::image(args, &cli.global, &config, &output)
        }
        Commands::New(NewCommands::Compose(args)) => {
            commands::new::compose(args, &cli.global, &config, &output)
        }
        Commands::Doctor => commands::doctor::run(&output),
        Commands::Repo(command) => commands::repo::run(command, &config, &output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// The single place where structured errors become human-readable output
/// and OS exit codes.
fn handle_error(err: CliError) -> ExitCode {
    err.log();

    // Write directly to stderr so the message survives stdout redirection;
    // colour only when stderr is a TTY.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored()
    } else {
        err.format_plain()
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
