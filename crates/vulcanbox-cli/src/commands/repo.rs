//! Implementation of `vulcanbox repo`.
//!
//! Thin glue: resolve credentials, dispatch to the GitHub client, print the
//! result. Missing credentials are an input error before any network call.

use tracing::instrument;

use vulcanbox_adapters::GithubClient;

use crate::{
    cli::RepoCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch a `repo` subcommand.
#[instrument(skip_all)]
pub fn run(command: RepoCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let credentials = config
        .github
        .clone()
        .ok_or(CliError::MissingCredentials)?;
    let client = GithubClient::new(credentials);

    match command {
        RepoCommands::Create { name, private } => {
            let message = client.create_repo(&name, private)?;
            output.success(&message)?;
        }
        RepoCommands::List => {
            let repos = client.list_repos()?;
            if repos.is_empty() {
                output.print(&format!("No repositories found for {}.", client.username()))?;
            } else {
                output.header(&format!("Repositories for {}:", client.username()))?;
                for repo in repos {
                    let visibility = if repo.private { "private" } else { "public" };
                    output.print(&format!("  {} ({visibility}) {}", repo.full_name, repo.html_url))?;
                }
            }
        }
        RepoCommands::AddCollaborator {
            repo,
            username,
            permission,
        } => {
            let message = client.add_collaborator(&repo, &username, &permission)?;
            output.success(&message)?;
        }
        RepoCommands::RemoveCollaborator { repo, username } => {
            let message = client.remove_collaborator(&repo, &username)?;
            output.success(&message)?;
        }
    }

    Ok(())
}
