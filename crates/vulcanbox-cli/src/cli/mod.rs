//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and defaults.  No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vulcanbox",
    bin_name = "vulcanbox",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "VulcanBox contributors",
    about    = "\u{1f528} Containers and repository boilerplate, templated",
    long_about = "VulcanBox scaffolds Dockerfiles, Compose suites, and GitHub \
                  repository boilerplate from parameterized templates.",
    after_help = "EXAMPLES:\n\
        \x20 vulcanbox new image   --name api.Dockerfile --base ubuntu:20.04 --expose 8080\n\
        \x20 vulcanbox new compose --image api.Dockerfile --count 3 --with-network\n\
        \x20 vulcanbox doctor\n\
        \x20 vulcanbox repo create my-project --private",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create new images and configurations.
    #[command(
        visible_alias = "n",
        about = "Create new images and configurations",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vulcanbox new image   --name web.Dockerfile --base alpine:3.20\n\
            \x20 vulcanbox new compose --image web.Dockerfile --expose 8080 --count 2"
    )]
    New(NewCommands),

    /// Check that required external tools are installed.
    #[command(about = "Check presence of required CLI dependencies")]
    Doctor,

    /// Manage GitHub repository boilerplate.
    #[command(
        about = "GitHub repository management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vulcanbox repo create my-project --private\n\
            \x20 vulcanbox repo list\n\
            \x20 vulcanbox repo add-collaborator owner/repo alice --permission push"
    )]
    Repo(RepoCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Subcommands for `vulcanbox new`.
#[derive(Debug, Subcommand)]
pub enum NewCommands {
    /// Initialize a template Dockerfile.
    Image(ImageArgs),
    /// Initialize a template Docker Compose suite.
    Compose(ComposeArgs),
}

/// Arguments for `vulcanbox new image`.
#[derive(Debug, Args)]
pub struct ImageArgs {
    /// Name of the Dockerfile; must carry the `Dockerfile` marker.
    #[arg(
        long = "name",
        value_name = "NAME",
        default_value = "new.Dockerfile",
        help = "Name of the Dockerfile"
    )]
    pub name: String,

    /// Base image to template from.
    #[arg(
        long = "base",
        value_name = "IMAGE",
        default_value = "ubuntu:20.04",
        help = "Base image to use"
    )]
    pub base: String,

    /// Ports to expose; repeat the flag for multiple ports.
    #[arg(long = "expose", value_name = "PORT", help = "Port to expose in the Dockerfile")]
    pub expose: Vec<u16>,

    /// Build the image after templating, tagging it from this name.
    #[arg(
        long = "build",
        value_name = "NAME",
        help = "Build the image after templating"
    )]
    pub build: Option<String>,

    /// Write a JSON sidecar with the templated configuration.
    #[arg(
        long = "export-config",
        help = "Export the current configuration of the templated Dockerfile"
    )]
    pub export_config: bool,
}

/// Arguments for `vulcanbox new compose`.
#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Base Dockerfile each replica builds from.
    #[arg(
        long = "image",
        value_name = "DOCKERFILE",
        default_value = "Dockerfile",
        help = "Base Dockerfile to use as image"
    )]
    pub image: String,

    /// Port each replica exposes (22 for SSH).
    #[arg(
        long = "expose",
        value_name = "PORT",
        default_value_t = 22,
        help = "Port to expose"
    )]
    pub expose: u16,

    /// Replica count.
    #[arg(
        long = "count",
        value_name = "N",
        default_value_t = 1,
        help = "Replica count"
    )]
    pub count: u32,

    /// Link service instances with a shared private network.
    #[arg(long = "with-network", help = "Link service instances with private network")]
    pub with_network: bool,

    /// Overwrite an existing compose file without asking.
    #[arg(short = 'y', long = "yes", help = "Skip the overwrite confirmation")]
    pub yes: bool,
}

// ── repo ──────────────────────────────────────────────────────────────────────

/// Subcommands for `vulcanbox repo`.
#[derive(Debug, Subcommand)]
pub enum RepoCommands {
    /// Create a new repository for the authenticated user.
    Create {
        /// Repository name.
        name: String,
        /// Create the repository as private.
        #[arg(long = "private")]
        private: bool,
    },
    /// List the authenticated user's repositories.
    List,
    /// Grant a collaborator access to a repository.
    AddCollaborator {
        /// Full repository name, e.g. `owner/repo`.
        repo: String,
        /// GitHub username to add.
        username: String,
        /// Permission level to grant.
        #[arg(long = "permission", default_value = "push")]
        permission: String,
    },
    /// Revoke a collaborator's access.
    RemoveCollaborator {
        /// Full repository name, e.g. `owner/repo`.
        repo: String,
        /// GitHub username to remove.
        username: String,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
