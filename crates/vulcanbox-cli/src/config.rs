//! Application configuration.
//!
//! [`AppConfig`] is populated exactly once at startup — from the environment
//! (after `.env` has been loaded) — and passed down by value. Nothing else
//! in the workspace reads process-wide state; the GitHub client receives its
//! credentials through this struct.

use std::path::PathBuf;

use vulcanbox_adapters::GithubConfig;

/// Environment variable naming the GitHub account.
const ENV_GITHUB_USERNAME: &str = "GITHUB_USERNAME";
/// Environment variable carrying the API token.
const ENV_GITHUB_TOKEN: &str = "GITHUB_API_TOKEN";
/// Environment variable pointing at a custom template directory.
const ENV_TEMPLATES_DIR: &str = "VULCANBOX_TEMPLATES_DIR";

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// GitHub credentials; `None` when either variable is unset.
    pub github: Option<GithubConfig>,
    /// Template directory override from the environment. The
    /// `--templates-dir` flag wins over this when both are given.
    pub templates_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let github = match (
            std::env::var(ENV_GITHUB_USERNAME),
            std::env::var(ENV_GITHUB_TOKEN),
        ) {
            (Ok(username), Ok(token)) if !username.is_empty() && !token.is_empty() => {
                Some(GithubConfig { username, token })
            }
            _ => None,
        };

        let templates_dir = std::env::var_os(ENV_TEMPLATES_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            github,
            templates_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-variable manipulation is process-global, so these tests
    // only cover the default shape; the from_env path is exercised by the
    // CLI integration tests with per-command environments.

    #[test]
    fn default_has_no_credentials() {
        let cfg = AppConfig::default();
        assert!(cfg.github.is_none());
        assert!(cfg.templates_dir.is_none());
    }
}
