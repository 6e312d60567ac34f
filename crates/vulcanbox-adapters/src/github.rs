//! Thin GitHub REST client.
//!
//! Simple blocking CRUD over the v3 API; no retries, no pagination beyond
//! the first page. Credentials arrive through [`GithubConfig`], populated
//! once at process start — nothing in here reads the environment.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use vulcanbox_core::error::{VulcanBoxError, VulcanBoxResult};

const BASE_URL: &str = "https://api.github.com";

/// GitHub credentials, resolved by the CLI's configuration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    pub username: String,
    pub token: String,
}

/// A repository as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GithubRepository {
    pub full_name: String,
    pub private: bool,
    pub html_url: String,
}

/// Blocking client for the handful of repository operations VulcanBox needs.
pub struct GithubClient {
    config: GithubConfig,
    http: reqwest::blocking::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            config,
            http: reqwest::blocking::Client::new(),
            base_url: BASE_URL.into(),
        }
    }

    /// Point the client at a different API root (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn username(&self) -> &str {
        &self.config.username
    }

    /// Create a repository under the authenticated user.
    pub fn create_repo(&self, name: &str, private: bool) -> VulcanBoxResult<String> {
        let url = format!("{}/user/repos", self.base_url);
        let response = self
            .request(self.http.post(&url))
            .json(&json!({ "name": name, "private": private }))
            .send()
            .map_err(http_error)?;

        if response.status().as_u16() == 201 {
            Ok(format!("Repository {name} created successfully."))
        } else {
            Err(api_error(response))
        }
    }

    /// List the user's repositories (first page).
    pub fn list_repos(&self) -> VulcanBoxResult<Vec<GithubRepository>> {
        let url = format!("{}/users/{}/repos", self.base_url, self.config.username);
        let response = self.request(self.http.get(&url)).send().map_err(http_error)?;

        if !response.status().is_success() {
            return Err(api_error(response));
        }

        let repos: Vec<GithubRepository> = response.json().map_err(http_error)?;
        debug!(count = repos.len(), user = %self.config.username, "listed repositories");
        Ok(repos)
    }

    /// Grant a collaborator access to a repository (`owner/repo`).
    pub fn add_collaborator(
        &self,
        repo: &str,
        username: &str,
        permission: &str,
    ) -> VulcanBoxResult<String> {
        let url = format!("{}/repos/{repo}/collaborators/{username}", self.base_url);
        let response = self
            .request(self.http.put(&url))
            .json(&json!({ "permission": permission }))
            .send()
            .map_err(http_error)?;

        match response.status().as_u16() {
            201 | 204 => Ok(format!("Collaborator {username} added to repository {repo}.")),
            _ => Err(api_error(response)),
        }
    }

    /// Revoke a collaborator's access.
    pub fn remove_collaborator(&self, repo: &str, username: &str) -> VulcanBoxResult<String> {
        let url = format!("{}/repos/{repo}/collaborators/{username}", self.base_url);
        let response = self
            .request(self.http.delete(&url))
            .send()
            .map_err(http_error)?;

        if response.status().as_u16() == 204 {
            Ok(format!(
                "Collaborator {username} removed from repository {repo}."
            ))
        } else {
            Err(api_error(response))
        }
    }

    fn request(&self, builder: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        builder
            .bearer_auth(&self.config.token)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "vulcanbox")
    }
}

fn http_error(e: reqwest::Error) -> VulcanBoxError {
    VulcanBoxError::runtime(format!("GitHub request failed: {e}"))
}

/// Surface the API's own error message when the status is unexpected.
fn api_error(response: reqwest::blocking::Response) -> VulcanBoxError {
    let status = response.status();
    let message = response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str().map(String::from)))
        .unwrap_or_else(|| "Unknown error".into());
    VulcanBoxError::runtime(format!("GitHub API error ({status}): {message}"))
}
