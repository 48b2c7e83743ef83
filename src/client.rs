use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::env;

use crate::docs::{DocsVersion, docs_path};
use crate::types::{ContentEntry, Release, RepoInfo};

/// The pinned repository every query targets.
pub const HAYSTACK_OWNER: &str = "deepset-ai";
pub const HAYSTACK_REPO: &str = "haystack";

/// Environment variable holding the bearer token for authenticated calls.
pub const TOKEN_ENV_VAR: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

const DEFAULT_API_URL: &str = "https://api.github.com";

/// The queries the docs site runs against the pinned repository.
///
/// Consumers should depend on this trait rather than on [`GitHubClient`] so
/// their own tests can substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoQueries: Send + Sync {
    /// Resolves the direct download URL of a documentation file.
    ///
    /// `Ok(None)` strictly means the path does not name a single
    /// downloadable file: it does not exist upstream, it is a directory, or
    /// the entry carries no download URL. Transport failures and non-404 API
    /// errors surface as `Err` instead of being folded into absence.
    async fn docs_download_url(
        &self,
        filename: &str,
        repo_path: &str,
        version: &DocsVersion,
    ) -> Result<Option<String>>;

    /// Returns the repository's current stargazer count.
    async fn stargazers_count(&self) -> Result<u64>;

    /// Returns the tag names of all published releases, preserving the order
    /// the API returns them in (newest first).
    async fn release_tag_names(&self) -> Result<Vec<String>>;
}

/// Authenticated GitHub API client for the pinned repository.
///
/// Holds a `reqwest::Client` and the API base URL; safe to share across
/// concurrent calls since nothing here is mutated after construction.
pub struct GitHubClient {
    client: Client,
    api_url: String,
}

impl GitHubClient {
    /// Wraps an existing `reqwest::Client`. The API base URL falls back to
    /// the public GitHub endpoint when `None`.
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }

    /// Builds a client from process configuration.
    ///
    /// Reads `GITHUB_PERSONAL_ACCESS_TOKEN` and attaches it to every request
    /// as a default `Authorization` header. When the variable is absent the
    /// client is still built and requests go out unauthenticated, subject to
    /// the API's anonymous rate limits.
    pub fn from_env(api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(token) = env::var(TOKEN_ENV_VAR) {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Invalid characters in access token")?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using {} for authentication", TOKEN_ENV_VAR);
        }

        let client = Client::builder()
            .user_agent("haystack-github")
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::new(client, api_url))
    }

    /// The API base URL requests are sent against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl RepoQueries for GitHubClient {
    #[tracing::instrument(skip(self))]
    async fn docs_download_url(
        &self,
        filename: &str,
        repo_path: &str,
        version: &DocsVersion,
    ) -> Result<Option<String>> {
        let path = docs_path(filename, repo_path, version);
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, HAYSTACK_OWNER, HAYSTACK_REPO, path
        );

        debug!("Looking up docs file at {}...", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("No docs entry at {}", path);
            return Ok(None);
        }

        let body: serde_json::Value = response
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        // An array body is a directory listing, not a single file.
        if body.is_array() {
            debug!("{} resolves to a directory", path);
            return Ok(None);
        }

        let entry: ContentEntry =
            serde_json::from_value(body).context("Unexpected contents entry shape")?;

        debug!(
            "Resolved {}: download URL {}",
            entry.name,
            if entry.download_url.is_some() {
                "present"
            } else {
                "missing"
            }
        );

        Ok(entry.download_url)
    }

    #[tracing::instrument(skip(self))]
    async fn stargazers_count(&self) -> Result<u64> {
        let url = format!("{}/repos/{}/{}", self.api_url, HAYSTACK_OWNER, HAYSTACK_REPO);

        debug!("Fetching repo info from {}...", url);

        let info = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?
            .error_for_status()?
            .json::<RepoInfo>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(info.stargazers_count)
    }

    #[tracing::instrument(skip(self))]
    async fn release_tag_names(&self) -> Result<Vec<String>> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.api_url, HAYSTACK_OWNER, HAYSTACK_REPO
        );

        debug!("Fetching releases from {}...", url);

        let releases = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?
            .error_for_status()?
            .json::<Vec<Release>>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(releases.into_iter().map(|r| r.tag_name).collect())
    }
}
