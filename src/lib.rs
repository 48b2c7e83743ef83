//! GitHub accessor for the Haystack docs site.
//!
//! Answers the three questions the site asks of the upstream
//! `deepset-ai/haystack` repository: where to download a docs file from,
//! how many stars the repository has, and which release tags exist.

pub mod client;
pub mod docs;
pub mod types;

// Re-export commonly used types
pub use client::{GitHubClient, HAYSTACK_OWNER, HAYSTACK_REPO, RepoQueries, TOKEN_ENV_VAR};
pub use docs::{DocsVersion, docs_path};
pub use types::{ContentEntry, Release, RepoInfo};
