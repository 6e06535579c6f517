//! HTTP access to repository tag and release endpoints

#[cfg(test)]
use mockall::automock;

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use serde::Deserialize;
use tracing::warn;

use crate::version::error::VersionError;

/// Client-side timeout for the release-redirect path.
const RELEASE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A named release marker as returned by the tags endpoint.
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Source of release tags for a repository.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    /// Fetches the newest tag from `<repo_url>/tags`.
    ///
    /// # Arguments
    /// * `repo_url` - Repository web URL without a trailing `.git`
    ///
    /// # Returns
    /// * `Ok(String)` - Name of the first (newest) tag in the listing
    /// * `Err(VersionError)` - If the request, response or decoding fails
    async fn latest_tag(&self, repo_url: &str) -> Result<String, VersionError>;

    /// Resolves the latest release tag by following the redirect of
    /// `<repo_url>/releases/latest` and taking the final URL's last path
    /// segment.
    async fn latest_release_tag(&self, repo_url: &str) -> Result<String, VersionError>;
}

/// Tag source backed by the repository's public web endpoints.
pub struct GitTagRegistry {
    client: reqwest::Client,
    release_client: reqwest::Client,
}

impl GitTagRegistry {
    pub fn new() -> Self {
        Self {
            // The tags path relies on the transport's default timeout.
            client: reqwest::Client::builder()
                .user_agent("forgecli")
                .build()
                .expect("Failed to create HTTP client"),
            release_client: reqwest::Client::builder()
                .user_agent("forgecli")
                .timeout(RELEASE_FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    async fn fetch_latest_tag(&self, repo_url: &str) -> Result<String, VersionError> {
        let url = format!("{repo_url}/tags");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("tag listing returned status {}: {}", status, url);
            return Err(VersionError::UnexpectedStatus(status));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_string())
            .unwrap_or_default();
        if content_type != "application/json" {
            warn!("tag listing returned unexpected content type {:?}: {}", content_type, url);
            return Err(VersionError::UnexpectedContentType(content_type));
        }

        let tags: Vec<Tag> = response.json().await?;

        tags.into_iter()
            .next()
            .map(|tag| tag.name)
            .ok_or(VersionError::NoTags)
    }
}

impl Default for GitTagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TagRegistry for GitTagRegistry {
    async fn latest_tag(&self, repo_url: &str) -> Result<String, VersionError> {
        // A panic on the fetch path is downgraded to an ordinary error so it
        // never crosses the service boundary.
        match AssertUnwindSafe(self.fetch_latest_tag(repo_url))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(panic) => {
                let message = panic_message(panic);
                warn!("recovered from panic while fetching latest tag: {}", message);
                Err(VersionError::FetchPanic(message))
            }
        }
    }

    async fn latest_release_tag(&self, repo_url: &str) -> Result<String, VersionError> {
        let url = format!("{repo_url}/releases/latest");
        let response = self.release_client.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("release lookup returned status {}: {}", status, url);
            return Err(VersionError::UnexpectedStatus(status));
        }

        let tag = response
            .url()
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();

        if tag.is_empty() {
            return Err(VersionError::NoTags);
        }
        Ok(tag)
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
