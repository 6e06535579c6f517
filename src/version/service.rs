//! Version service: current/latest version state and the staleness check

use chrono::{DateTime, SecondsFormat, Utc};

use crate::logging::{self, HasLogger, LogLevel, Logger};
use crate::manifest::Manifest;
use crate::version::error::VersionError;
use crate::version::registry::TagRegistry;
use crate::version::semver::{parse_version, version_at_most};

/// Tracks the running build's version against the repository's newest tag.
///
/// Constructed once at startup and handed to command handlers by reference.
/// The latest version is fetched on first demand and cached for the rest of
/// the process lifetime; it is never invalidated automatically.
pub struct VersionService<R: TagRegistry> {
    manifest: Manifest,
    registry: R,
    logger: Option<Logger>,
    current_version: String,
    latest_version: Option<String>,
    last_checked_at: Option<DateTime<Utc>>,
}

impl<R: TagRegistry> VersionService<R> {
    pub fn new(manifest: Manifest, registry: R) -> Self {
        let current_version = manifest.version.clone();
        Self {
            manifest,
            registry,
            logger: None,
            current_version,
            latest_version: None,
            last_checked_at: None,
        }
    }

    /// Attaches a dedicated logger handle; diagnostics from this service then
    /// carry that configuration instead of the process-wide one.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    pub fn repository(&self) -> &str {
        &self.manifest.repository
    }

    pub fn is_private(&self) -> bool {
        self.manifest.private
    }

    /// The manifest version, cached at construction. Infallible.
    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Latest tag seen so far, if any fetch has succeeded.
    pub fn cached_latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }

    pub fn last_checked_at(&self) -> Option<DateTime<Utc>> {
        self.last_checked_at
    }

    /// Returns the latest published version, fetching it on the first call
    /// and serving the cached value afterwards.
    pub async fn latest_version(&mut self) -> Result<String, VersionError> {
        if self.manifest.private {
            return Err(VersionError::PrivateRepository);
        }
        if self.latest_version.is_none() {
            self.update_latest_version().await?;
        }
        self.latest_version
            .clone()
            .ok_or(VersionError::InvalidFormat)
    }

    /// Whether the current version is at most the latest published one.
    pub async fn is_latest_version(&mut self) -> Result<bool, VersionError> {
        if self.manifest.private {
            return Err(VersionError::PrivateRepository);
        }
        let latest_raw = self.latest_version().await?;

        let current = parse_version(&self.current_version).ok_or(VersionError::InvalidFormat)?;
        let latest = parse_version(&latest_raw).ok_or(VersionError::InvalidFormat)?;

        if current.len() != latest.len() {
            return Err(VersionError::ArityMismatch {
                current: current.len(),
                latest: latest.len(),
            });
        }

        Ok(version_at_most(&current, &latest))
    }

    /// Fetches the newest tag and replaces the cached latest version.
    ///
    /// The privacy guard runs before anything else, so a rejected call leaves
    /// the last-checked timestamp untouched. Once a fetch is attempted the
    /// timestamp is updated whether or not the attempt succeeded.
    pub async fn update_latest_version(&mut self) -> Result<(), VersionError> {
        if self.manifest.private {
            return Err(VersionError::PrivateRepository);
        }

        let result = self.fetch_latest_tag().await;
        self.touch_last_checked();

        self.latest_version = Some(result?);
        Ok(())
    }

    async fn fetch_latest_tag(&self) -> Result<String, VersionError> {
        let repo_url = self.manifest.repo_base_url();
        if repo_url.is_empty() {
            return Err(VersionError::MissingRepository);
        }
        self.registry.latest_tag(repo_url).await
    }

    /// Resolves the latest release tag via the release-redirect path. Not
    /// cached and never stamps the last-checked timestamp.
    pub async fn latest_release_version(&self) -> Result<String, VersionError> {
        if self.manifest.private {
            return Err(VersionError::PrivateRepository);
        }
        let repo_url = self.manifest.repo_base_url();
        if repo_url.is_empty() {
            return Err(VersionError::MissingRepository);
        }
        self.registry.latest_release_tag(repo_url).await
    }

    fn touch_last_checked(&mut self) {
        let now = Utc::now();
        self.last_checked_at = Some(now);
        logging::obj_log(
            &*self,
            LogLevel::Debug,
            format!(
                "last checked at: {}",
                now.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
        );
    }
}

impl<R: TagRegistry> HasLogger for VersionService<R> {
    fn logger(&self) -> Option<Logger> {
        self.logger
    }
}
