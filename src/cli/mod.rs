//! Command handlers
//!
//! Thin wrappers binding Version Service operations to the CLI subcommands.
//! Handlers report results and failures through the logging facade and never
//! abort the process; a failed version check is an error record, not a
//! non-zero exit.

pub mod banner;

use crate::logging::{self, LogLevel};
use crate::version::registry::TagRegistry;
use crate::version::service::VersionService;

/// `version`: print the running build's identity.
pub fn version_info<R: TagRegistry>(service: &VersionService<R>) {
    if service.is_private() {
        logging::log(
            LogLevel::Warn,
            "The information shown may not be accurate for private repositories.",
        );
        logging::log(
            LogLevel::Info,
            format!("Current version: {}", service.current_version()),
        );
        logging::log(
            LogLevel::Info,
            format!("Git repository: {}", service.repository()),
        );
        return;
    }
    logging::log(LogLevel::Info, format!("Version: {}", service.current_version()));
    logging::log(
        LogLevel::Info,
        format!("Git repository: {}", service.repository()),
    );
}

/// `version latest`: resolve the newest release tag via the release page.
pub async fn version_latest<R: TagRegistry>(service: &VersionService<R>) {
    match service.latest_release_version().await {
        Ok(tag) => logging::log(LogLevel::Info, format!("Latest version: {tag}")),
        Err(err) => logging::log(
            LogLevel::Error,
            format!("Failed to fetch latest version: {err}"),
        ),
    }
}

/// `version check`: compare the running build against the newest tag.
pub async fn version_check<R: TagRegistry>(service: &mut VersionService<R>) {
    match service.is_latest_version().await {
        Ok(is_latest) => {
            if is_latest {
                logging::log(LogLevel::Info, "You are using the latest version.");
            } else {
                logging::log(LogLevel::Warn, "You are using an outdated version.");
            }
            logging::log(
                LogLevel::Info,
                format!("Current version: {}", service.current_version()),
            );
            if let Some(latest) = service.cached_latest_version() {
                logging::log(LogLevel::Info, format!("Latest version: {latest}"));
            }
        }
        Err(err) => logging::log(LogLevel::Error, format!("Failed to check version: {err}")),
    }
}

/// `version update`: force a fetch and report the refreshed state.
pub async fn version_update<R: TagRegistry>(service: &mut VersionService<R>) {
    if let Err(err) = service.update_latest_version().await {
        logging::log(LogLevel::Error, format!("Failed to update version: {err}"));
        return;
    }
    match service.latest_version().await {
        Ok(latest) => {
            logging::log(
                LogLevel::Info,
                format!("Current version: {}", service.current_version()),
            );
            logging::log(LogLevel::Info, format!("Latest version: {latest}"));
        }
        Err(err) => logging::log(
            LogLevel::Error,
            format!("Failed to get latest version: {err}"),
        ),
    }
}

/// `version get`: print the manifest version.
pub fn version_get<R: TagRegistry>(service: &VersionService<R>) {
    logging::log(
        LogLevel::Info,
        format!("Current version: {}", service.current_version()),
    );
}

/// `version restart`: restart hook, currently a notification placeholder.
pub fn version_restart() {
    logging::log(LogLevel::Info, "Restarting the service...");
    logging::log(LogLevel::Success, "Service restarted successfully");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use crate::version::registry::MockTagRegistry;

    fn service(private: bool) -> VersionService<MockTagRegistry> {
        let manifest = Manifest::from_json(&format!(
            r#"{{
                "name": "app",
                "bin": "app",
                "version": "1.4.0",
                "repository": "https://example.com/org/app",
                "private": {private}
            }}"#
        ))
        .unwrap();
        VersionService::new(manifest, MockTagRegistry::new())
    }

    #[tokio::test]
    async fn handlers_degrade_to_error_records_for_private_repositories() {
        // The mock has no expectations, so any network attempt would panic.
        let mut svc = service(true);
        version_info(&svc);
        version_latest(&svc).await;
        version_check(&mut svc).await;
        version_update(&mut svc).await;
        version_get(&svc);
        version_restart();
    }

    #[tokio::test]
    async fn check_reports_an_outdated_build() {
        let mut registry = MockTagRegistry::new();
        registry
            .expect_latest_tag()
            .times(1)
            .returning(|_| Ok("1.5.0".to_string()));

        let manifest = Manifest::from_json(
            r#"{"name": "app", "version": "1.4.0", "repository": "https://example.com/org/app"}"#,
        )
        .unwrap();
        let mut svc = VersionService::new(manifest, registry);

        version_check(&mut svc).await;
        assert_eq!(svc.cached_latest_version(), Some("1.5.0"));
    }
}
