use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("cannot fetch latest version for private repositories")]
    PrivateRepository,

    #[error("repository URL is not set")]
    MissingRepository,

    #[error("invalid version format")]
    InvalidFormat,

    #[error("version parts length mismatch: current has {current}, latest has {latest}")]
    ArityMismatch { current: usize, latest: usize },

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch tags: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("expected application/json, got {0:?}")]
    UnexpectedContentType(String),

    #[error("no tags found")]
    NoTags,

    #[error("panic occurred while fetching latest tag: {0}")]
    FetchPanic(String),
}
