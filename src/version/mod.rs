//! Version checking layer
//!
//! Determines whether the running build is current relative to its source
//! repository, using release tags as the stand-in for "latest published
//! version".
//!
//! # Modules
//!
//! - [`semver`]: dotted-version parsing and tuple comparison
//! - [`registry`]: HTTP access to the repository's tag and release endpoints
//! - [`service`]: current/latest version state, caching and the staleness check
//! - [`error`]: error types for the version layer

pub mod error;
pub mod registry;
pub mod semver;
pub mod service;
