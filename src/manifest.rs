//! Build-time application manifest
//!
//! The manifest is a JSON identity record embedded into the binary at compile
//! time. It is parsed exactly once during startup; a missing or malformed
//! manifest is fatal to the process.

use serde::Deserialize;

/// Raw manifest JSON embedded at build time.
const MANIFEST_JSON: &str = include_str!("../manifest.json");

/// Static identity record for the application.
///
/// All fields are read-only after loading. Fields absent from the JSON take
/// their zero value, matching the on-disk contract where everything but the
/// core identity fields is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Manifest {
    pub name: String,
    pub application: String,
    pub bin: String,
    pub version: String,
    pub repository: String,
    pub aliases: Vec<String>,
    pub homepage: String,
    pub description: String,
    pub main: String,
    pub author: String,
    pub license: String,
    pub keywords: Vec<String>,
    pub platforms: Vec<String>,
    pub log_level: String,
    pub debug: bool,
    pub show_trace: bool,
    pub private: bool,
}

impl Manifest {
    /// Parses the embedded manifest.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(MANIFEST_JSON)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Repository URL with a trailing `.git` stripped, suitable for building
    /// web endpoints like `<repo>/tags`.
    pub fn repo_base_url(&self) -> &str {
        self.repository
            .strip_suffix(".git")
            .unwrap_or(&self.repository)
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}
