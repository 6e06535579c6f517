//! Startup banner and help-text selection

use rand::Rng;

use crate::manifest::Manifest;

const PRINT_BANNER_ENV: &str = "FORGE_PRINT_BANNER";

// More banners can be added here; one is picked at random on each run.
static BANNERS: &[&str] = &[r"
   __                            _ _
  / _| ___  _ __ __ _  ___  ___| (_)
 | |_ / _ \| '__/ _` |/ _ \/ __| | |
 |  _| (_) | | | (_| |  __/ (__| | |
 |_|  \___/|_|  \__, |\___|\___|_|_|
                |___/
"];

/// Whether the banner should be printed. Defaults to true; set
/// `FORGE_PRINT_BANNER=false` to turn it off.
pub fn enabled() -> bool {
    std::env::var(PRINT_BANNER_ENV)
        .map(|value| value.to_ascii_lowercase() != "false")
        .unwrap_or(true)
}

/// Picks a banner at random.
pub fn pick() -> &'static str {
    BANNERS[rand::rng().random_range(0..BANNERS.len())]
}

/// Chooses the help description: the full one when help was explicitly
/// requested, the application tagline otherwise.
pub fn description<'a>(args: &[String], manifest: &'a Manifest) -> &'a str {
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        &manifest.description
    } else {
        &manifest.application
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_json(
            r#"{
                "name": "app",
                "application": "App",
                "version": "1.0.0",
                "description": "A longer description of the application."
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn pick_returns_a_known_banner() {
        assert!(BANNERS.contains(&pick()));
    }

    #[test]
    fn description_prefers_the_long_text_when_help_was_requested() {
        let manifest = manifest();
        let args = vec!["app".to_string(), "-h".to_string()];
        assert_eq!(
            description(&args, &manifest),
            "A longer description of the application."
        );
    }

    #[test]
    fn description_uses_the_tagline_otherwise() {
        let manifest = manifest();
        let args = vec!["app".to_string(), "version".to_string()];
        assert_eq!(description(&args, &manifest), "App");
    }
}
