use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use forgecli::cli::{self, banner};
use forgecli::logging;
use forgecli::manifest::Manifest;
use forgecli::version::registry::GitTagRegistry;
use forgecli::version::service::VersionService;

#[derive(Parser)]
#[command(name = "forgecli")]
#[command(version, about = "CLI application scaffold with update checking")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print version information
    Version {
        #[command(subcommand)]
        action: Option<VersionAction>,
    },
}

#[derive(Subcommand)]
enum VersionAction {
    /// Print the latest published version from the repository's release page
    Latest,
    /// Check whether the current version is the latest one
    Check,
    /// Refresh the latest-version information from the repository
    Update,
    /// Print the current version from the manifest
    Get,
    /// Restart the service
    Restart,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manifest = Manifest::load().context("failed to load embedded manifest")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forgecli=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
    logging::init(&manifest);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, manifest))
}

async fn run(cli: Cli, manifest: Manifest) -> anyhow::Result<()> {
    let mut service = VersionService::new(manifest.clone(), GitTagRegistry::new());

    match cli.command {
        None => {
            if banner::enabled() {
                println!("{}", banner::pick());
            }
            let args: Vec<String> = std::env::args().collect();
            println!("{}\n", banner::description(&args, &manifest));
            Cli::command().print_long_help()?;
        }
        Some(Command::Version { action }) => match action {
            None => cli::version_info(&service),
            Some(VersionAction::Latest) => cli::version_latest(&service).await,
            Some(VersionAction::Check) => cli::version_check(&mut service).await,
            Some(VersionAction::Update) => cli::version_update(&mut service).await,
            Some(VersionAction::Get) => cli::version_get(&service),
            Some(VersionAction::Restart) => cli::version_restart(),
        },
    }

    Ok(())
}
