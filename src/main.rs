use clap::Parser;
use fibasync::Settings;
use fibasync::cli::commands::{compute, init};
use fibasync::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration.");
        Settings::default()
    });

    fibasync::logging::init_with_config(&config.logging);
    tracing::debug!(
        target: "fibasync::cli",
        "workspace root: {:?}",
        Settings::workspace_root()
    );

    match cli.into_command() {
        Commands::Compute { n } => compute::run_compute(n.unwrap_or(config.driver.n)).await,
        Commands::Init { force } => init::run_init(&std::env::current_dir()?, force)?,
        Commands::Config => init::run_config(&config)?,
    }

    Ok(())
}
