use anyhow::Result;
use clap::Parser;
use evm_deployer::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Secrets and endpoints come from the environment; a local .env is
    // honoured when present, real environment variables win.
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();
    let verbosity = cli.verbosity();

    // Initialize logging with verbosity-aware level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| verbosity.to_log_level().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Execute command with verbosity
    match cli.command {
        Commands::Deploy(args) => {
            evm_deployer::cli::commands::deploy(args).await?;
        }
        Commands::Preprocess(args) => {
            evm_deployer::cli::commands::preprocess(args)?;
        }
        Commands::Accounts(args) => {
            evm_deployer::cli::commands::accounts(args)?;
        }
    }

    Ok(())
}
