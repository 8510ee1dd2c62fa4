//! # BizTime API Main Entry Point
//!
//! This is the main entry point for the BizTime API service.

use biztime::{
    config::ConfigLoader,
    db::{init_pool, run_migrations},
    seeds::seed_sample_data,
    server::run_server,
    telemetry::init_tracing,
};
use clap::Parser;

/// BizTime - track companies, invoices and industries
#[derive(Debug, Parser)]
#[command(name = "biztime")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Apply migrations and serve the HTTP API (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Insert the sample dataset, skipping rows that already exist
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from layered env files and variables
    let config = ConfigLoader::new().load()?;

    init_tracing(&config)?;
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::info!(profile = %config.profile, config = %redacted_json, "Loaded configuration");
    }

    let db = init_pool(&config).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            run_migrations(&db).await?;
            run_server(config, db).await?;
        }
        Commands::Migrate => {
            run_migrations(&db).await?;
            tracing::info!("Migrations applied");
            db.close().await?;
        }
        Commands::Seed => {
            run_migrations(&db).await?;
            seed_sample_data(&db).await?;
            db.close().await?;
        }
    }

    Ok(())
}
