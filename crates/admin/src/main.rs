//! OpenPress management CLI
//!
//! Administrative entry point for one-off and data-migration commands run
//! against the platform database. Per-article diagnostics go to stdout;
//! lifecycle logging goes through tracing.

mod audit;
mod cli;
mod commands;
mod errors;
mod export;

use clap::Parser;
use cli::{Cli, Commands};
use openpress_common::{config::AppConfig, db::DbPool, db::Repository};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    info!("Starting OpenPress admin tools v{}", openpress_common::VERSION);

    // Load configuration
    let config = AppConfig::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;

    // Initialize database connection
    info!("Connecting to database...");
    let db = DbPool::new(&config.database).await?;
    let repository = Repository::new(db);

    match cli.command {
        Commands::AddArks(args) => {
            let summary =
                commands::add_arks::run(&repository, &args.journal_code, &args.import_file).await?;

            info!(
                articles = summary.articles,
                arks_created = summary.arks_created,
                arks_existing = summary.arks_existing,
                dois_added = summary.dois_added,
                skipped = summary.skipped,
                errors = summary.errors,
                "add-arks run complete"
            );

            // Per-article errors are recoverable but should still fail CI
            if summary.errors > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
