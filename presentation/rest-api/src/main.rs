use clap::Parser;
use dotenvy::dotenv;

mod api;
mod cli;
mod config;
mod setup;

use cli::{Cli, Command};
use config::{
    app_config::AppConfig,
    database_config::{self, StoreConfig},
};
use persistence::db::{DatabaseConfig, connect};
use persistence::product::repository::ProductRepositoryMongo;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// `serve` (the default) wires the product store into the HTTP API;
/// `seed` resets the MongoDB collection to the sample catalogue.
///
/// - config/: environment-driven settings (server, API key, store, CORS)
/// - setup/: dependency injection and server assembly
/// - api/: route handlers, DTOs and middleware
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // 3. Load configuration
    let config = AppConfig::from_env();

    match cli.command() {
        Command::Serve => {
            let repository = database_config::init_repository(&config.store).await?;
            let container = DependencyContainer::new(repository);
            Server::run(config, container).await?;
        }
        Command::Seed => seed(&config.store).await?,
    }

    Ok(())
}

async fn seed(store: &StoreConfig) -> anyhow::Result<()> {
    let StoreConfig::Mongo { uri } = store else {
        anyhow::bail!("seeding needs a MongoDB store; set MONGODB_URI to a mongodb:// URI");
    };

    let db = connect(&DatabaseConfig::new(uri.clone())).await?;
    let inserted = persistence::seed::seed(&ProductRepositoryMongo::new(&db)).await?;
    tracing::info!(inserted, "Database seeded");
    Ok(())
}
