mod api;
mod cli;
mod error;
mod models;
mod server;
mod trends;

use anyhow::Context;
use clap::Parser;
use cli::{App, Cli};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap so env fallbacks see it
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,trends_service=debug"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Initializing trends service...");

    let app = match App::new(cli) {
        Ok(app) => {
            info!("Application initialized successfully.");
            app
        },
        Err(e) => {
            error!("Failed to initialize application: {:?}", e);
            return Err(anyhow::Error::new(e).context("invalid startup configuration"));
        },
    };

    app.run().await.context("HTTP server failed")?;

    Ok(())
}
