//! Counsel - ask-an-expert web app
//!
//! CLI entry point for the Counsel server.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod server;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counsel=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();

    if cli.command.is_none() && !std::path::Path::new(".env").exists() {
        warn!(".env file not found. Run 'counsel init' to create one.");
    }

    cli::run(cli).await
}
