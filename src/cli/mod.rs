//! CLI module for Counsel
//!
//! Provides commands:
//! - `serve`: start the web server (default when no command is given)
//! - `init`: write a .env file with the API key
//! - `doctor`: check credential and config before first run

use clap::{Parser, Subcommand};

pub mod doctor;
pub mod init;

/// Counsel CLI
#[derive(Parser, Debug)]
#[command(name = "counsel")]
#[command(about = "Ask-an-expert web app")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a .env file with the OpenAI API key
    Init,
    /// Check setup before first run
    Doctor,
    /// Start the server (default)
    Serve,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Init) => init::run().await,
        Some(Commands::Doctor) => doctor::run().await,
        Some(Commands::Serve) | None => crate::server::run().await,
    }
}
