//! Opsdeck CLI entry point.
//!
//! Binary name: `opsdeck`
//!
//! Parses CLI arguments, loads configuration, wires the HTTP transport,
//! then dispatches to the inventory dashboard or the agent chat loop.

mod cli;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,opsdeck=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Load config and wire the transport
    let state = AppState::init().await?;

    match cli.command {
        Commands::Inventory => {
            cli::inventory::show_inventory(&state, cli.json).await?;
        }
        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }
    }

    Ok(())
}
