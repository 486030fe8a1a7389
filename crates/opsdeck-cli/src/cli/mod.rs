//! CLI command definitions and dispatch for the `opsdeck` binary.
//!
//! Uses clap derive macros for argument parsing. Two views, two
//! subcommands: `opsdeck inventory` and `opsdeck chat`.

pub mod chat;
pub mod inventory;

use clap::{Parser, Subcommand};

/// Operational console for the supply chain control tower.
#[derive(Parser)]
#[command(name = "opsdeck", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the real-time inventory dashboard.
    #[command(alias = "inv")]
    Inventory,

    /// Open an interactive chat session with the supply chain agent.
    Chat,
}
