//! # CogniGraph CLI Module
//!
//! ## Available Commands
//!
//! - `demo` - Run the Neuron/Concept walkthrough (default)
//! - `run` - Execute a JSON operation script

mod commands;

use clap::{Parser, Subcommand};
use cognigraph::settings::load_config;
use cognigraph_core::CogniGraphError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// CogniGraph - entity graph runner
///
/// Builds an in-memory graph of cognitive entities, applies plasticity
/// steps, and prints what it finds. Nothing is persisted.
#[derive(Parser, Debug)]
#[command(name = "cognigraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config with `default_weight` and `learning_rate`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in Neuron/Concept walkthrough
    Demo,

    /// Execute operations from a JSON script
    Run {
        /// Path to the script file
        #[arg(short, long)]
        file: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CogniGraphError> {
    let config = load_config(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Run { file }) => cmd_run(&file, config, json_mode),
        // No subcommand - run the demo by default
        Some(Commands::Demo) | None => cmd_demo(config, json_mode),
    }
}
