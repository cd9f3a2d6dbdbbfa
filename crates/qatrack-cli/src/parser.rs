//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the QA test tracker.
#[derive(Parser)]
#[command(name = "qatrack")]
#[command(about = "Track QA test assignments and progress")]
#[command(version)]
pub struct Cli {
    /// Act as this user for commands that need a caller
    #[arg(long = "as", global = true, env = "QATRACK_USER")]
    pub caller: Option<String>,

    /// Per-call store deadline in milliseconds (0 uses the default)
    #[arg(
        long = "backend-timeout-ms",
        global = true,
        env = "QATRACK_BACKEND_TIMEOUT_MS",
        default_value_t = 0
    )]
    pub backend_timeout_ms: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
