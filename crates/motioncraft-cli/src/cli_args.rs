//! CLI argument definitions for the Motioncraft command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Motioncraft - Procedural Motion-Curve Synthesis
#[derive(Parser)]
#[command(name = "motioncraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate an actuator curve from an upstream response or spec file
    Generate {
        /// Path to the response/spec file ("-" for stdin); omit to simulate
        /// upstream failure and emit the last-resort pattern
        #[arg(short, long)]
        input: Option<String>,

        /// Requested curve duration in milliseconds
        #[arg(short, long)]
        duration_ms: u64,

        /// Terminal sample of the previous curve on this channel
        #[arg(short, long, default_value_t = 0.0)]
        previous: f64,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Inspect a response/spec file: report the synthesis tier it would
    /// drive and the normalized phase table
    Validate {
        /// Path to the response/spec file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
