//! CLI argument definitions for Showrunner.

use clap::{Parser, Subcommand};

/// Showrunner - episode planning for drop-based marketing campaigns.
///
/// Every command prints JSON by default; pass `-H` for human-readable text.
/// Running `sr` with no subcommand opens the interactive terminal UI.
#[derive(Parser, Debug)]
#[command(name = "sr")]
#[command(author, version, about = "A CLI tool for planning marketing campaign episodes", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List episodes with status, dates, and team size
    List {
        /// Only show episodes with this status
        #[arg(long, value_parser = status_values())]
        status: Option<String>,
    },

    /// Show a single episode in full, including its team roster
    Show {
        /// Episode ID (e.g., ep-a1b2)
        id: String,
    },

    /// Create a new episode
    Create {
        /// Episode name
        name: String,

        /// Creative concept for the drop
        #[arg(short, long)]
        concept: String,

        /// Initial status
        #[arg(long, value_parser = status_values())]
        status: Option<String>,

        /// Production start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,

        /// Launch date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        launch: Option<String>,

        /// Budget in whole currency units
        #[arg(long)]
        budget: Option<u64>,

        /// Revenue target in whole currency units
        #[arg(long)]
        target: Option<u64>,

        /// Team member as "Name:Role" (repeatable)
        #[arg(short, long = "member")]
        member: Vec<String>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version and build information
    Version,

    /// Open the interactive terminal UI
    #[cfg(feature = "tui")]
    Tui,
}

/// Configuration commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration and where each value came from
    Show,

    /// Print the config file path
    Path,
}

/// Version string from Cargo.toml.
pub fn package_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Short git commit hash captured at build time, or "unknown".
pub fn git_commit() -> &'static str {
    env!("SR_GIT_COMMIT")
}

/// UTC timestamp captured at build time.
pub fn build_timestamp() -> &'static str {
    env!("SR_BUILD_TIMESTAMP")
}

fn status_values() -> Vec<&'static str> {
    vec![
        "planning",
        "in-progress",
        "production",
        "marketing",
        "launched",
        "completed",
    ]
}
