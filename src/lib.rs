//! Showrunner - an episode planning panel for drop-based campaigns.
//!
//! This library provides the core functionality for the `sr` CLI tool:
//! an in-memory episode store, selection handling, the team-roster
//! edit/save/cancel workflow, and the confirmation gate that fronts it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod gate;
pub mod models;
pub mod panel;
pub mod roster;
pub mod store;
#[cfg(feature = "tui")]
pub mod tui;

/// Library-level error type for Showrunner operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Episode not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Showrunner operations.
pub type Result<T> = std::result::Result<T, Error>;
