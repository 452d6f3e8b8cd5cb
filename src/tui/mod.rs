//! Terminal User Interface module for showrunner
//!
//! This module provides a keyboard-driven TUI over the episode panel: the
//! episode list, a detail pane, a creation form, and the gated team-roster
//! editor. All state is in-memory; the TUI drives the same panel the CLI
//! commands use.

mod app;
mod logging;
mod notifications;
mod views;

pub use app::{App, run};
pub use notifications::{NotificationLevel, NotificationManager, Toast};
