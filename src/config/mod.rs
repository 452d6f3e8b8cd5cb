//! Configuration for Showrunner.
//!
//! One KDL file, `config.kdl`, located at `~/.config/showrunner/config.kdl`
//! (directory overridable via `SR_CONFIG_DIR`). Contains:
//!
//! - `output-format` - "json" or "human" for CLI commands
//! - `currency-symbol` - prefix for budget figures
//! - `date-format` - strftime-style format for schedule dates
//! - `edit-passphrase` - optional phrase the edit-team confirmation asks for
//!
//! ## Precedence
//!
//! CLI flag > config.kdl > built-in defaults. Use the [`resolver`] module
//! for unified precedence resolution with source tracking.

pub mod resolver;
pub mod schema;

pub use resolver::{
    ConfigOverrides, Resolved, ResolvedConfig, ValueSource, resolve_config,
};
pub use schema::{
    CONFIG_DIR_ENV, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT, OutputFormat, ShowrunnerConfig,
    config_dir, config_path,
};
