//! KDL schema for config.kdl.
//!
//! This module provides:
//! - A Rust struct representing the KDL schema
//! - Serialization/deserialization to/from KDL format
//! - Validation functions
//! - Default values and file location handling

use kdl::{KdlDocument, KdlEntry, KdlNode, KdlValue};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, Result};

/// Environment variable overriding the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "SR_CONFIG_DIR";

/// Built-in currency symbol when the config doesn't set one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Built-in date format when the config doesn't set one ("Jan 1, 2024").
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Output format preference for CLI commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output (default, machine-readable)
    #[default]
    Json,
    /// Human-readable output
    Human,
}

impl OutputFormat {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "human" => Some(OutputFormat::Human),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Human => "human",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User preferences stored in config.kdl.
///
/// Located at `~/.config/showrunner/config.kdl` (override the directory
/// with `SR_CONFIG_DIR`). Safe to sync across machines; the passphrase is
/// a display gate, not a credential.
///
/// # KDL Schema
///
/// ```kdl
/// output-format "human"      // or "json"
/// currency-symbol "$"
/// date-format "%b %-d, %Y"
/// edit-passphrase "let-me-in"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowrunnerConfig {
    /// Default output format for CLI commands
    pub output_format: Option<OutputFormat>,

    /// Currency symbol shown before budget figures
    pub currency_symbol: Option<String>,

    /// strftime-style format for schedule dates
    pub date_format: Option<String>,

    /// Optional passphrase the edit-team confirmation asks for.
    /// Unset means the confirmation is a plain approve/dismiss dialog.
    pub edit_passphrase: Option<String>,
}

impl ShowrunnerConfig {
    /// Create an empty config with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the config values.
    ///
    /// Returns an error message if any value is invalid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(ref symbol) = self.currency_symbol {
            if symbol.is_empty() {
                return Err("currency-symbol must not be empty".to_string());
            }
        }
        if let Some(ref fmt) = self.date_format {
            if !crate::format::is_valid_date_format(fmt) {
                return Err(format!("date-format is not a valid format string: {}", fmt));
            }
        }
        if let Some(ref passphrase) = self.edit_passphrase {
            if passphrase.is_empty() {
                return Err("edit-passphrase must not be empty when set".to_string());
            }
        }
        Ok(())
    }

    /// Parse config from a KDL document.
    pub fn from_kdl(doc: &KdlDocument) -> Self {
        let mut config = Self::new();

        // Parse output-format
        if let Some(node) = doc.get("output-format") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.output_format = OutputFormat::parse(s);
                }
            }
        }

        // Parse currency-symbol
        if let Some(node) = doc.get("currency-symbol") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.currency_symbol = Some(s.to_string());
                }
            }
        }

        // Parse date-format
        if let Some(node) = doc.get("date-format") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.date_format = Some(s.to_string());
                }
            }
        }

        // Parse edit-passphrase
        if let Some(node) = doc.get("edit-passphrase") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.edit_passphrase = Some(s.to_string());
                }
            }
        }

        config
    }

    /// Convert config to a KDL document.
    pub fn to_kdl(&self) -> KdlDocument {
        let mut doc = KdlDocument::new();

        if let Some(ref format) = self.output_format {
            let mut node = KdlNode::new("output-format");
            node.push(KdlEntry::new(KdlValue::String(format.as_str().to_string())));
            doc.nodes_mut().push(node);
        }

        if let Some(ref symbol) = self.currency_symbol {
            let mut node = KdlNode::new("currency-symbol");
            node.push(KdlEntry::new(KdlValue::String(symbol.clone())));
            doc.nodes_mut().push(node);
        }

        if let Some(ref fmt) = self.date_format {
            let mut node = KdlNode::new("date-format");
            node.push(KdlEntry::new(KdlValue::String(fmt.clone())));
            doc.nodes_mut().push(node);
        }

        if let Some(ref passphrase) = self.edit_passphrase {
            let mut node = KdlNode::new("edit-passphrase");
            node.push(KdlEntry::new(KdlValue::String(passphrase.clone())));
            doc.nodes_mut().push(node);
        }

        doc
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` if they are Some.
    pub fn merge(&mut self, other: &ShowrunnerConfig) {
        if other.output_format.is_some() {
            self.output_format = other.output_format.clone();
        }
        if other.currency_symbol.is_some() {
            self.currency_symbol = other.currency_symbol.clone();
        }
        if other.date_format.is_some() {
            self.date_format = other.date_format.clone();
        }
        if other.edit_passphrase.is_some() {
            self.edit_passphrase = other.edit_passphrase.clone();
        }
    }

    /// Load config from the default location. A missing file yields an
    /// empty config; a malformed or invalid one is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path)?;
        let doc: KdlDocument = text
            .parse()
            .map_err(|e: kdl::KdlError| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_kdl(&doc);
        config.validate().map_err(Error::Config)?;
        Ok(config)
    }

    /// Write config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_kdl().to_string())?;
        Ok(())
    }
}

/// Directory holding config.kdl: `$SR_CONFIG_DIR` if set, otherwise the
/// platform config dir plus `showrunner/`.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::config_dir()
        .map(|d| d.join("showrunner"))
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))
}

/// Full path of config.kdl.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.kdl"))
}
