//! Precedence resolution for configuration.
//!
//! Single entry point for resolving preferences with proper precedence,
//! keeping track of where each value came from so `sr config show` can
//! report it.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI flags (passed at runtime)
//! 2. config.kdl (`~/.config/showrunner/config.kdl`)
//! 3. Built-in defaults

use crate::Result;
use crate::config::schema::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT, OutputFormat, ShowrunnerConfig,
};

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value from CLI flag
    CliFlag,
    /// Value from config.kdl
    File,
    /// Built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::CliFlag => write!(f, "cli"),
            ValueSource::File => write!(f, "file"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// Create a new resolved value.
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Fully resolved configuration with source tracking.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Output format preference
    pub output_format: Resolved<OutputFormat>,
    /// Currency symbol for budget display
    pub currency_symbol: Resolved<String>,
    /// strftime-style date format
    pub date_format: Resolved<String>,
    /// Optional edit confirmation passphrase (no default, no CLI flag)
    pub edit_passphrase: Option<Resolved<String>>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            output_format: Resolved::new(OutputFormat::Json, ValueSource::Default),
            currency_symbol: Resolved::new(
                DEFAULT_CURRENCY_SYMBOL.to_string(),
                ValueSource::Default,
            ),
            date_format: Resolved::new(DEFAULT_DATE_FORMAT.to_string(), ValueSource::Default),
            edit_passphrase: None,
        }
    }
}

impl ResolvedConfig {
    /// Get the output format value.
    pub fn output_format(&self) -> &OutputFormat {
        &self.output_format.value
    }

    /// Get the currency symbol value.
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol.value
    }

    /// Get the date format value.
    pub fn date_format(&self) -> &str {
        &self.date_format.value
    }

    /// Get the edit passphrase, if configured.
    pub fn edit_passphrase(&self) -> Option<&str> {
        self.edit_passphrase.as_ref().map(|r| r.value.as_str())
    }

    /// Load config.kdl and resolve it against the given overrides.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let file = ShowrunnerConfig::load()?;
        Ok(resolve_config(&file, overrides))
    }
}

/// CLI overrides for configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Output format override from CLI flag
    pub output_format: Option<OutputFormat>,
    /// Currency symbol override from CLI flag
    pub currency_symbol: Option<String>,
    /// Date format override from CLI flag
    pub date_format: Option<String>,
}

impl ConfigOverrides {
    /// Create empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format override.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set currency symbol override.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    /// Set date format override.
    pub fn with_date_format(mut self, fmt: impl Into<String>) -> Self {
        self.date_format = Some(fmt.into());
        self
    }
}

/// Resolve configuration with the full precedence chain.
///
/// Precedence (highest to lowest):
/// 1. CLI flags (from `overrides`)
/// 2. config.kdl values (from `file`)
/// 3. Built-in defaults
pub fn resolve_config(file: &ShowrunnerConfig, overrides: &ConfigOverrides) -> ResolvedConfig {
    let mut result = ResolvedConfig::default();

    // Resolve output_format
    if let Some(ref format) = overrides.output_format {
        result.output_format = Resolved::new(format.clone(), ValueSource::CliFlag);
    } else if let Some(ref format) = file.output_format {
        result.output_format = Resolved::new(format.clone(), ValueSource::File);
    }
    // else: remains Default (Json)

    // Resolve currency_symbol
    if let Some(ref symbol) = overrides.currency_symbol {
        result.currency_symbol = Resolved::new(symbol.clone(), ValueSource::CliFlag);
    } else if let Some(ref symbol) = file.currency_symbol {
        result.currency_symbol = Resolved::new(symbol.clone(), ValueSource::File);
    }
    // else: remains Default ("$")

    // Resolve date_format
    if let Some(ref fmt) = overrides.date_format {
        result.date_format = Resolved::new(fmt.clone(), ValueSource::CliFlag);
    } else if let Some(ref fmt) = file.date_format {
        result.date_format = Resolved::new(fmt.clone(), ValueSource::File);
    }
    // else: remains Default

    // Resolve edit_passphrase (file only; no flag, no default)
    if let Some(ref passphrase) = file.edit_passphrase {
        result.edit_passphrase = Some(Resolved::new(passphrase.clone(), ValueSource::File));
    }

    result
}
