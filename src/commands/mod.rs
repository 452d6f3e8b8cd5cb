//! Command implementations for the Showrunner CLI.
//!
//! This module contains the business logic for each CLI command. Every
//! command returns a result struct implementing [`Output`], which the binary
//! prints as JSON (default) or human-readable text (`-H`).
//!
//! Commands operate on an [`EpisodeStore`] owned by the caller; the store is
//! seeded per invocation and never persisted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{ResolvedConfig, ValueSource, config_path};
use crate::format::{format_date, format_money};
use crate::models::{Episode, EpisodeDraft, EpisodeStatus, TeamMember};
use crate::store::EpisodeStore;
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output: Serialize {
    /// Serialize to pretty-printed JSON.
    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Formatting context carried into human-readable rendering.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Currency symbol prefix for money values
    pub currency_symbol: String,

    /// strftime pattern for dates
    pub date_format: String,
}

impl DisplayOptions {
    /// Capture the display-relevant values from a resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol().to_string(),
            date_format: config.date_format().to_string(),
        }
    }
}

// ==================== List ====================

/// One row of `sr list` output.
#[derive(Debug, Serialize)]
pub struct EpisodeSummary {
    pub id: String,
    pub name: String,
    pub status: EpisodeStatus,
    pub launch_date: NaiveDate,
    pub budget: u64,
    pub target_revenue: u64,
    pub team_size: usize,
}

/// Result of `sr list`.
#[derive(Debug, Serialize)]
pub struct EpisodeListResult {
    pub episodes: Vec<EpisodeSummary>,
    pub count: usize,
    #[serde(skip)]
    display: DisplayOptions,
}

impl Output for EpisodeListResult {
    fn to_human(&self) -> String {
        if self.episodes.is_empty() {
            return "No episodes found.".to_string();
        }
        let mut out = String::new();
        for ep in &self.episodes {
            out.push_str(&format!(
                "{:<8} {:<12} {:<14} {:>10} {:>10}  {:>2}  {}\n",
                ep.id,
                ep.status.to_string(),
                format_date(ep.launch_date, &self.display.date_format),
                format_money(ep.budget, &self.display.currency_symbol),
                format_money(ep.target_revenue, &self.display.currency_symbol),
                ep.team_size,
                ep.name,
            ));
        }
        out.push_str(&format!("\n{} episode(s)", self.count));
        out
    }
}

/// List episodes, optionally filtered by status.
pub fn episode_list(
    store: &EpisodeStore,
    status: Option<&str>,
    config: &ResolvedConfig,
) -> Result<EpisodeListResult> {
    let filter = status
        .map(|s| s.parse::<EpisodeStatus>())
        .transpose()
        .map_err(Error::InvalidInput)?;

    let episodes: Vec<EpisodeSummary> = store
        .episodes()
        .iter()
        .filter(|ep| match filter {
            Some(f) => ep.status == f,
            None => true,
        })
        .map(|ep| EpisodeSummary {
            id: ep.id.clone(),
            name: ep.name.clone(),
            status: ep.status,
            launch_date: ep.launch_date,
            budget: ep.budget,
            target_revenue: ep.target_revenue,
            team_size: ep.team_members.len(),
        })
        .collect();

    Ok(EpisodeListResult {
        count: episodes.len(),
        episodes,
        display: DisplayOptions::from_config(config),
    })
}

// ==================== Show ====================

/// Result of `sr show`.
#[derive(Debug, Serialize)]
pub struct EpisodeShowResult {
    #[serde(flatten)]
    pub episode: Episode,
    #[serde(skip)]
    display: DisplayOptions,
}

impl Output for EpisodeShowResult {
    fn to_human(&self) -> String {
        let ep = &self.episode;
        let mut out = String::new();
        out.push_str(&format!("{}\n", ep.name));
        out.push_str(&format!("ID:      {}\n", ep.id));
        out.push_str(&format!("Status:  {}\n", ep.status));
        out.push_str(&format!("Concept: {}\n", ep.concept));
        out.push_str(&format!(
            "Start:   {}\n",
            format_date(ep.start_date, &self.display.date_format)
        ));
        out.push_str(&format!(
            "Launch:  {}\n",
            format_date(ep.launch_date, &self.display.date_format)
        ));
        out.push_str(&format!(
            "Budget:  {}\n",
            format_money(ep.budget, &self.display.currency_symbol)
        ));
        out.push_str(&format!(
            "Target:  {}\n",
            format_money(ep.target_revenue, &self.display.currency_symbol)
        ));
        out.push_str(&format!("\nTeam ({}):\n", ep.team_members.len()));
        if ep.team_members.is_empty() {
            out.push_str("  (none)\n");
        } else {
            for member in &ep.team_members {
                out.push_str(&format!("  {} ({})\n", member.name, member.role));
            }
        }
        out.trim_end().to_string()
    }
}

/// Show a single episode in full.
pub fn episode_show(
    store: &EpisodeStore,
    id: &str,
    config: &ResolvedConfig,
) -> Result<EpisodeShowResult> {
    let episode = store
        .get(id)
        .ok_or_else(|| Error::NotFound(id.to_string()))?
        .clone();
    Ok(EpisodeShowResult {
        episode,
        display: DisplayOptions::from_config(config),
    })
}

// ==================== Create ====================

/// Result of `sr create`.
#[derive(Debug, Serialize)]
pub struct EpisodeCreateResult {
    pub id: String,
    pub name: String,
    pub status: EpisodeStatus,
    pub team_size: usize,
    /// Store size after the append
    pub count: usize,
}

impl Output for EpisodeCreateResult {
    fn to_human(&self) -> String {
        format!(
            "Created episode {}: {} ({} episodes total)",
            self.id, self.name, self.count
        )
    }
}

/// Parse a `"Name:Role"` member spec. The first colon separates name from
/// role, so roles may themselves contain colons.
pub fn parse_member(spec: &str) -> Result<TeamMember> {
    let (name, role) = spec
        .split_once(':')
        .ok_or_else(|| Error::InvalidInput(format!("Expected \"Name:Role\", got \"{}\"", spec)))?;
    let name = name.trim();
    let role = role.trim();
    if name.is_empty() || role.is_empty() {
        return Err(Error::InvalidInput(format!(
            "Member name and role must be non-empty in \"{}\"",
            spec
        )));
    }
    Ok(TeamMember::new(name, role))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("Invalid date \"{}\": {}", s, e)))
}

/// Create an episode from CLI arguments and append it to the store.
#[allow(clippy::too_many_arguments)]
pub fn episode_create(
    store: &mut EpisodeStore,
    name: &str,
    concept: &str,
    status: Option<&str>,
    start: Option<&str>,
    launch: Option<&str>,
    budget: Option<u64>,
    target: Option<u64>,
    members: &[String],
) -> Result<EpisodeCreateResult> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput("Episode name must be non-empty".to_string()));
    }
    if concept.trim().is_empty() {
        return Err(Error::InvalidInput("Episode concept must be non-empty".to_string()));
    }

    let mut draft = EpisodeDraft::new(name, concept);
    if let Some(s) = status {
        draft.status = s.parse().map_err(Error::InvalidInput)?;
    }
    if let Some(s) = start {
        draft.start_date = parse_date(s)?;
    }
    if let Some(s) = launch {
        draft.launch_date = parse_date(s)?;
    }
    if let Some(b) = budget {
        draft.budget = b;
    }
    if let Some(t) = target {
        draft.target_revenue = t;
    }
    for spec in members {
        draft.team_members.push(parse_member(spec)?);
    }

    let episode = store.create(draft);
    Ok(EpisodeCreateResult {
        id: episode.id,
        name: episode.name,
        status: episode.status,
        team_size: episode.team_members.len(),
        count: store.len(),
    })
}

// ==================== Config ====================

/// One resolved configuration value with its provenance.
#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}

impl ConfigEntry {
    fn new(value: impl Into<String>, source: ValueSource) -> Self {
        Self {
            value: value.into(),
            source: source.to_string(),
        }
    }
}

/// Result of `sr config show`. The passphrase itself is never echoed.
#[derive(Debug, Serialize)]
pub struct ConfigShowResult {
    pub output_format: ConfigEntry,
    pub currency_symbol: ConfigEntry,
    pub date_format: ConfigEntry,
    pub edit_passphrase_set: bool,
    pub path: String,
}

impl Output for ConfigShowResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "output-format    {:<12} ({})\n",
            self.output_format.value, self.output_format.source
        ));
        out.push_str(&format!(
            "currency-symbol  {:<12} ({})\n",
            self.currency_symbol.value, self.currency_symbol.source
        ));
        out.push_str(&format!(
            "date-format      {:<12} ({})\n",
            self.date_format.value, self.date_format.source
        ));
        out.push_str(&format!(
            "edit-passphrase  {}\n",
            if self.edit_passphrase_set { "(set)" } else { "(not set)" }
        ));
        out.push_str(&format!("\nFile: {}", self.path));
        out
    }
}

/// Show the resolved configuration with per-value sources.
pub fn config_show(config: &ResolvedConfig) -> Result<ConfigShowResult> {
    Ok(ConfigShowResult {
        output_format: ConfigEntry::new(
            config.output_format.value.to_string(),
            config.output_format.source.clone(),
        ),
        currency_symbol: ConfigEntry::new(
            config.currency_symbol.value.clone(),
            config.currency_symbol.source.clone(),
        ),
        date_format: ConfigEntry::new(
            config.date_format.value.clone(),
            config.date_format.source.clone(),
        ),
        edit_passphrase_set: config.edit_passphrase.is_some(),
        path: config_path()?.display().to_string(),
    })
}

/// Result of `sr config path`.
#[derive(Debug, Serialize)]
pub struct ConfigPathResult {
    pub path: String,
}

impl Output for ConfigPathResult {
    fn to_human(&self) -> String {
        self.path.clone()
    }
}

/// Print the config file path.
pub fn config_path_cmd() -> Result<ConfigPathResult> {
    Ok(ConfigPathResult {
        path: config_path()?.display().to_string(),
    })
}

// ==================== Version ====================

/// Result of `sr version`.
#[derive(Debug, Serialize)]
pub struct VersionResult {
    pub version: String,
    pub commit: String,
    pub built: String,
}

impl Output for VersionResult {
    fn to_human(&self) -> String {
        format!("sr {} ({}, built {})", self.version, self.commit, self.built)
    }
}

/// Show version and build metadata.
pub fn version() -> Result<VersionResult> {
    Ok(VersionResult {
        version: crate::cli::package_version().to_string(),
        commit: crate::cli::git_commit().to_string(),
        built: crate::cli::build_timestamp().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ResolvedConfig {
        ResolvedConfig::default()
    }

    // ==================== List Tests ====================

    #[test]
    fn test_list_returns_seeded_episodes() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_list(&store, None, &test_config()).unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.episodes[0].id, "1");
        assert_eq!(result.episodes[0].team_size, 3);
        assert_eq!(result.episodes[1].id, "2");
    }

    #[test]
    fn test_list_filters_by_status() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_list(&store, Some("launched"), &test_config()).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.episodes[0].name, "Episode 12: Winter Drop");
    }

    #[test]
    fn test_list_rejects_unknown_status() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_list(&store, Some("shipped"), &test_config());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_list_human_formats_money_and_dates() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_list(&store, None, &test_config()).unwrap();
        let human = result.to_human();
        assert!(human.contains("$25,000"));
        assert!(human.contains("$75,000"));
        assert!(human.contains("Jan 15, 2024"));
        assert!(human.contains("2 episode(s)"));
    }

    #[test]
    fn test_list_json_is_valid() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_list(&store, None, &test_config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["episodes"][0]["id"], "1");
    }

    // ==================== Show Tests ====================

    #[test]
    fn test_show_renders_roster() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_show(&store, "1", &test_config()).unwrap();
        let human = result.to_human();
        assert!(human.contains("Episode 12: Winter Drop"));
        assert!(human.contains("Team (3):"));
        assert!(human.contains("Alex Chen (Creative Director)"));
        assert!(human.contains("$75,000"));
    }

    #[test]
    fn test_show_missing_id_is_not_found() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_show(&store, "99", &test_config());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_show_json_flattens_episode() {
        let store = EpisodeStore::with_seed_data();
        let result = episode_show(&store, "2", &test_config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(value["id"], "2");
        assert_eq!(value["status"], "planning");
        assert_eq!(value["team_members"][0]["name"], "Jordan Lee");
    }

    // ==================== Create Tests ====================

    #[test]
    fn test_create_appends_episode() {
        let mut store = EpisodeStore::with_seed_data();
        let result = episode_create(
            &mut store,
            "Episode 13: Spring Capsule",
            "Pastel knitwear",
            Some("production"),
            Some("2024-02-01"),
            Some("2024-03-01"),
            Some(30_000),
            Some(90_000),
            &["Avery Quinn:Designer".to_string()],
        )
        .unwrap();
        assert!(result.id.starts_with("ep-"));
        assert_eq!(result.status, EpisodeStatus::Production);
        assert_eq!(result.team_size, 1);
        assert_eq!(result.count, 3);
        assert_eq!(store.len(), 3);

        let created = store.get(&result.id).unwrap();
        assert_eq!(created.budget, 30_000);
        assert_eq!(created.launch_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut store = EpisodeStore::with_seed_data();
        let result = episode_create(&mut store, "  ", "Concept", None, None, None, None, None, &[]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_rejects_blank_concept() {
        let mut store = EpisodeStore::with_seed_data();
        let result = episode_create(&mut store, "Ep", "", None, None, None, None, None, &[]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_create_rejects_bad_date() {
        let mut store = EpisodeStore::with_seed_data();
        let result = episode_create(
            &mut store,
            "Ep",
            "Concept",
            None,
            Some("02/01/2024"),
            None,
            None,
            None,
            &[],
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_member_splits_on_first_colon() {
        let member = parse_member("Avery Quinn:Lead: Production").unwrap();
        assert_eq!(member.name, "Avery Quinn");
        assert_eq!(member.role, "Lead: Production");
    }

    #[test]
    fn test_parse_member_trims_whitespace() {
        let member = parse_member(" Avery Quinn : Designer ").unwrap();
        assert_eq!(member.name, "Avery Quinn");
        assert_eq!(member.role, "Designer");
    }

    #[test]
    fn test_parse_member_rejects_missing_colon() {
        assert!(parse_member("Avery Quinn").is_err());
        assert!(parse_member("Avery Quinn:").is_err());
        assert!(parse_member(":Designer").is_err());
    }

    // ==================== Config Tests ====================

    #[test]
    fn test_config_show_reports_sources() {
        let config = test_config();
        let result = config_show(&config).unwrap();
        assert_eq!(result.output_format.source, "default");
        assert_eq!(result.currency_symbol.value, "$");
        assert!(!result.edit_passphrase_set);
    }

    #[test]
    fn test_config_show_never_echoes_passphrase() {
        let file = crate::config::ShowrunnerConfig {
            edit_passphrase: Some("winter-drop".to_string()),
            ..Default::default()
        };
        let config = crate::config::resolve_config(&file, &crate::config::ConfigOverrides::new());
        let result = config_show(&config).unwrap();
        assert!(result.edit_passphrase_set);
        assert!(!result.to_json().contains("winter-drop"));
        assert!(!result.to_human().contains("winter-drop"));
    }

    // ==================== Version Tests ====================

    #[test]
    fn test_version_reports_package_version() {
        let result = version().unwrap();
        assert_eq!(result.version, env!("CARGO_PKG_VERSION"));
        assert!(result.to_human().starts_with("sr "));
    }
}
