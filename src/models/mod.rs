//! Data models for Showrunner entities.
//!
//! This module defines the core data structures:
//! - `Episode` - A drop campaign with budget, schedule, and team roster
//! - `TeamMember` - A name/role pair attached to an episode
//! - `EpisodeStatus` - Lifecycle stage of an episode
//! - `EpisodeDraft` - Creation-form payload for a new episode

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Episode lifecycle stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EpisodeStatus {
    #[default]
    Planning,
    InProgress,
    Production,
    Marketing,
    Launched,
    Completed,
}

impl EpisodeStatus {
    /// Get all statuses in lifecycle order.
    pub fn all() -> &'static [EpisodeStatus] {
        &[
            EpisodeStatus::Planning,
            EpisodeStatus::InProgress,
            EpisodeStatus::Production,
            EpisodeStatus::Marketing,
            EpisodeStatus::Launched,
            EpisodeStatus::Completed,
        ]
    }
}

impl fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EpisodeStatus::Planning => "planning",
            EpisodeStatus::InProgress => "in-progress",
            EpisodeStatus::Production => "production",
            EpisodeStatus::Marketing => "marketing",
            EpisodeStatus::Launched => "launched",
            EpisodeStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for EpisodeStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "planning" => Ok(EpisodeStatus::Planning),
            "in-progress" | "in_progress" => Ok(EpisodeStatus::InProgress),
            "production" => Ok(EpisodeStatus::Production),
            "marketing" => Ok(EpisodeStatus::Marketing),
            "launched" => Ok(EpisodeStatus::Launched),
            "completed" => Ok(EpisodeStatus::Completed),
            _ => Err(format!("Unknown episode status: {}", s)),
        }
    }
}

/// A member of an episode's team roster.
///
/// Members carry no identifier; their position in the roster list is their
/// identity, and edits are committed by replacing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Display name
    pub name: String,

    /// Role on this episode (e.g., "Designer")
    pub role: String,
}

impl TeamMember {
    /// Create a new team member with the given name and role.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// A drop campaign tracked by Showrunner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Unique identifier (e.g., "ep-a1b2")
    pub id: String,

    /// Episode name
    pub name: String,

    /// Creative concept description
    pub concept: String,

    /// Current lifecycle stage
    #[serde(default)]
    pub status: EpisodeStatus,

    /// Production start date
    pub start_date: NaiveDate,

    /// Public launch date
    pub launch_date: NaiveDate,

    /// Allocated budget in whole currency units
    pub budget: u64,

    /// Revenue target in whole currency units
    pub target_revenue: u64,

    /// Team roster, committed by whole-list replacement only
    #[serde(default)]
    pub team_members: Vec<TeamMember>,

    /// Attached products (reserved, unused)
    #[serde(default)]
    pub products: Vec<serde_json::Value>,

    /// Attached tasks (reserved, unused)
    #[serde(default)]
    pub tasks: Vec<serde_json::Value>,
}

impl Episode {
    /// Build an episode record from a creation draft and an assigned id.
    pub fn from_draft(id: String, draft: EpisodeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            concept: draft.concept,
            status: draft.status,
            start_date: draft.start_date,
            launch_date: draft.launch_date,
            budget: draft.budget,
            target_revenue: draft.target_revenue,
            team_members: draft.team_members,
            products: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

/// Creation-form payload: everything an episode needs except its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeDraft {
    /// Episode name
    pub name: String,

    /// Creative concept description
    pub concept: String,

    /// Initial lifecycle stage
    #[serde(default)]
    pub status: EpisodeStatus,

    /// Production start date
    pub start_date: NaiveDate,

    /// Public launch date
    pub launch_date: NaiveDate,

    /// Allocated budget in whole currency units
    #[serde(default)]
    pub budget: u64,

    /// Revenue target in whole currency units
    #[serde(default)]
    pub target_revenue: u64,

    /// Initial team roster
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

impl EpisodeDraft {
    /// Create a draft with the given name and concept; other fields start
    /// at their defaults (planning status, today's dates, zero money, no team).
    pub fn new(name: impl Into<String>, concept: impl Into<String>) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            name: name.into(),
            concept: concept.into(),
            status: EpisodeStatus::default(),
            start_date: today,
            launch_date: today,
            budget: 0,
            target_revenue: 0,
            team_members: Vec::new(),
        }
    }
}
