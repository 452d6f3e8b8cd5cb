//! In-memory episode store.
//!
//! Episodes live for the process lifetime only. The store is seeded with
//! fixed sample data and mutated through exactly two operations: `create`
//! (append a new record) and `replace_team` (swap one episode's roster
//! wholesale). Mutations are synchronous and immediately visible to all
//! readers.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::models::{Episode, EpisodeDraft, EpisodeStatus, TeamMember};
use crate::{Error, Result};

/// Generate a short hash-based episode ID (e.g., "ep-a1b2").
pub fn generate_episode_id(seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(
        chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or(0)
            .to_le_bytes(),
    );
    let hash = hasher.finalize();
    let hash_hex = format!("{:x}", hash);
    format!("ep-{}", &hash_hex[..4])
}

/// Ordered collection of episodes, append-only apart from roster swaps.
#[derive(Debug, Clone, Default)]
pub struct EpisodeStore {
    episodes: Vec<Episode>,
}

impl EpisodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the sample episodes.
    pub fn with_seed_data() -> Self {
        Self {
            episodes: seed_episodes(),
        }
    }

    /// All episodes in insertion order.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Look up an episode by id.
    pub fn get(&self, id: &str) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Create an episode from a draft, assigning a fresh unique id, and
    /// append it to the store. Returns the new record.
    pub fn create(&mut self, draft: EpisodeDraft) -> Episode {
        let mut attempt = 0u32;
        let id = loop {
            let id = generate_episode_id(&format!("{}#{}", draft.name, attempt));
            if self.get(&id).is_none() {
                break id;
            }
            attempt += 1;
        };
        let episode = Episode::from_draft(id, draft);
        self.episodes.push(episode.clone());
        episode
    }

    /// Replace an episode's entire team roster in one step.
    ///
    /// The roster is never partially updated; callers hand over the full
    /// replacement list. Returns `Error::NotFound` for an absent id.
    pub fn replace_team(&mut self, id: &str, members: Vec<TeamMember>) -> Result<()> {
        let episode = self
            .episodes
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        episode.team_members = members;
        Ok(())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The two sample episodes every fresh store starts with.
fn seed_episodes() -> Vec<Episode> {
    vec![
        Episode {
            id: "1".to_string(),
            name: "Episode 12: Winter Drop".to_string(),
            concept: "A winter-themed collection featuring cozy streetwear with premium \
                      materials and minimalist designs."
                .to_string(),
            status: EpisodeStatus::Launched,
            start_date: ymd(2024, 1, 1),
            launch_date: ymd(2024, 1, 15),
            budget: 25_000,
            target_revenue: 75_000,
            team_members: vec![
                TeamMember::new("Alex Chen", "Creative Director"),
                TeamMember::new("Sarah Kim", "Designer"),
                TeamMember::new("Mike Johnson", "Production Manager"),
            ],
            products: Vec::new(),
            tasks: Vec::new(),
        },
        Episode {
            id: "2".to_string(),
            name: "Episode 11: Street Essentials".to_string(),
            concept: "Essential streetwear pieces that blend comfort with urban aesthetics."
                .to_string(),
            status: EpisodeStatus::Planning,
            start_date: ymd(2024, 1, 8),
            launch_date: ymd(2024, 2, 1),
            budget: 20_000,
            target_revenue: 60_000,
            team_members: vec![
                TeamMember::new("Jordan Lee", "Lead Designer"),
                TeamMember::new("Taylor Brooks", "Marketing Lead"),
            ],
            products: Vec::new(),
            tasks: Vec::new(),
        },
    ]
}
