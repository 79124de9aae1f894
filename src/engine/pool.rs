//! Available-pool filter: the candidate list a user can drag from.

use serde::{Deserialize, Serialize};

use crate::api::{Scene, SceneStatus};

/// Parent-location substring filter with optional sub-location refinement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    /// Substring matched against the scene's location tag.
    pub parent: String,
    /// When non-empty, the scene must also match at least one of these.
    #[serde(default)]
    pub sublocations: Vec<String>,
}

/// Pool query: selected statuses plus an optional location filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolFilter {
    pub statuses: Vec<SceneStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFilter>,
}

impl PoolFilter {
    /// Filter on a status set alone.
    pub fn statuses(statuses: impl IntoIterator<Item = SceneStatus>) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
            location: None,
        }
    }

    /// Whether the scene belongs in the pool under this filter.
    ///
    /// Pickups/Reshoot scenes that currently hold a scheduled date are
    /// hidden even though their status is selected: they are actively on
    /// the board.
    pub fn matches(&self, scene: &Scene) -> bool {
        if !self.statuses.contains(&scene.status) {
            return false;
        }
        if scene.is_actively_flagged() {
            return false;
        }
        match &self.location {
            None => true,
            Some(filter) => {
                let location = scene.metadata.location.as_str();
                if !location.contains(filter.parent.as_str()) {
                    return false;
                }
                filter.sublocations.is_empty()
                    || filter.sublocations.iter().any(|sub| location.contains(sub.as_str()))
            }
        }
    }
}

/// Scenes matching the filter, in script order.
pub fn available_pool(scenes: &[Scene], filter: &PoolFilter) -> Vec<Scene> {
    let mut pool: Vec<Scene> = scenes
        .iter()
        .filter(|scene| filter.matches(scene))
        .cloned()
        .collect();
    pool.sort_by(|a, b| a.number.cmp(&b.number));
    pool
}
