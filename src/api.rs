//! Public API surface for the stripboard backend.
//!
//! This file consolidates the identifier and summary types shared by the
//! engine, the repository layer, and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub use crate::models::{BlockKind, Scene, SceneMetadata, ScheduleBlock, ShootingDay, SlotContent};

/// Shooting day identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayId(pub Uuid);

/// Schedule block identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl DayId {
    pub fn new() -> Self {
        DayId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl BlockId {
    pub fn new() -> Self {
        BlockId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for DayId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scene number: numeric with an optional trailing letter suffix ("29A").
///
/// Unique within a script. Ordering follows the shooting script: numeric
/// part first, then suffix ("2" < "2A" < "10").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneNumber(pub String);

impl SceneNumber {
    pub fn new(value: impl Into<String>) -> Self {
        SceneNumber(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into the numeric part and the letter suffix.
    ///
    /// A scene number that does not start with a digit sorts after all
    /// numeric ones.
    fn sort_key(&self) -> (u32, &str) {
        let digit_len = self
            .0
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.0.len());
        let numeric = self.0[..digit_len].parse::<u32>().unwrap_or(u32::MAX);
        (numeric, &self.0[digit_len..])
    }
}

impl Ord for SceneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SceneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SceneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SceneNumber {
    fn from(value: &str) -> Self {
        SceneNumber(value.to_string())
    }
}

/// Shoot status of a scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStatus {
    NotScheduled,
    Scheduled,
    Shot,
    Pickups,
    Reshoot,
    Removed,
}

/// Interior/exterior tag from the scene heading.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteriorExterior {
    Interior,
    Exterior,
    IntExt,
}

/// Time-of-day tag from the scene heading.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Day,
    Night,
    Dawn,
    Dusk,
}

/// Lightweight scene projection stored in the scheduled-date index and
/// served to the calendar, call sheet, and report consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSummary {
    pub number: SceneNumber,
    pub status: SceneStatus,
    /// Time-slot label of the block the scene occupies ("8:15 AM").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    pub interior_exterior: InteriorExterior,
    pub time_of_day: TimeOfDay,
    /// Page length in eighths of a page.
    pub page_eighths: u32,
}

impl SceneSummary {
    /// Build a summary for a scene occupying the given time slot.
    pub fn for_slot(scene: &Scene, time: Option<String>) -> Self {
        Self {
            number: scene.number.clone(),
            status: scene.status,
            time,
            location: scene.metadata.location.clone(),
            interior_exterior: scene.metadata.interior_exterior,
            time_of_day: scene.metadata.time_of_day,
            page_eighths: scene.metadata.page_eighths,
        }
    }
}
