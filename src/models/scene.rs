//! Canonical per-scene shoot record and status lifecycle.
//!
//! A scene's status/date fields are created at script import (all
//! `NotScheduled`), mutated only by engine operations, and never deleted.
//! Retiring a scene means resetting it back to `NotScheduled`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{InteriorExterior, SceneNumber, SceneStatus, TimeOfDay};

/// Read-only tags supplied by the script subsystem at import time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub location: String,
    pub interior_exterior: InteriorExterior,
    pub time_of_day: TimeOfDay,
    /// Page length in eighths of a page.
    pub page_eighths: u32,
}

/// Canonical shoot metadata for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub number: SceneNumber,
    pub status: SceneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    pub metadata: SceneMetadata,
}

impl Scene {
    /// Create a freshly imported, unscheduled scene.
    pub fn new(number: impl Into<SceneNumber>, metadata: SceneMetadata) -> Self {
        Self {
            number: number.into(),
            status: SceneStatus::NotScheduled,
            scheduled_date: None,
            scheduled_time: None,
            metadata,
        }
    }

    /// Apply the assignment transition: set date/time, and promote
    /// `NotScheduled` to `Scheduled`. Any other status (Pickups, Reshoot,
    /// Shot, Removed) keeps its label.
    pub fn mark_assigned(&mut self, date: NaiveDate, time: Option<String>) {
        self.scheduled_date = Some(date);
        self.scheduled_time = time;
        if self.status == SceneStatus::NotScheduled {
            self.status = SceneStatus::Scheduled;
        }
    }

    /// Apply the unassignment transition: clear date/time, and demote
    /// `Scheduled` back to `NotScheduled`.
    ///
    /// A Pickups/Reshoot scene keeps its label with the date cleared. This
    /// deliberately leaves the scene flagged while off the board; the
    /// stripboard counts and reports rely on it.
    pub fn mark_unassigned(&mut self) {
        self.scheduled_date = None;
        self.scheduled_time = None;
        if self.status == SceneStatus::Scheduled {
            self.status = SceneStatus::NotScheduled;
        }
    }

    /// Day-lock transition: the scene was shot. The date is cleared even
    /// though the day's block keeps its reference, so the day display stays
    /// informative without the scene counting as scheduled.
    pub fn mark_shot(&mut self) {
        self.status = SceneStatus::Shot;
        self.scheduled_date = None;
        self.scheduled_time = None;
    }

    /// Day-unlock transition: inverse of [`Scene::mark_shot`].
    pub fn mark_unshot(&mut self, date: NaiveDate, time: Option<String>) {
        self.status = SceneStatus::Scheduled;
        self.scheduled_date = Some(date);
        self.scheduled_time = time;
    }

    /// Force the scene back to its initial state.
    pub fn reset(&mut self) {
        self.status = SceneStatus::NotScheduled;
        self.scheduled_date = None;
        self.scheduled_time = None;
    }

    /// A Pickups/Reshoot scene with a date is actively on the board and is
    /// hidden from the available pool.
    pub fn is_actively_flagged(&self) -> bool {
        matches!(self.status, SceneStatus::Pickups | SceneStatus::Reshoot)
            && self.scheduled_date.is_some()
    }
}
