//! Scene scheduling engine.
//!
//! [`StripboardEngine`] owns the scene records, the shooting-day
//! collection, and the scheduled-date index behind a narrow operation API. UI layers only dispatch operations and render results;
//! every mutation of the three stores happens here, synchronously to
//! completion, so one operation is atomic relative to the next.
//!
//! Every mutating operation reports which logical tables it touched via
//! [`Dirty`], so the service layer can schedule the matching persistence
//! writes.

pub mod displace;
pub mod index;
pub mod pool;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{BlockId, DayId, Scene, SceneNumber, SceneStatus, SceneSummary, ShootingDay};
use crate::models::{SceneMetadata, ScheduleBlock};

pub use displace::{Displaced, DragSource, DropOutcome, DropRejection, DropTarget};
pub use index::ScheduledIndex;
pub use pool::{available_pool, LocationFilter, PoolFilter};

/// A day must retain at least this many scene-capable blocks.
pub const MIN_SLOT_BLOCKS: usize = 2;

/// Errors surfaced to the user by engine operations.
///
/// Silently-ignored conditions (incompatible drop payloads, drops onto
/// locked days) are reported through [`DropOutcome`] instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("date {date} already belongs to day {existing_day_number}")]
    DuplicateDayDate {
        date: NaiveDate,
        existing_day_number: u32,
    },

    #[error("day {day_number} must keep at least {MIN_SLOT_BLOCKS} scene blocks")]
    BlockFloor { day_number: u32 },

    #[error("day {day_number} is locked")]
    DayLocked { day_number: u32 },

    #[error("the end-of-day block cannot be removed")]
    EndOfDayImmutable,

    #[error("shooting day {0} not found")]
    DayNotFound(DayId),

    #[error("block {block} not found in day {day}")]
    BlockNotFound { day: DayId, block: BlockId },

    #[error("scene {0} not found")]
    SceneNotFound(SceneNumber),

    #[error("block {0} is not an empty scene slot")]
    SlotUnavailable(BlockId),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Which logical tables an operation mutated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dirty {
    pub scenes: bool,
    pub days: bool,
    pub index: bool,
}

impl Dirty {
    pub const ALL: Dirty = Dirty {
        scenes: true,
        days: true,
        index: true,
    };

    pub const SCENES: Dirty = Dirty {
        scenes: true,
        days: false,
        index: false,
    };

    pub const DAYS: Dirty = Dirty {
        scenes: false,
        days: true,
        index: false,
    };

    pub const INDEX: Dirty = Dirty {
        scenes: false,
        days: false,
        index: true,
    };

    pub fn union(self, other: Dirty) -> Dirty {
        Dirty {
            scenes: self.scenes || other.scenes,
            days: self.days || other.days,
            index: self.index || other.index,
        }
    }

    pub fn any(&self) -> bool {
        self.scenes || self.days || self.index
    }
}

/// Scene hand-off from the script subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneImport {
    pub number: SceneNumber,
    pub metadata: SceneMetadata,
}

/// The scheduling engine and its three stores.
#[derive(Debug, Default, Clone)]
pub struct StripboardEngine {
    pub(crate) scenes: Vec<Scene>,
    pub(crate) days: Vec<ShootingDay>,
    pub(crate) index: ScheduledIndex,
}

impl StripboardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate the engine from persisted state.
    pub fn from_parts(scenes: Vec<Scene>, days: Vec<ShootingDay>, index: ScheduledIndex) -> Self {
        Self {
            scenes,
            days,
            index,
        }
    }

    // ==================== Read surface ====================

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn days(&self) -> &[ShootingDay] {
        &self.days
    }

    pub fn index(&self) -> &ScheduledIndex {
        &self.index
    }

    pub fn scene(&self, number: &SceneNumber) -> Option<&Scene> {
        self.scenes.iter().find(|s| &s.number == number)
    }

    pub fn day(&self, id: DayId) -> Option<&ShootingDay> {
        self.days.iter().find(|d| d.id == id)
    }

    /// Ordered scene summaries for one shoot date, straight from the
    /// materialized index. Consumed by the calendar, call sheet, and
    /// report subsystems.
    pub fn scheduled_scenes(&self, date: NaiveDate) -> Vec<SceneSummary> {
        self.index.get(&date).cloned().unwrap_or_default()
    }

    /// Candidate scenes for manual assignment.
    pub fn available_pool(&self, filter: &PoolFilter) -> Vec<Scene> {
        pool::available_pool(&self.scenes, filter)
    }

    // ==================== Scene record operations ====================

    /// Merge the scene list supplied by the script subsystem. New numbers
    /// are appended as `NotScheduled`; existing records keep their shoot
    /// state and only refresh their metadata.
    pub fn import_scenes(&mut self, imports: Vec<SceneImport>) -> Dirty {
        for import in imports {
            match self.scenes.iter_mut().find(|s| s.number == import.number) {
                Some(existing) => existing.metadata = import.metadata,
                None => self.scenes.push(Scene::new(import.number, import.metadata)),
            }
        }
        Dirty::SCENES
    }

    /// Manual stripboard flag edit (Pickups, Reshoot, Removed, ...).
    /// Scheduling operations never touch `Removed`; it is set only here.
    pub fn set_scene_status(&mut self, number: &SceneNumber, status: SceneStatus) -> EngineResult<Dirty> {
        let scene = self
            .scene_mut(number)
            .ok_or_else(|| EngineError::SceneNotFound(number.clone()))?;
        scene.status = status;
        Ok(Dirty::SCENES)
    }

    /// Place a scene into an empty slot of an unlocked day.
    pub fn assign_scene(
        &mut self,
        number: &SceneNumber,
        day_id: DayId,
        block_id: BlockId,
    ) -> EngineResult<Dirty> {
        if self.scene(number).is_none() {
            return Err(EngineError::SceneNotFound(number.clone()));
        }
        let day_pos = self.day_pos(day_id)?;
        let day = &self.days[day_pos];
        if day.is_locked {
            return Err(EngineError::DayLocked {
                day_number: day.day_number,
            });
        }
        let block = day.block(block_id).ok_or(EngineError::BlockNotFound {
            day: day_id,
            block: block_id,
        })?;
        if !block.is_empty_slot() {
            return Err(EngineError::SlotUnavailable(block_id));
        }

        // Uniqueness: a scene occupies at most one slot on the whole board.
        let mut affected = self.strip_scene_from_blocks(number);
        affected.push(day_pos);

        let date = self.days[day_pos].date;
        let time = self.days[day_pos]
            .block(block_id)
            .map(|b| b.time.clone());
        // The slot was verified empty above.
        let _prev = self.days[day_pos]
            .block_mut(block_id)
            .and_then(|b| b.replace_content(crate::models::SlotContent::Scene(number.clone())));

        if let Some(scene) = self.scene_mut(number) {
            scene.mark_assigned(date, time);
        }

        index::remove_scene(&mut self.index, number);
        self.refresh_index_for(&affected);
        Ok(Dirty::ALL)
    }

    /// Pull a scene off the board: clear its slot(s), date, and time.
    /// Unknown scene numbers are logged and ignored (non-fatal).
    pub fn unassign_scene(&mut self, number: &SceneNumber) -> Dirty {
        if self.scene(number).is_none() {
            log::warn!("unassign requested for unknown scene {number}; ignoring");
            return Dirty::default();
        }
        let affected = self.strip_scene_from_blocks(number);
        if let Some(scene) = self.scene_mut(number) {
            scene.mark_unassigned();
        }
        index::remove_scene(&mut self.index, number);
        self.refresh_index_for(&affected);
        Dirty::ALL
    }

    /// Force a scene back to `NotScheduled` and remove it from every block
    /// in every day that references it. Unknown numbers are logged and
    /// ignored.
    pub fn reset_scene(&mut self, number: &SceneNumber) -> Dirty {
        if self.scene(number).is_none() {
            log::warn!("reset requested for unknown scene {number}; ignoring");
            return Dirty::default();
        }
        let affected = self.strip_scene_from_blocks(number);
        if let Some(scene) = self.scene_mut(number) {
            scene.reset();
        }
        index::remove_scene(&mut self.index, number);
        self.refresh_index_for(&affected);
        Dirty::ALL
    }

    // ==================== Day lifecycle ====================

    /// Append a new shooting day dated one calendar day after the last
    /// existing day, or `today` if the board is empty.
    pub fn add_shooting_day(&mut self, today: NaiveDate) -> (DayId, Dirty) {
        let date = self
            .days
            .iter()
            .map(|d| d.date)
            .max()
            .and_then(|last| last.checked_add_days(Days::new(1)))
            .unwrap_or(today);
        let day = ShootingDay::new(date, self.days.len() as u32 + 1);
        let id = day.id;
        self.days.push(day);
        (id, Dirty::DAYS)
    }

    /// Change a day's date.
    ///
    /// Locked days are read-only. Rejected without mutation when the date
    /// already belongs to another day; the error names the conflicting day
    /// number. Otherwise the
    /// collection is re-sorted by date, every day is renumbered to its new
    /// rank, and the day's scenes are re-homed in the index.
    pub fn update_day_date(&mut self, day_id: DayId, new_date: NaiveDate) -> EngineResult<Dirty> {
        let pos = self.day_pos(day_id)?;
        if self.days[pos].is_locked {
            return Err(EngineError::DayLocked {
                day_number: self.days[pos].day_number,
            });
        }
        if let Some(conflict) = self
            .days
            .iter()
            .find(|d| d.id != day_id && d.date == new_date)
        {
            return Err(EngineError::DuplicateDayDate {
                date: new_date,
                existing_day_number: conflict.day_number,
            });
        }
        if self.days[pos].date == new_date {
            return Ok(Dirty::default());
        }

        let old_date = self.days[pos].date;
        self.days[pos].date = new_date;
        self.sort_and_renumber_days();

        // Re-home every scene that was assigned to this day.
        let pos = self.day_pos(day_id)?;
        let moved = self.days[pos].scheduled_scene_numbers();
        for (number, _) in &moved {
            if let Some(scene) = self.scene_mut(number) {
                scene.scheduled_date = Some(new_date);
            }
            index::remove_scene(&mut self.index, number);
        }
        // The old bucket is gone once its scenes are removed; materialize
        // the new one in block order.
        self.index.remove(&old_date);
        self.refresh_index_for(&[pos]);

        Ok(Dirty::ALL)
    }

    /// Insert a fresh empty slot after `after` (or just before the
    /// end-of-day sentinel when `after` is `None`).
    pub fn add_block(
        &mut self,
        day_id: DayId,
        time: impl Into<String>,
        after: Option<BlockId>,
    ) -> EngineResult<(BlockId, Dirty)> {
        let pos = self.day_pos(day_id)?;
        let day = &mut self.days[pos];
        if day.is_locked {
            return Err(EngineError::DayLocked {
                day_number: day.day_number,
            });
        }

        let insert_at = match after {
            Some(block_id) => {
                day.block_position(block_id)
                    .ok_or(EngineError::BlockNotFound {
                        day: day_id,
                        block: block_id,
                    })?
                    + 1
            }
            // Default: just before the sentinel.
            None => day.blocks.len().saturating_sub(1),
        };
        // Never insert behind the sentinel.
        let insert_at = insert_at.min(day.blocks.len().saturating_sub(1));

        let block = ScheduleBlock::slot(time);
        let id = block.id;
        day.blocks.insert(insert_at, block);
        Ok((id, Dirty::DAYS))
    }

    /// Remove a block, subject to the two-slot floor. A block holding a
    /// scene unassigns that scene first.
    pub fn remove_block(&mut self, day_id: DayId, block_id: BlockId) -> EngineResult<Dirty> {
        let pos = self.day_pos(day_id)?;
        let day = &self.days[pos];
        if day.is_locked {
            return Err(EngineError::DayLocked {
                day_number: day.day_number,
            });
        }
        let block = day.block(block_id).ok_or(EngineError::BlockNotFound {
            day: day_id,
            block: block_id,
        })?;
        if block.kind == crate::models::BlockKind::EndOfDay {
            return Err(EngineError::EndOfDayImmutable);
        }
        if block.is_slot() && day.slot_count() <= MIN_SLOT_BLOCKS {
            return Err(EngineError::BlockFloor {
                day_number: day.day_number,
            });
        }

        let displaced_scene = block.scene_number().cloned();
        let day = &mut self.days[pos];
        day.blocks.retain(|b| b.id != block_id);

        let mut dirty = Dirty::DAYS;
        if let Some(number) = displaced_scene {
            if let Some(scene) = self.scene_mut(&number) {
                scene.mark_unassigned();
            }
            index::remove_scene(&mut self.index, &number);
            self.refresh_index_for(&[pos]);
            dirty = Dirty::ALL;
        }
        Ok(dirty)
    }

    // ==================== Lock / completion workflow ====================

    /// Lock a day and mark it shot: every scene in its slots transitions to
    /// `Shot` with its date cleared. The blocks keep their scene references
    /// so the day display stays informative.
    pub fn lock_day(&mut self, day_id: DayId) -> EngineResult<Dirty> {
        let pos = self.day_pos(day_id)?;
        {
            let day = &mut self.days[pos];
            day.is_locked = true;
            day.is_shot = true;
            day.is_collapsed = true;
        }

        let shot = self.days[pos].scheduled_scene_numbers();
        for (number, _) in &shot {
            if let Some(scene) = self.scene_mut(number) {
                scene.mark_shot();
            }
            index::remove_scene(&mut self.index, number);
        }
        self.refresh_index_for(&[pos]);
        Ok(Dirty::ALL)
    }

    /// Inverse of [`StripboardEngine::lock_day`]: scenes become `Scheduled`
    /// again with their date and slot time restored, and the index bucket
    /// is repopulated.
    pub fn unlock_day(&mut self, day_id: DayId) -> EngineResult<Dirty> {
        let pos = self.day_pos(day_id)?;
        {
            let day = &mut self.days[pos];
            day.is_locked = false;
            day.is_shot = false;
        }

        let date = self.days[pos].date;
        let restored = self.days[pos].scheduled_scene_numbers();
        for (number, time) in restored {
            if let Some(scene) = self.scene_mut(&number) {
                scene.mark_unshot(date, Some(time));
            }
            index::remove_scene(&mut self.index, &number);
        }
        self.refresh_index_for(&[pos]);
        Ok(Dirty::ALL)
    }

    // ==================== Index repair ====================

    /// Rebuild the scheduled-date index from the day collection. The
    /// recovery path for index drift; safe to invoke at any time.
    pub fn reconcile(&mut self) -> Dirty {
        self.index = index::reconcile(&self.days, &self.scenes);
        Dirty::INDEX
    }

    // ==================== Internals ====================

    pub(crate) fn day_pos(&self, id: DayId) -> EngineResult<usize> {
        self.days
            .iter()
            .position(|d| d.id == id)
            .ok_or(EngineError::DayNotFound(id))
    }

    pub(crate) fn scene_mut(&mut self, number: &SceneNumber) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| &s.number == number)
    }

    /// Clear the scene out of every block that references it; returns the
    /// positions of the days that changed.
    pub(crate) fn strip_scene_from_blocks(&mut self, number: &SceneNumber) -> Vec<usize> {
        let mut affected = Vec::new();
        for (pos, day) in self.days.iter_mut().enumerate() {
            let mut changed = false;
            for block in &mut day.blocks {
                if block.scene_number() == Some(number) {
                    block.take_content();
                    changed = true;
                }
            }
            if changed {
                affected.push(pos);
            }
        }
        affected
    }

    /// Rebuild the index buckets of the given day positions in block order.
    pub(crate) fn refresh_index_for(&mut self, day_positions: &[usize]) {
        for &pos in day_positions {
            index::refresh_day(&mut self.index, &self.days[pos], &self.scenes);
        }
    }

    pub(crate) fn sort_and_renumber_days(&mut self) {
        self.days.sort_by_key(|d| d.date);
        for (rank, day) in self.days.iter_mut().enumerate() {
            day.day_number = rank as u32 + 1;
        }
    }
}
