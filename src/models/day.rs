//! Shooting days and their ordered schedule blocks.
//!
//! Each shooting day owns an ordered sequence of blocks: scene-capable time
//! slots, a lunch slot, and one end-of-day sentinel that is always last.
//! Block kinds are a tagged sum type so the drag-and-drop compatibility
//! checks stay exhaustive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{BlockId, DayId, SceneNumber};

/// What a scene-capable slot currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum SlotContent {
    /// Reference to a scene by number.
    Scene(SceneNumber),
    /// Free-text custom item ("Company move", "Stunt rehearsal").
    Custom(String),
}

/// The kind of a schedule block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "content")]
pub enum BlockKind {
    /// Scene-capable time slot; `None` means empty.
    Slot(Option<SlotContent>),
    /// Lunch marker. Repositioned by swapping whole block objects.
    Lunch,
    /// End-of-day sentinel, exactly one per day, always last.
    EndOfDay,
}

/// A single time slot within a shooting day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub id: BlockId,
    /// Display label ("8:15 AM").
    pub time: String,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl ScheduleBlock {
    pub fn slot(time: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            time: time.into(),
            kind: BlockKind::Slot(None),
        }
    }

    pub fn lunch(time: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            time: time.into(),
            kind: BlockKind::Lunch,
        }
    }

    pub fn end_of_day() -> Self {
        Self {
            id: BlockId::new(),
            time: "End of Day".to_string(),
            kind: BlockKind::EndOfDay,
        }
    }

    /// Whether the block can hold scene or custom content.
    pub fn is_slot(&self) -> bool {
        matches!(self.kind, BlockKind::Slot(_))
    }

    pub fn is_empty_slot(&self) -> bool {
        matches!(self.kind, BlockKind::Slot(None))
    }

    /// Scene number held by this block, if any.
    pub fn scene_number(&self) -> Option<&SceneNumber> {
        match &self.kind {
            BlockKind::Slot(Some(SlotContent::Scene(number))) => Some(number),
            _ => None,
        }
    }

    /// Current slot content, if this is an occupied slot.
    pub fn content(&self) -> Option<&SlotContent> {
        match &self.kind {
            BlockKind::Slot(Some(content)) => Some(content),
            _ => None,
        }
    }

    /// Remove and return the slot content. No-op for non-slot blocks.
    pub fn take_content(&mut self) -> Option<SlotContent> {
        match &mut self.kind {
            BlockKind::Slot(content) => content.take(),
            _ => None,
        }
    }

    /// Put content into the slot, returning whatever was there before.
    ///
    /// Must only be called on slot blocks; the engine's compatibility check
    /// guarantees it.
    pub fn replace_content(&mut self, new: SlotContent) -> Option<SlotContent> {
        match &mut self.kind {
            BlockKind::Slot(content) => content.replace(new),
            _ => None,
        }
    }
}

/// Default block template for a freshly created shooting day: six morning
/// slots at 15-minute steps, lunch at noon, two afternoon slots, and the
/// end-of-day sentinel.
pub fn default_schedule_blocks() -> Vec<ScheduleBlock> {
    vec![
        ScheduleBlock::slot("8:00 AM"),
        ScheduleBlock::slot("8:15 AM"),
        ScheduleBlock::slot("8:30 AM"),
        ScheduleBlock::slot("8:45 AM"),
        ScheduleBlock::slot("9:00 AM"),
        ScheduleBlock::slot("9:15 AM"),
        ScheduleBlock::lunch("12:00 PM"),
        ScheduleBlock::slot("1:00 PM"),
        ScheduleBlock::slot("2:00 PM"),
        ScheduleBlock::end_of_day(),
    ]
}

/// One calendar day of production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootingDay {
    pub id: DayId,
    /// Unique across the collection.
    pub date: NaiveDate,
    /// 1-based rank when the collection is sorted by date ascending.
    pub day_number: u32,
    pub blocks: Vec<ScheduleBlock>,
    pub is_locked: bool,
    pub is_shot: bool,
    pub is_collapsed: bool,
}

impl ShootingDay {
    /// Create a day with the default block template.
    pub fn new(date: NaiveDate, day_number: u32) -> Self {
        Self {
            id: DayId::new(),
            date,
            day_number,
            blocks: default_schedule_blocks(),
            is_locked: false,
            is_shot: false,
            is_collapsed: false,
        }
    }

    pub fn block(&self, id: BlockId) -> Option<&ScheduleBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut ScheduleBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn block_position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Number of scene-capable blocks. A day must never drop below two.
    pub fn slot_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_slot()).count()
    }

    /// First empty scene-capable block, in block order.
    pub fn first_empty_slot(&self) -> Option<BlockId> {
        self.blocks
            .iter()
            .find(|b| b.is_empty_slot())
            .map(|b| b.id)
    }

    /// Scene numbers in block order, paired with their slot labels.
    pub fn scheduled_scene_numbers(&self) -> Vec<(SceneNumber, String)> {
        self.blocks
            .iter()
            .filter_map(|b| b.scene_number().map(|n| (n.clone(), b.time.clone())))
            .collect()
    }

    /// Whether the scene occupies any slot in this day.
    pub fn holds_scene(&self, number: &SceneNumber) -> bool {
        self.blocks.iter().any(|b| b.scene_number() == Some(number))
    }
}
