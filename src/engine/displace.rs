//! Drag-and-drop reassignment with displacement.
//!
//! Drops come from two sources: the available pool and an already-scheduled
//! block. The target is always a scene-capable slot. When the target is
//! occupied, the sitting content is displaced: first empty slot in the
//! target day, then first empty slot in the source day (cross-day moves
//! only), then back into the block the dragged item vacated, and as a last
//! resort the displaced scene is unassigned.
//!
//! Lunch blocks are different on purpose: repositioning a lunch swaps the
//! *entire block object* with the target block, so the lunch slot's
//! identity travels with it rather than merely its content.

use serde::{Deserialize, Serialize};

use super::{index, Dirty, EngineError, EngineResult, StripboardEngine};
use crate::api::{BlockId, DayId, SceneNumber};
use crate::models::{BlockKind, SlotContent};

/// Where a drag started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum DragSource {
    /// Dragged in from the available pool.
    Pool { scene: SceneNumber },
    /// Dragged from a block already on the board.
    Block { day: DayId, block: BlockId },
}

/// The slot a drag was dropped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub day: DayId,
    pub block: BlockId,
}

/// Why a drop was silently ignored. None of these mutate any store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropRejection {
    /// Payload kind and target kind do not combine.
    IncompatibleKinds,
    /// The target day is locked (read-only).
    TargetDayLocked,
    /// The source day is locked (read-only).
    SourceDayLocked,
    /// The source block had nothing to drag.
    EmptySource,
}

/// Where displaced content ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "resolution")]
pub enum Displaced {
    /// Re-seated into another slot.
    Reseated { day: DayId, block: BlockId },
    /// No slot available; the scene was unassigned.
    Unassigned { scene: SceneNumber },
    /// Custom text with nowhere to go is dropped.
    Discarded,
}

/// Result of a drop operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum DropOutcome {
    Completed {
        #[serde(skip_serializing_if = "Option::is_none")]
        displaced: Option<Displaced>,
    },
    Ignored { reason: DropRejection },
}

impl DropOutcome {
    fn ignored(reason: DropRejection) -> Self {
        DropOutcome::Ignored { reason }
    }

    /// Tables touched by this outcome.
    pub fn dirty(&self) -> Dirty {
        match self {
            DropOutcome::Completed { .. } => Dirty::ALL,
            DropOutcome::Ignored { .. } => Dirty::default(),
        }
    }
}

impl StripboardEngine {
    /// Apply a drag-and-drop edit.
    ///
    /// Incompatible payload/target pairs and locked days are ignored
    /// without error or mutation; unknown ids are hard errors.
    pub fn handle_drop(&mut self, source: DragSource, target: DropTarget) -> EngineResult<DropOutcome> {
        let target_pos = self.day_pos(target.day)?;
        if self.days[target_pos].is_locked {
            return Ok(DropOutcome::ignored(DropRejection::TargetDayLocked));
        }
        let target_block = self.days[target_pos]
            .block(target.block)
            .ok_or(EngineError::BlockNotFound {
                day: target.day,
                block: target.block,
            })?;
        if !target_block.is_slot() {
            return Ok(DropOutcome::ignored(DropRejection::IncompatibleKinds));
        }

        match source {
            DragSource::Pool { scene } => self.drop_from_pool(scene, target, target_pos),
            DragSource::Block { day, block } => {
                let source_pos = self.day_pos(day)?;
                if self.days[source_pos].is_locked {
                    return Ok(DropOutcome::ignored(DropRejection::SourceDayLocked));
                }
                if block == target.block {
                    return Ok(DropOutcome::Completed { displaced: None });
                }
                let source_kind = self.days[source_pos]
                    .block(block)
                    .map(|b| b.kind.clone())
                    .ok_or(EngineError::BlockNotFound { day, block })?;

                match source_kind {
                    BlockKind::Lunch => self.swap_lunch_block(source_pos, block, target_pos, target.block),
                    BlockKind::EndOfDay => Ok(DropOutcome::ignored(DropRejection::IncompatibleKinds)),
                    BlockKind::Slot(None) => Ok(DropOutcome::ignored(DropRejection::EmptySource)),
                    BlockKind::Slot(Some(_)) => {
                        self.drop_from_block(source_pos, block, target, target_pos)
                    }
                }
            }
        }
    }

    /// Pool drag: the payload is always a scene reference.
    fn drop_from_pool(
        &mut self,
        scene: SceneNumber,
        target: DropTarget,
        target_pos: usize,
    ) -> EngineResult<DropOutcome> {
        if self.scene(&scene).is_none() {
            return Err(EngineError::SceneNotFound(scene));
        }

        // Uniqueness: clear any stale board placement of the dragged scene.
        let mut affected = self.strip_scene_from_blocks(&scene);
        affected.push(target_pos);
        let mut touched_scenes = vec![scene.clone()];

        let displaced_content = self.days[target_pos]
            .block_mut(target.block)
            .and_then(|b| b.replace_content(SlotContent::Scene(scene)));

        let displaced = match displaced_content {
            None => None,
            Some(content) => {
                if let SlotContent::Scene(number) = &content {
                    touched_scenes.push(number.clone());
                }
                // No source block to return to; the search stops at the
                // target day.
                let seat = self.days[target_pos].first_empty_slot();
                Some(self.seat_displaced(content, seat.map(|b| (target_pos, b)), &mut affected))
            }
        };

        self.finish_drop(&touched_scenes, &affected);
        Ok(DropOutcome::Completed { displaced })
    }

    /// Board drag: scene or custom content moves between slots.
    fn drop_from_block(
        &mut self,
        source_pos: usize,
        source_block: BlockId,
        target: DropTarget,
        target_pos: usize,
    ) -> EngineResult<DropOutcome> {
        let payload = match self.days[source_pos]
            .block_mut(source_block)
            .and_then(|b| b.take_content())
        {
            Some(content) => content,
            None => return Ok(DropOutcome::ignored(DropRejection::EmptySource)),
        };

        let mut affected = vec![source_pos, target_pos];
        let mut touched_scenes: Vec<SceneNumber> = Vec::new();
        if let SlotContent::Scene(number) = &payload {
            touched_scenes.push(number.clone());
        }

        let displaced_content = self.days[target_pos]
            .block_mut(target.block)
            .and_then(|b| b.replace_content(payload));

        let displaced = match displaced_content {
            None => None,
            Some(content) => {
                if let SlotContent::Scene(number) = &content {
                    touched_scenes.push(number.clone());
                }
                // (a) first empty slot in the target day,
                // (b) first empty slot in the source day (cross-day only),
                // (c) the block the dragged item vacated.
                let seat = self.days[target_pos]
                    .first_empty_slot()
                    .map(|b| (target_pos, b))
                    .or_else(|| {
                        (source_pos != target_pos)
                            .then(|| self.days[source_pos].first_empty_slot().map(|b| (source_pos, b)))
                            .flatten()
                    })
                    .or(Some((source_pos, source_block)));
                Some(self.seat_displaced(content, seat, &mut affected))
            }
        };

        self.finish_drop(&touched_scenes, &affected);
        Ok(DropOutcome::Completed { displaced })
    }

    /// Put displaced content into the chosen seat, or resolve it out of the
    /// board when there is none.
    fn seat_displaced(
        &mut self,
        content: SlotContent,
        seat: Option<(usize, BlockId)>,
        affected: &mut Vec<usize>,
    ) -> Displaced {
        match seat {
            Some((day_pos, block_id)) => {
                affected.push(day_pos);
                if let Some(block) = self.days[day_pos].block_mut(block_id) {
                    block.replace_content(content);
                }
                Displaced::Reseated {
                    day: self.days[day_pos].id,
                    block: block_id,
                }
            }
            None => match content {
                SlotContent::Scene(number) => {
                    if let Some(scene) = self.scene_mut(&number) {
                        scene.mark_unassigned();
                    }
                    index::remove_scene(&mut self.index, &number);
                    Displaced::Unassigned { scene: number }
                }
                SlotContent::Custom(text) => {
                    log::warn!("custom item {text:?} displaced with no free slot; discarding");
                    Displaced::Discarded
                }
            },
        }
    }

    /// Lunch repositioning: the whole block object trades places with the
    /// target block.
    fn swap_lunch_block(
        &mut self,
        source_pos: usize,
        source_block: BlockId,
        target_pos: usize,
        target_block: BlockId,
    ) -> EngineResult<DropOutcome> {
        let src_idx = self.days[source_pos]
            .block_position(source_block)
            .ok_or(EngineError::BlockNotFound {
                day: self.days[source_pos].id,
                block: source_block,
            })?;
        let tgt_idx = self.days[target_pos]
            .block_position(target_block)
            .ok_or(EngineError::BlockNotFound {
                day: self.days[target_pos].id,
                block: target_block,
            })?;

        let mut touched_scenes: Vec<SceneNumber> = Vec::new();
        if source_pos == target_pos {
            let day = &mut self.days[source_pos];
            if let Some(number) = day.blocks[tgt_idx].scene_number() {
                touched_scenes.push(number.clone());
            }
            day.blocks.swap(src_idx, tgt_idx);
        } else {
            // A cross-day swap carries the target slot (and any scene in
            // it) into the source day.
            let (low, high, low_idx, high_idx) = if source_pos < target_pos {
                (source_pos, target_pos, src_idx, tgt_idx)
            } else {
                (target_pos, source_pos, tgt_idx, src_idx)
            };
            let (head, tail) = self.days.split_at_mut(high);
            std::mem::swap(
                &mut head[low].blocks[low_idx],
                &mut tail[0].blocks[high_idx],
            );
            for pos in [source_pos, target_pos] {
                for block in &self.days[pos].blocks {
                    if let Some(number) = block.scene_number() {
                        touched_scenes.push(number.clone());
                    }
                }
            }
        }

        self.finish_drop(&touched_scenes, &[source_pos, target_pos]);
        Ok(DropOutcome::Completed { displaced: None })
    }

    /// Re-date every touched scene from the day that now owns it and apply
    /// the index protocol to the affected days, atomically with respect to
    /// the next operation.
    fn finish_drop(&mut self, touched_scenes: &[SceneNumber], affected: &[usize]) {
        for number in touched_scenes {
            let placement = self.days.iter().find_map(|day| {
                day.blocks
                    .iter()
                    .find(|b| b.scene_number() == Some(number))
                    .map(|b| (day.date, b.time.clone()))
            });
            if let Some((date, time)) = placement {
                if let Some(scene) = self.scene_mut(number) {
                    scene.mark_assigned(date, Some(time));
                }
            }
            index::remove_scene(&mut self.index, number);
        }

        let mut positions: Vec<usize> = affected.to_vec();
        positions.sort_unstable();
        positions.dedup();
        self.refresh_index_for(&positions);
    }
}
