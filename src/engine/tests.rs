//! Scenario tests for the scheduling engine.

use chrono::NaiveDate;

use super::index;
use super::{
    DragSource, Displaced, DropOutcome, DropRejection, DropTarget, EngineError, SceneImport,
    StripboardEngine,
};
use crate::api::{BlockId, DayId, InteriorExterior, SceneNumber, SceneStatus, TimeOfDay};
use crate::models::{BlockKind, SceneMetadata, SlotContent};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn metadata(location: &str) -> SceneMetadata {
    SceneMetadata {
        location: location.to_string(),
        interior_exterior: InteriorExterior::Interior,
        time_of_day: TimeOfDay::Day,
        page_eighths: 6,
    }
}

fn import(numbers: &[&str]) -> Vec<SceneImport> {
    numbers
        .iter()
        .map(|n| SceneImport {
            number: (*n).into(),
            metadata: metadata("STAGE 4"),
        })
        .collect()
}

/// Engine with the given scenes and one shooting day per date.
fn engine_with(numbers: &[&str], dates: &[&str]) -> StripboardEngine {
    let mut engine = StripboardEngine::new();
    engine.import_scenes(import(numbers));
    for (i, d) in dates.iter().enumerate() {
        if i == 0 {
            engine.add_shooting_day(date(d));
        } else {
            let (id, _) = engine.add_shooting_day(date(d));
            engine.update_day_date(id, date(d)).unwrap();
        }
    }
    engine
}

fn day_id(engine: &StripboardEngine, pos: usize) -> DayId {
    engine.days()[pos].id
}

/// Scene-capable slot ids of a day, in block order.
fn slot_ids(engine: &StripboardEngine, pos: usize) -> Vec<BlockId> {
    engine.days()[pos]
        .blocks
        .iter()
        .filter(|b| b.is_slot())
        .map(|b| b.id)
        .collect()
}

fn bucket_numbers(engine: &StripboardEngine, d: &str) -> Vec<SceneNumber> {
    engine
        .index()
        .get(&date(d))
        .map(|bucket| bucket.iter().map(|s| s.number.clone()).collect())
        .unwrap_or_default()
}

fn assert_index_matches_oracle(engine: &StripboardEngine) {
    assert_eq!(
        engine.index(),
        &index::reconcile(engine.days(), engine.scenes()),
        "incrementally maintained index must equal the reconciliation oracle"
    );
}

/// No scene number may occupy more than one slot across the whole board.
fn assert_unique_placement(engine: &StripboardEngine) {
    let mut seen = std::collections::HashSet::new();
    for day in engine.days() {
        for block in &day.blocks {
            if let Some(number) = block.scene_number() {
                assert!(
                    seen.insert(number.clone()),
                    "scene {number} occupies more than one block"
                );
            }
        }
    }
}

// ==================== Assignment & displacement ====================

#[test]
fn test_assign_then_pool_drop_displaces_sitting_scene() {
    let mut engine = engine_with(&["7", "12"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);

    engine.assign_scene(&"12".into(), day, slots[2]).unwrap();
    let scene = engine.scene(&"12".into()).unwrap();
    assert_eq!(scene.status, SceneStatus::Scheduled);
    assert_eq!(scene.scheduled_date, Some(date("2026-09-01")));
    assert_eq!(scene.scheduled_time.as_deref(), Some("8:30 AM"));
    assert_eq!(bucket_numbers(&engine, "2026-09-01"), vec!["12".into()]);

    // Drop scene 7 from the pool onto the occupied slot: 12 is displaced
    // to the first empty slot, 7 takes the target.
    let outcome = engine
        .handle_drop(
            DragSource::Pool { scene: "7".into() },
            DropTarget {
                day,
                block: slots[2],
            },
        )
        .unwrap();
    assert!(matches!(
        outcome,
        DropOutcome::Completed {
            displaced: Some(Displaced::Reseated { .. })
        }
    ));

    let day_state = engine.day(day).unwrap();
    assert_eq!(day_state.block(slots[0]).unwrap().scene_number(), Some(&"12".into()));
    assert_eq!(day_state.block(slots[2]).unwrap().scene_number(), Some(&"7".into()));

    // Bucket order reflects block order.
    assert_eq!(
        bucket_numbers(&engine, "2026-09-01"),
        vec![SceneNumber::from("12"), SceneNumber::from("7")]
    );
    assert_unique_placement(&engine);
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_cross_day_move_updates_date_and_index() {
    let mut engine = engine_with(&["5"], &["2026-09-01", "2026-09-02"]);
    let (day1, day2) = (day_id(&engine, 0), day_id(&engine, 1));
    let slots1 = slot_ids(&engine, 0);
    let slots2 = slot_ids(&engine, 1);

    engine.assign_scene(&"5".into(), day1, slots1[0]).unwrap();
    engine
        .handle_drop(
            DragSource::Block {
                day: day1,
                block: slots1[0],
            },
            DropTarget {
                day: day2,
                block: slots2[3],
            },
        )
        .unwrap();

    let scene = engine.scene(&"5".into()).unwrap();
    assert_eq!(scene.scheduled_date, Some(date("2026-09-02")));
    assert_eq!(scene.scheduled_time.as_deref(), Some("8:45 AM"));
    assert!(bucket_numbers(&engine, "2026-09-01").is_empty());
    assert_eq!(bucket_numbers(&engine, "2026-09-02"), vec!["5".into()]);
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_displacement_falls_back_to_source_day_then_vacated_block() {
    let numbers: Vec<String> = (1..=18).map(|n| n.to_string()).collect();
    let number_refs: Vec<&str> = numbers.iter().map(|s| s.as_str()).collect();
    let mut engine = engine_with(&number_refs, &["2026-09-01", "2026-09-02"]);
    let (day1, day2) = (day_id(&engine, 0), day_id(&engine, 1));
    let slots1 = slot_ids(&engine, 0);
    let slots2 = slot_ids(&engine, 1);

    // Fill every slot of day 2; day 1 holds one scene with seven empties.
    for (i, slot) in slots2.iter().enumerate() {
        engine
            .assign_scene(&numbers[i].as_str().into(), day2, *slot)
            .unwrap();
    }
    engine
        .assign_scene(&"17".into(), day1, slots1[0])
        .unwrap();

    // Target day full: the displaced scene lands in the source day.
    engine
        .handle_drop(
            DragSource::Block {
                day: day1,
                block: slots1[0],
            },
            DropTarget {
                day: day2,
                block: slots2[0],
            },
        )
        .unwrap();
    let displaced_home = engine.scene(&"1".into()).unwrap();
    assert_eq!(displaced_home.scheduled_date, Some(date("2026-09-01")));
    assert_unique_placement(&engine);

    // Now fill day 1 completely and move a scene between two full days:
    // the displaced scene returns to the vacated block.
    let empty_slots: Vec<BlockId> = engine
        .day(day1)
        .unwrap()
        .blocks
        .iter()
        .filter(|b| b.is_empty_slot())
        .map(|b| b.id)
        .collect();
    let mut next = 9; // scenes 10..=16 are still unscheduled
    for slot in empty_slots {
        next += 1;
        engine
            .assign_scene(&numbers[next - 1].as_str().into(), day1, slot)
            .unwrap();
    }
    let moved = engine
        .day(day1)
        .unwrap()
        .block(slots1[1])
        .unwrap()
        .scene_number()
        .cloned()
        .unwrap();
    let target_scene = engine
        .day(day2)
        .unwrap()
        .block(slots2[4])
        .unwrap()
        .scene_number()
        .cloned()
        .unwrap();

    let outcome = engine
        .handle_drop(
            DragSource::Block {
                day: day1,
                block: slots1[1],
            },
            DropTarget {
                day: day2,
                block: slots2[4],
            },
        )
        .unwrap();

    assert_eq!(
        engine
            .day(day2)
            .unwrap()
            .block(slots2[4])
            .unwrap()
            .scene_number(),
        Some(&moved)
    );
    assert_eq!(
        engine
            .day(day1)
            .unwrap()
            .block(slots1[1])
            .unwrap()
            .scene_number(),
        Some(&target_scene),
        "displaced scene must return to the vacated block"
    );
    assert!(matches!(
        outcome,
        DropOutcome::Completed {
            displaced: Some(Displaced::Reseated { .. })
        }
    ));
    assert_unique_placement(&engine);
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_pool_drop_on_full_day_unassigns_displaced_scene() {
    let numbers: Vec<String> = (1..=9).map(|n| n.to_string()).collect();
    let number_refs: Vec<&str> = numbers.iter().map(|s| s.as_str()).collect();
    let mut engine = engine_with(&number_refs, &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);

    for (i, slot) in slots.iter().enumerate() {
        engine
            .assign_scene(&numbers[i].as_str().into(), day, *slot)
            .unwrap();
    }

    let outcome = engine
        .handle_drop(
            DragSource::Pool { scene: "9".into() },
            DropTarget {
                day,
                block: slots[0],
            },
        )
        .unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Completed {
            displaced: Some(Displaced::Unassigned { scene: "1".into() })
        }
    );
    let unassigned = engine.scene(&"1".into()).unwrap();
    assert_eq!(unassigned.status, SceneStatus::NotScheduled);
    assert_eq!(unassigned.scheduled_date, None);
    assert_unique_placement(&engine);
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_incompatible_and_locked_drops_are_silently_ignored() {
    let mut engine = engine_with(&["3"], &["2026-09-01", "2026-09-02"]);
    let (day1, day2) = (day_id(&engine, 0), day_id(&engine, 1));
    let lunch = engine.days()[0]
        .blocks
        .iter()
        .find(|b| b.kind == BlockKind::Lunch)
        .unwrap()
        .id;
    let slots2 = slot_ids(&engine, 1);

    // Scene onto the lunch block: incompatible kinds.
    let outcome = engine
        .handle_drop(
            DragSource::Pool { scene: "3".into() },
            DropTarget { day: day1, block: lunch },
        )
        .unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Ignored {
            reason: DropRejection::IncompatibleKinds
        }
    );

    // Locked target day: rejected without mutation.
    engine.lock_day(day2).unwrap();
    let before = engine.clone();
    let outcome = engine
        .handle_drop(
            DragSource::Pool { scene: "3".into() },
            DropTarget {
                day: day2,
                block: slots2[0],
            },
        )
        .unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Ignored {
            reason: DropRejection::TargetDayLocked
        }
    );
    assert_eq!(engine.days(), before.days());
    assert_eq!(engine.scenes(), before.scenes());
}

#[test]
fn test_lunch_swap_moves_whole_block_object() {
    let mut engine = engine_with(&[], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let lunch = engine.days()[0]
        .blocks
        .iter()
        .find(|b| b.kind == BlockKind::Lunch)
        .unwrap()
        .id;
    let slots = slot_ids(&engine, 0);
    let target = slots[0];
    let lunch_pos = engine.days()[0].block_position(lunch).unwrap();
    let target_pos = engine.days()[0].block_position(target).unwrap();

    engine
        .handle_drop(
            DragSource::Block { day, block: lunch },
            DropTarget { day, block: target },
        )
        .unwrap();

    let day_state = engine.day(day).unwrap();
    // The block objects traded places: same ids, swapped positions.
    assert_eq!(day_state.blocks[target_pos].id, lunch);
    assert_eq!(day_state.blocks[target_pos].kind, BlockKind::Lunch);
    assert_eq!(day_state.blocks[lunch_pos].id, target);
    assert!(day_state.blocks[lunch_pos].is_slot());
}

// ==================== Status lifecycle round trips ====================

#[test]
fn test_assign_unassign_round_trip() {
    let mut engine = engine_with(&["12"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);

    engine.assign_scene(&"12".into(), day, slots[0]).unwrap();
    engine.unassign_scene(&"12".into());

    let scene = engine.scene(&"12".into()).unwrap();
    assert_eq!(scene.status, SceneStatus::NotScheduled);
    assert_eq!(scene.scheduled_date, None);
    assert!(!engine.day(day).unwrap().holds_scene(&"12".into()));
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_reshoot_scene_keeps_label_through_round_trip() {
    let mut engine = engine_with(&["29A"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);

    engine
        .set_scene_status(&"29A".into(), SceneStatus::Reshoot)
        .unwrap();
    engine.assign_scene(&"29A".into(), day, slots[0]).unwrap();
    assert_eq!(
        engine.scene(&"29A".into()).unwrap().status,
        SceneStatus::Reshoot,
        "assignment must not overwrite the reshoot label"
    );

    engine.unassign_scene(&"29A".into());
    let scene = engine.scene(&"29A".into()).unwrap();
    assert_eq!(scene.status, SceneStatus::Reshoot);
    assert_eq!(scene.scheduled_date, None);
}

#[test]
fn test_unassign_unknown_scene_is_a_no_op() {
    let mut engine = engine_with(&["1"], &["2026-09-01"]);
    let before = engine.clone();
    let dirty = engine.unassign_scene(&"99".into());
    assert!(!dirty.any());
    assert_eq!(engine.scenes(), before.scenes());
}

#[test]
fn test_reset_scene_strips_every_reference() {
    let mut engine = engine_with(&["8"], &["2026-09-01", "2026-09-02"]);
    let day1 = day_id(&engine, 0);
    let slots1 = slot_ids(&engine, 0);
    engine.assign_scene(&"8".into(), day1, slots1[0]).unwrap();

    engine.reset_scene(&"8".into());
    let scene = engine.scene(&"8".into()).unwrap();
    assert_eq!(scene.status, SceneStatus::NotScheduled);
    assert!(engine.days().iter().all(|d| !d.holds_scene(&"8".into())));
    assert!(engine.index().is_empty());
}

// ==================== Lock / unlock ====================

#[test]
fn test_lock_unlock_round_trip_restores_schedule() {
    let mut engine = engine_with(&["1", "2"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);
    engine.assign_scene(&"1".into(), day, slots[0]).unwrap();
    engine.assign_scene(&"2".into(), day, slots[3]).unwrap();
    let before_lock = bucket_numbers(&engine, "2026-09-01");

    engine.lock_day(day).unwrap();
    {
        let day_state = engine.day(day).unwrap();
        assert!(day_state.is_locked && day_state.is_shot && day_state.is_collapsed);
        // Blocks keep their scene references for display.
        assert!(day_state.holds_scene(&"1".into()));
    }
    for number in ["1", "2"] {
        let scene = engine.scene(&number.into()).unwrap();
        assert_eq!(scene.status, SceneStatus::Shot);
        assert_eq!(scene.scheduled_date, None);
    }
    assert!(bucket_numbers(&engine, "2026-09-01").is_empty());

    engine.unlock_day(day).unwrap();
    let day_state = engine.day(day).unwrap();
    assert!(!day_state.is_locked && !day_state.is_shot);
    for number in ["1", "2"] {
        let scene = engine.scene(&number.into()).unwrap();
        assert_eq!(scene.status, SceneStatus::Scheduled);
        assert_eq!(scene.scheduled_date, Some(date("2026-09-01")));
    }
    assert_eq!(bucket_numbers(&engine, "2026-09-01"), before_lock);
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_lock_day_empties_index_bucket() {
    let mut engine = engine_with(&["1", "2"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);
    engine.assign_scene(&"1".into(), day, slots[0]).unwrap();
    engine.assign_scene(&"2".into(), day, slots[1]).unwrap();

    engine.lock_day(day).unwrap();

    // The blocks keep their scene references, but the date's bucket is
    // gone: shot scenes are no longer scheduled.
    assert!(engine.day(day).unwrap().holds_scene(&"1".into()));
    assert!(!engine.index().contains_key(&date("2026-09-01")));
    assert_index_matches_oracle(&engine);
}

// ==================== Day lifecycle ====================

#[test]
fn test_add_shooting_day_appends_next_calendar_day() {
    let mut engine = StripboardEngine::new();
    let (first, _) = engine.add_shooting_day(date("2026-09-01"));
    assert_eq!(engine.day(first).unwrap().date, date("2026-09-01"));
    assert_eq!(engine.day(first).unwrap().day_number, 1);

    let (second, _) = engine.add_shooting_day(date("2026-12-31"));
    assert_eq!(engine.day(second).unwrap().date, date("2026-09-02"));
    assert_eq!(engine.day(second).unwrap().day_number, 2);
}

#[test]
fn test_duplicate_day_date_rejected_naming_conflicting_day() {
    let mut engine = engine_with(
        &[],
        &["2026-09-01", "2026-09-02", "2026-09-03", "2026-09-04", "2026-09-05"],
    );
    let day2 = day_id(&engine, 1);
    let before = engine.clone();

    let err = engine
        .update_day_date(day2, date("2026-09-05"))
        .unwrap_err();
    match err {
        EngineError::DuplicateDayDate {
            existing_day_number,
            ..
        } => assert_eq!(existing_day_number, 5),
        other => panic!("expected DuplicateDayDate, got {other:?}"),
    }
    assert_eq!(engine.days(), before.days());
}

#[test]
fn test_date_edit_on_locked_day_is_rejected() {
    let mut engine = engine_with(&["1"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);
    engine.assign_scene(&"1".into(), day, slots[0]).unwrap();
    engine.lock_day(day).unwrap();
    let before = engine.clone();

    let err = engine.update_day_date(day, date("2026-09-20")).unwrap_err();
    assert!(matches!(err, EngineError::DayLocked { day_number: 1 }));
    assert_eq!(engine.days(), before.days());

    // Shot scenes keep a cleared date; a date edit must not revive them.
    let scene = engine.scene(&"1".into()).unwrap();
    assert_eq!(scene.status, SceneStatus::Shot);
    assert_eq!(scene.scheduled_date, None);
    assert!(engine.index().is_empty());
}

#[test]
fn test_date_edit_resorts_renumbers_and_rehomes_index() {
    let mut engine = engine_with(&["4"], &["2026-09-01", "2026-09-02"]);
    let day1 = day_id(&engine, 0);
    let slots1 = slot_ids(&engine, 0);
    engine.assign_scene(&"4".into(), day1, slots1[0]).unwrap();

    // Move day 1 after day 2.
    engine.update_day_date(day1, date("2026-09-10")).unwrap();

    let days = engine.days();
    assert_eq!(days[0].date, date("2026-09-02"));
    assert_eq!(days[0].day_number, 1);
    assert_eq!(days[1].date, date("2026-09-10"));
    assert_eq!(days[1].day_number, 2);

    let scene = engine.scene(&"4".into()).unwrap();
    assert_eq!(scene.scheduled_date, Some(date("2026-09-10")));
    assert!(bucket_numbers(&engine, "2026-09-01").is_empty());
    assert_eq!(bucket_numbers(&engine, "2026-09-10"), vec!["4".into()]);
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_block_removal_floor() {
    let mut engine = engine_with(&[], &["2026-09-01"]);
    let day = day_id(&engine, 0);

    // Remove slots down to the floor of two.
    loop {
        let day_state = engine.day(day).unwrap();
        if day_state.slot_count() <= super::MIN_SLOT_BLOCKS {
            break;
        }
        let slot = day_state.first_empty_slot().unwrap();
        engine.remove_block(day, slot).unwrap();
    }

    let before = engine.clone();
    let last_slot = engine.day(day).unwrap().first_empty_slot().unwrap();
    let err = engine.remove_block(day, last_slot).unwrap_err();
    assert!(matches!(err, EngineError::BlockFloor { day_number: 1 }));
    assert_eq!(engine.days(), before.days());
}

#[test]
fn test_remove_block_unassigns_its_scene() {
    let mut engine = engine_with(&["6"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);
    engine.assign_scene(&"6".into(), day, slots[0]).unwrap();

    engine.remove_block(day, slots[0]).unwrap();
    let scene = engine.scene(&"6".into()).unwrap();
    assert_eq!(scene.status, SceneStatus::NotScheduled);
    assert_eq!(scene.scheduled_date, None);
    assert!(engine.index().is_empty());
}

#[test]
fn test_end_of_day_sentinel_cannot_be_removed() {
    let mut engine = engine_with(&[], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let sentinel = engine.days()[0]
        .blocks
        .iter()
        .find(|b| b.kind == BlockKind::EndOfDay)
        .unwrap()
        .id;
    assert!(matches!(
        engine.remove_block(day, sentinel),
        Err(EngineError::EndOfDayImmutable)
    ));
}

#[test]
fn test_add_block_inserts_before_sentinel() {
    let mut engine = engine_with(&[], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let (block, _) = engine.add_block(day, "3:00 PM", None).unwrap();

    let day_state = engine.day(day).unwrap();
    let pos = day_state.block_position(block).unwrap();
    assert_eq!(pos, day_state.blocks.len() - 2);
    assert_eq!(day_state.blocks.last().unwrap().kind, BlockKind::EndOfDay);
    assert_eq!(day_state.slot_count(), 9);
}

// ==================== Reconciliation oracle ====================

#[test]
fn test_reconcile_repairs_drifted_index() {
    let mut engine = engine_with(&["1", "2"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);
    engine.assign_scene(&"1".into(), day, slots[0]).unwrap();
    engine.assign_scene(&"2".into(), day, slots[1]).unwrap();

    // Corrupt the index the way a forgotten update would.
    engine.index.clear();
    engine
        .index
        .insert(date("2026-12-25"), vec![]);

    engine.reconcile();
    assert_eq!(
        bucket_numbers(&engine, "2026-09-01"),
        vec![SceneNumber::from("1"), SceneNumber::from("2")]
    );
    assert!(!engine.index().contains_key(&date("2026-12-25")));
    assert_index_matches_oracle(&engine);
}

#[test]
fn test_index_stays_consistent_through_operation_sequence() {
    let mut engine = engine_with(
        &["1", "2", "3", "4", "5"],
        &["2026-09-01", "2026-09-02", "2026-09-03"],
    );
    let ids: Vec<DayId> = (0..3).map(|i| day_id(&engine, i)).collect();
    let slots0 = slot_ids(&engine, 0);
    let slots1 = slot_ids(&engine, 1);

    engine.assign_scene(&"1".into(), ids[0], slots0[0]).unwrap();
    engine.assign_scene(&"2".into(), ids[0], slots0[1]).unwrap();
    engine.assign_scene(&"3".into(), ids[1], slots1[0]).unwrap();
    engine
        .handle_drop(
            DragSource::Block {
                day: ids[0],
                block: slots0[1],
            },
            DropTarget {
                day: ids[1],
                block: slots1[0],
            },
        )
        .unwrap();
    engine.unassign_scene(&"1".into());
    engine.update_day_date(ids[1], date("2026-09-09")).unwrap();
    engine.lock_day(ids[2]).unwrap();
    engine.unlock_day(ids[2]).unwrap();

    assert_unique_placement(&engine);
    assert_index_matches_oracle(&engine);
}

// ==================== Pool interaction ====================

#[test]
fn test_custom_item_can_be_displaced() {
    let mut engine = engine_with(&["1"], &["2026-09-01"]);
    let day = day_id(&engine, 0);
    let slots = slot_ids(&engine, 0);

    // Seed a custom item by hand the way a board edit would.
    engine.days[0]
        .block_mut(slots[2])
        .unwrap()
        .replace_content(SlotContent::Custom("Stunt rehearsal".to_string()));

    engine
        .handle_drop(
            DragSource::Pool { scene: "1".into() },
            DropTarget {
                day,
                block: slots[2],
            },
        )
        .unwrap();

    let day_state = engine.day(day).unwrap();
    assert_eq!(day_state.block(slots[2]).unwrap().scene_number(), Some(&"1".into()));
    assert_eq!(
        day_state.block(slots[0]).unwrap().content(),
        Some(&SlotContent::Custom("Stunt rehearsal".to_string()))
    );
    assert_index_matches_oracle(&engine);
}
