//! Scheduled-date index maintenance.
//!
//! The index is a materialized `date -> scene summaries` mapping, mutated
//! independently of the day collection. Every date-affecting operation must
//! follow the same sequence: remove the scene from **every** bucket (not
//! just the presumed old one), then materialize the new date's bucket in
//! block order. [`reconcile`] rebuilds the whole index from the day
//! collection and is the consistency oracle for the incremental protocol.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::api::{Scene, SceneNumber, SceneSummary, ShootingDay};

/// Materialized mapping from shoot date to scene summaries in block order.
pub type ScheduledIndex = BTreeMap<NaiveDate, Vec<SceneSummary>>;

/// Remove a scene from every bucket it appears in, deleting buckets left
/// empty. Scanning all buckets is deliberate: it also clears entries left
/// behind by earlier drift.
pub fn remove_scene(index: &mut ScheduledIndex, number: &SceneNumber) {
    index
        .values_mut()
        .for_each(|bucket| bucket.retain(|summary| &summary.number != number));
    index.retain(|_, bucket| !bucket.is_empty());
}

/// Rebuild the bucket for one day from its blocks, in block order. An empty
/// result removes the bucket entirely.
pub fn refresh_day(index: &mut ScheduledIndex, day: &ShootingDay, scenes: &[Scene]) {
    let bucket = bucket_for_day(day, scenes);
    if bucket.is_empty() {
        index.remove(&day.date);
    } else {
        index.insert(day.date, bucket);
    }
}

/// Clear the index and rebuild it from the day collection.
///
/// Safe to invoke at any time; the output is identical to what the
/// incremental protocol would have produced had every operation applied it
/// correctly.
pub fn reconcile(days: &[ShootingDay], scenes: &[Scene]) -> ScheduledIndex {
    let mut index = ScheduledIndex::new();
    for day in days {
        refresh_day(&mut index, day, scenes);
    }
    index
}

fn bucket_for_day(day: &ShootingDay, scenes: &[Scene]) -> Vec<SceneSummary> {
    // A shot day's blocks keep their scene references for display, but its
    // scenes are no longer scheduled and must not appear in the index.
    if day.is_shot {
        return Vec::new();
    }
    day.scheduled_scene_numbers()
        .into_iter()
        .filter_map(|(number, time)| {
            scenes
                .iter()
                .find(|s| s.number == number)
                .map(|scene| SceneSummary::for_slot(scene, Some(time)))
        })
        .collect()
}
