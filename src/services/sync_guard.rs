//! Sync coordination primitives for the service layer.
//!
//! Two small pieces: per-table guards that suppress change-notification
//! echoes while a local write is in flight, and a generation counter that
//! debounces remote-change reloads.

use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// The three logical persistence tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Scenes,
    ShootingDays,
    ScheduledIndex,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scenes => "scenes",
            Self::ShootingDays => "shooting_days",
            Self::ScheduledIndex => "scheduled_index",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-flight write counters, one per table.
///
/// A remote-change notification for a table with a nonzero counter is an
/// echo of our own write and must be ignored; reloading on it would clobber
/// newer in-memory state with the snapshot we just sent.
#[derive(Debug, Default)]
pub struct SyncGuards {
    scenes: AtomicUsize,
    days: AtomicUsize,
    index: AtomicUsize,
}

impl SyncGuards {
    fn counter(&self, table: Table) -> &AtomicUsize {
        match table {
            Table::Scenes => &self.scenes,
            Table::ShootingDays => &self.days,
            Table::ScheduledIndex => &self.index,
        }
    }

    /// Mark a write as in flight. The returned guard releases on drop,
    /// whether the write succeeds or fails.
    pub fn acquire(self: &Arc<Self>, table: Table) -> TableSyncGuard {
        self.counter(table).fetch_add(1, Ordering::SeqCst);
        TableSyncGuard {
            guards: Arc::clone(self),
            table,
        }
    }

    pub fn is_syncing(&self, table: Table) -> bool {
        self.counter(table).load(Ordering::SeqCst) > 0
    }
}

/// RAII guard for one in-flight table write.
pub struct TableSyncGuard {
    guards: Arc<SyncGuards>,
    table: Table,
}

impl Drop for TableSyncGuard {
    fn drop(&mut self) {
        self.guards.counter(self.table).fetch_sub(1, Ordering::SeqCst);
    }
}

/// Debounce state for remote-change reloads.
///
/// Every notification bumps the generation and starts a timer; when a timer
/// expires it reloads only if its generation is still the latest, so a burst
/// of notifications collapses into a single reload after the quiet window.
#[derive(Debug, Default)]
pub struct ReloadDebouncer {
    generation: AtomicU64,
}

impl ReloadDebouncer {
    /// Register a notification and return the generation its timer owns.
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether no newer notification superseded this generation.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
