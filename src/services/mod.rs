//! Service layer for orchestration and persistence.
//!
//! Sits between the scheduling engine and the HTTP surface: the engine
//! mutates in memory, the service schedules the matching repository writes
//! and absorbs remote-change notifications.

pub mod production;
pub mod sync_guard;

pub use production::ProductionService;
pub use sync_guard::{ReloadDebouncer, SyncGuards, Table, TableSyncGuard};
