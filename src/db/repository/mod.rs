//! Repository trait for schedule persistence.
//!
//! The engine treats persistence as an external collaborator: three async
//! write operations (one per logical table) called after the corresponding
//! in-memory mutation, and three async read operations used at session
//! start and on reconciliation. Implementations must be safe to call from
//! concurrent tasks.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{Scene, ShootingDay};
use crate::engine::ScheduledIndex;

/// Async persistence seam for the three schedule tables.
#[async_trait]
pub trait ProductionRepository: Send + Sync {
    /// Load the scene record store.
    async fn load_scenes(&self) -> RepositoryResult<Vec<Scene>>;

    /// Load the shooting day collection.
    async fn load_shooting_days(&self) -> RepositoryResult<Vec<ShootingDay>>;

    /// Load the materialized scheduled-date index.
    async fn load_scheduled_index(&self) -> RepositoryResult<ScheduledIndex>;

    /// Replace the persisted scene record store.
    async fn sync_scenes(&self, scenes: &[Scene]) -> RepositoryResult<()>;

    /// Replace the persisted shooting day collection.
    async fn sync_shooting_days(&self, days: &[ShootingDay]) -> RepositoryResult<()>;

    /// Replace the persisted scheduled-date index.
    async fn sync_scheduled_index(&self, index: &ScheduledIndex) -> RepositoryResult<()>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
