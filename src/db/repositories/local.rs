//! In-memory repository for unit testing and local development.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::super::repository::{ProductionRepository, RepositoryResult};
use crate::api::{Scene, ShootingDay};
use crate::engine::ScheduledIndex;

/// In-memory implementation of [`ProductionRepository`].
///
/// Holds one snapshot per logical table behind an `RwLock`. Writes replace
/// the whole snapshot, matching the sync contract of the external store.
#[derive(Default)]
pub struct LocalRepository {
    scenes: RwLock<Vec<Scene>>,
    days: RwLock<Vec<ShootingDay>>,
    index: RwLock<ScheduledIndex>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with initial state (test helper).
    pub fn with_state(scenes: Vec<Scene>, days: Vec<ShootingDay>, index: ScheduledIndex) -> Self {
        Self {
            scenes: RwLock::new(scenes),
            days: RwLock::new(days),
            index: RwLock::new(index),
        }
    }
}

#[async_trait]
impl ProductionRepository for LocalRepository {
    async fn load_scenes(&self) -> RepositoryResult<Vec<Scene>> {
        Ok(self.scenes.read().clone())
    }

    async fn load_shooting_days(&self) -> RepositoryResult<Vec<ShootingDay>> {
        Ok(self.days.read().clone())
    }

    async fn load_scheduled_index(&self) -> RepositoryResult<ScheduledIndex> {
        Ok(self.index.read().clone())
    }

    async fn sync_scenes(&self, scenes: &[Scene]) -> RepositoryResult<()> {
        *self.scenes.write() = scenes.to_vec();
        Ok(())
    }

    async fn sync_shooting_days(&self, days: &[ShootingDay]) -> RepositoryResult<()> {
        *self.days.write() = days.to_vec();
        Ok(())
    }

    async fn sync_scheduled_index(&self, index: &ScheduledIndex) -> RepositoryResult<()> {
        *self.index.write() = index.clone();
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
