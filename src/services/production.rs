//! Production scheduling service.
//!
//! [`ProductionService`] wraps the in-memory [`StripboardEngine`] with the
//! persistence contract: every mutation completes synchronously in memory,
//! then the touched tables are written to the repository from a spawned
//! task. Writes are optimistic: a failed sync never rolls back in-memory
//! state; it is recorded in `last_sync_error` for the UI to surface.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::api::{BlockId, DayId, Scene, SceneNumber, SceneStatus, SceneSummary, ShootingDay};
use crate::db::{ProductionRepository, RepositoryResult, SyncSettings};
use crate::engine::{
    Dirty, DragSource, DropOutcome, DropTarget, EngineResult, PoolFilter, SceneImport,
    ScheduledIndex, StripboardEngine,
};

use super::sync_guard::{ReloadDebouncer, SyncGuards, Table};

struct ServiceInner {
    engine: RwLock<StripboardEngine>,
    repository: Arc<dyn ProductionRepository>,
    guards: Arc<SyncGuards>,
    debouncer: ReloadDebouncer,
    reload_debounce: Duration,
    last_sync_error: RwLock<Option<String>>,
}

/// Shared handle to the scheduling service. Cheap to clone.
#[derive(Clone)]
pub struct ProductionService {
    inner: Arc<ServiceInner>,
}

impl ProductionService {
    /// Create a service over an empty engine.
    pub fn new(repository: Arc<dyn ProductionRepository>, settings: SyncSettings) -> Self {
        Self::with_engine(repository, settings, StripboardEngine::new())
    }

    fn with_engine(
        repository: Arc<dyn ProductionRepository>,
        settings: SyncSettings,
        engine: StripboardEngine,
    ) -> Self {
        Self {
            inner: Arc::new(ServiceInner {
                engine: RwLock::new(engine),
                repository,
                guards: Arc::new(SyncGuards::default()),
                debouncer: ReloadDebouncer::default(),
                reload_debounce: settings.reload_debounce(),
                last_sync_error: RwLock::new(None),
            }),
        }
    }

    /// Create a service hydrated from persisted state.
    pub async fn load(
        repository: Arc<dyn ProductionRepository>,
        settings: SyncSettings,
    ) -> RepositoryResult<Self> {
        let scenes = repository.load_scenes().await?;
        let days = repository.load_shooting_days().await?;
        let index = repository.load_scheduled_index().await?;
        let engine = StripboardEngine::from_parts(scenes, days, index);
        Ok(Self::with_engine(repository, settings, engine))
    }

    // ==================== Read surface ====================

    pub fn scenes(&self) -> Vec<Scene> {
        self.inner.engine.read().scenes().to_vec()
    }

    pub fn days(&self) -> Vec<ShootingDay> {
        self.inner.engine.read().days().to_vec()
    }

    pub fn day(&self, id: DayId) -> Option<ShootingDay> {
        self.inner.engine.read().day(id).cloned()
    }

    pub fn scene(&self, number: &SceneNumber) -> Option<Scene> {
        self.inner.engine.read().scene(number).cloned()
    }

    pub fn scheduled_index(&self) -> ScheduledIndex {
        self.inner.engine.read().index().clone()
    }

    pub fn scheduled_scenes(&self, date: NaiveDate) -> Vec<SceneSummary> {
        self.inner.engine.read().scheduled_scenes(date)
    }

    pub fn available_pool(&self, filter: &PoolFilter) -> Vec<Scene> {
        self.inner.engine.read().available_pool(filter)
    }

    /// The most recent persistence failure, if any write has failed since
    /// the last success.
    pub fn last_sync_error(&self) -> Option<String> {
        self.inner.last_sync_error.read().clone()
    }

    // ==================== Mutations ====================

    pub fn import_scenes(&self, imports: Vec<SceneImport>) -> Dirty {
        let dirty = self.inner.engine.write().import_scenes(imports);
        self.spawn_persist(dirty);
        dirty
    }

    pub fn set_scene_status(&self, number: &SceneNumber, status: SceneStatus) -> EngineResult<Dirty> {
        let dirty = self.inner.engine.write().set_scene_status(number, status)?;
        self.spawn_persist(dirty);
        Ok(dirty)
    }

    pub fn assign_scene(
        &self,
        number: &SceneNumber,
        day_id: DayId,
        block_id: BlockId,
    ) -> EngineResult<Dirty> {
        let dirty = self
            .inner
            .engine
            .write()
            .assign_scene(number, day_id, block_id)?;
        self.spawn_persist(dirty);
        Ok(dirty)
    }

    pub fn unassign_scene(&self, number: &SceneNumber) -> Dirty {
        let dirty = self.inner.engine.write().unassign_scene(number);
        self.spawn_persist(dirty);
        dirty
    }

    pub fn reset_scene(&self, number: &SceneNumber) -> Dirty {
        let dirty = self.inner.engine.write().reset_scene(number);
        self.spawn_persist(dirty);
        dirty
    }

    pub fn handle_drop(&self, source: DragSource, target: DropTarget) -> EngineResult<DropOutcome> {
        let outcome = self.inner.engine.write().handle_drop(source, target)?;
        self.spawn_persist(outcome.dirty());
        Ok(outcome)
    }

    pub fn add_shooting_day(&self, today: NaiveDate) -> (DayId, Dirty) {
        let (id, dirty) = self.inner.engine.write().add_shooting_day(today);
        self.spawn_persist(dirty);
        (id, dirty)
    }

    pub fn update_day_date(&self, day_id: DayId, new_date: NaiveDate) -> EngineResult<Dirty> {
        let dirty = self.inner.engine.write().update_day_date(day_id, new_date)?;
        self.spawn_persist(dirty);
        Ok(dirty)
    }

    pub fn add_block(
        &self,
        day_id: DayId,
        time: impl Into<String>,
        after: Option<BlockId>,
    ) -> EngineResult<(BlockId, Dirty)> {
        let (id, dirty) = self.inner.engine.write().add_block(day_id, time, after)?;
        self.spawn_persist(dirty);
        Ok((id, dirty))
    }

    pub fn remove_block(&self, day_id: DayId, block_id: BlockId) -> EngineResult<Dirty> {
        let dirty = self.inner.engine.write().remove_block(day_id, block_id)?;
        self.spawn_persist(dirty);
        Ok(dirty)
    }

    pub fn lock_day(&self, day_id: DayId) -> EngineResult<Dirty> {
        let dirty = self.inner.engine.write().lock_day(day_id)?;
        self.spawn_persist(dirty);
        Ok(dirty)
    }

    pub fn unlock_day(&self, day_id: DayId) -> EngineResult<Dirty> {
        let dirty = self.inner.engine.write().unlock_day(day_id)?;
        self.spawn_persist(dirty);
        Ok(dirty)
    }

    pub fn reconcile(&self) -> Dirty {
        let dirty = self.inner.engine.write().reconcile();
        self.spawn_persist(dirty);
        dirty
    }

    // ==================== Persistence ====================

    fn spawn_persist(&self, dirty: Dirty) {
        if !dirty.any() {
            return;
        }
        let service = self.clone();
        tokio::spawn(async move {
            service.sync_dirty(dirty).await;
        });
    }

    /// Write the given tables to the repository.
    ///
    /// Each table is written under its sync guard; the snapshot is taken at
    /// write time, so overlapping mutations coalesce into the latest state.
    pub async fn sync_dirty(&self, dirty: Dirty) {
        if dirty.scenes {
            let _guard = self.inner.guards.acquire(Table::Scenes);
            let snapshot = self.inner.engine.read().scenes().to_vec();
            let result = self.inner.repository.sync_scenes(&snapshot).await;
            self.record_sync_result(Table::Scenes, result);
        }
        if dirty.days {
            let _guard = self.inner.guards.acquire(Table::ShootingDays);
            let snapshot = self.inner.engine.read().days().to_vec();
            let result = self.inner.repository.sync_shooting_days(&snapshot).await;
            self.record_sync_result(Table::ShootingDays, result);
        }
        if dirty.index {
            let _guard = self.inner.guards.acquire(Table::ScheduledIndex);
            let snapshot = self.inner.engine.read().index().clone();
            let result = self.inner.repository.sync_scheduled_index(&snapshot).await;
            self.record_sync_result(Table::ScheduledIndex, result);
        }
    }

    /// Write all three tables. Used at shutdown and by tests that need
    /// deterministic persistence.
    pub async fn sync_all(&self) {
        self.sync_dirty(Dirty::ALL).await;
    }

    fn record_sync_result(&self, table: Table, result: RepositoryResult<()>) {
        match result {
            Ok(()) => {
                *self.inner.last_sync_error.write() = None;
            }
            Err(e) => {
                log::error!("failed to sync {table}: {e}");
                *self.inner.last_sync_error.write() = Some(format!("{table}: {e}"));
            }
        }
    }

    // ==================== Remote changes ====================

    /// React to a change notification from the backing store.
    ///
    /// Notifications for a table we are currently writing are echoes of our
    /// own sync and are dropped. Genuine remote changes schedule a reload
    /// after a quiet window; bursts collapse into one reload.
    pub fn handle_remote_change(&self, table: Table) {
        if self.inner.guards.is_syncing(table) {
            log::debug!("ignoring {table} change notification during local sync");
            return;
        }

        let generation = self.inner.debouncer.arm();
        let service = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(service.inner.reload_debounce).await;
            if !service.inner.debouncer.is_current(generation) {
                return;
            }
            if let Err(e) = service.reload().await {
                log::error!("failed to reload after remote change: {e}");
                *service.inner.last_sync_error.write() = Some(format!("reload: {e}"));
            }
        });
    }

    /// Replace in-memory state with the persisted snapshot.
    pub async fn reload(&self) -> RepositoryResult<()> {
        let scenes = self.inner.repository.load_scenes().await?;
        let days = self.inner.repository.load_shooting_days().await?;
        let index = self.inner.repository.load_scheduled_index().await?;
        *self.inner.engine.write() = StripboardEngine::from_parts(scenes, days, index);
        Ok(())
    }
}
