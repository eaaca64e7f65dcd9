//! In-memory task store for tests and embedders without durable storage.

use async_trait::async_trait;
use indexmap::IndexMap;
use mockable::{Clock, DefaultClock};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Records are kept in insertion order so `get_all` is deterministic.
pub struct InMemoryTaskStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    tasks: Arc<RwLock<IndexMap<TaskId, Task>>>,
    writes: Arc<AtomicUsize>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            writes: Arc::clone(&self.writes),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> std::fmt::Debug for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTaskStore")
            .field("tasks", &self.tasks)
            .field("writes", &self.writes)
            .finish_non_exhaustive()
    }
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store that stamps soft deletes with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(IndexMap::new())),
            writes: Arc::new(AtomicUsize::new(0)),
            clock,
        }
    }

    /// Seeds the store with `tasks` when it holds no records yet.
    ///
    /// Seeding does not count as a write. Returns whether the seed was
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn seed_if_empty(&self, tasks: impl IntoIterator<Item = Task>) -> TaskStoreResult<bool> {
        let mut state = self.tasks.write().map_err(poisoned)?;
        if !state.is_empty() {
            return Ok(false);
        }
        state.extend(tasks.into_iter().map(|task| (task.id().clone(), task)));
        Ok(true)
    }

    /// Returns how many write operations (`put`, `bulk_put`, `delete`) the
    /// store has served.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.tasks.read().map_err(poisoned)?;
        Ok(state.get(id).cloned())
    }

    async fn put(&self, task: &Task) -> TaskStoreResult<TaskId> {
        let mut state = self.tasks.write().map_err(poisoned)?;
        self.record_write();
        state.insert(task.id().clone(), task.clone());
        Ok(task.id().clone())
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.tasks.write().map_err(poisoned)?;
        self.record_write();
        if let Some(task) = state.get_mut(id) {
            task.mark_removed(&*self.clock);
        }
        Ok(())
    }

    async fn get_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.tasks.read().map_err(poisoned)?;
        Ok(state
            .values()
            .filter(|task| !task.is_removed())
            .cloned()
            .collect())
    }

    async fn bulk_put(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let mut state = self.tasks.write().map_err(poisoned)?;
        self.record_write();
        for task in tasks {
            state.insert(task.id().clone(), task.clone());
        }
        Ok(())
    }

    async fn count(&self) -> TaskStoreResult<usize> {
        let state = self.tasks.read().map_err(poisoned)?;
        Ok(state.values().filter(|task| !task.is_removed()).count())
    }
}
