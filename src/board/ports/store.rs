//! Persistence port for task records.

use crate::board::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Key-value task persistence keyed by task id.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Finds a task by identifier, including soft-deleted ones.
    ///
    /// Returns `None` when the task does not exist.
    async fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Inserts the task, or replaces it when the id is already stored.
    ///
    /// Returns the stored task's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the write fails.
    async fn put(&self, task: &Task) -> TaskStoreResult<TaskId>;

    /// Soft-deletes a task by setting its removed flag.
    ///
    /// Deleting an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the write fails.
    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;

    /// Returns every task that has not been soft-deleted.
    async fn get_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Inserts or replaces several tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the write fails.
    async fn bulk_put(&self, tasks: &[Task]) -> TaskStoreResult<()>;

    /// Counts tasks that have not been soft-deleted.
    async fn count(&self) -> TaskStoreResult<usize>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
