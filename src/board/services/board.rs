//! Board controller wiring drag input events to the drag engine.

use super::{
    grouping::{group_tasks, sort_by_rank},
    placement::{Placement, resolve_drop, resolve_drop_target},
    reorder::reorder_within_column,
    session::DragSession,
    sync::{PendingWrites, TaskSynchronizer},
};
use crate::board::{
    domain::{
        BoardConfig, BoardDomainError, ColumnId, ColumnSet, ColumnTaskMap, ConfigKind, Task,
        TaskId,
    },
    ports::{ConfigLookup, ConfigLookupError, TaskStore, TaskStoreError},
};
use mockable::Clock;
use thiserror::Error;

/// Service-level errors for board operations outside the drag path.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Task store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Configuration lookup failed.
    #[error(transparent)]
    Lookup(#[from] ConfigLookupError),
    /// The lookup passed as the status table serves another table.
    #[error("expected a status lookup, got {0}")]
    WrongLookupKind(ConfigKind),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Derives the board columns from the status lookup.
///
/// # Errors
///
/// Returns [`BoardServiceError::WrongLookupKind`] when `lookup` is not a
/// status table, or [`BoardServiceError::Lookup`] when it fails.
pub async fn load_columns<L>(lookup: &L) -> BoardServiceResult<ColumnSet>
where
    L: ConfigLookup + ?Sized,
{
    if lookup.kind() != ConfigKind::Status {
        return Err(BoardServiceError::WrongLookupKind(lookup.kind()));
    }
    let statuses = lookup.get_all().await?;
    Ok(ColumnSet::from_statuses(&statuses))
}

/// Result of a drag-end event.
#[derive(Debug)]
pub enum DragOutcome {
    /// The gesture ended without a valid drop; canonical state is untouched.
    Cancelled,
    /// The task was reordered within its source column.
    Reordered {
        /// The rebuilt canonical list.
        tasks: Vec<Task>,
        /// Writes of the changed records.
        writes: PendingWrites,
    },
    /// The task moved to another column.
    Moved {
        /// The source column.
        from: ColumnId,
        /// The target column.
        to: ColumnId,
        /// The rebuilt canonical list.
        tasks: Vec<Task>,
        /// Writes of the changed records.
        writes: PendingWrites,
    },
}

impl DragOutcome {
    /// Returns the rebuilt canonical list, if the drop changed anything.
    #[must_use]
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            Self::Cancelled => None,
            Self::Reordered { tasks, .. } | Self::Moved { tasks, .. } => Some(tasks),
        }
    }

    /// Takes the pending writes out of the outcome.
    #[must_use]
    pub fn into_writes(self) -> PendingWrites {
        match self {
            Self::Cancelled => PendingWrites::none(),
            Self::Reordered { writes, .. } | Self::Moved { writes, .. } => writes,
        }
    }
}

/// Kanban board state driven by drag input events.
///
/// Holds the latest canonical list handed down by its owner, the live
/// per-column map derived from it, and the drag session. Every drag handler
/// runs synchronously; only store writes are deferred.
pub struct KanbanBoard<S, C>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync,
{
    config: BoardConfig,
    columns: ColumnSet,
    tasks: Vec<Task>,
    live: ColumnTaskMap,
    session: DragSession,
    dragged: Option<Task>,
    synchronizer: TaskSynchronizer<S, C>,
}

impl<S, C> KanbanBoard<S, C>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a board and groups `tasks` into `columns`.
    #[must_use]
    pub fn new(
        config: BoardConfig,
        columns: ColumnSet,
        tasks: Vec<Task>,
        synchronizer: TaskSynchronizer<S, C>,
    ) -> Self {
        let live = group_tasks(&tasks, &columns, config.unmapped_status_policy);
        Self {
            config,
            columns,
            tasks,
            live,
            session: DragSession::new(),
            dragged: None,
            synchronizer,
        }
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the board columns.
    #[must_use]
    pub const fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Returns the canonical list as last known to the board.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the live per-column map shown to the user.
    #[must_use]
    pub const fn live(&self) -> &ColumnTaskMap {
        &self.live
    }

    /// Returns the drag session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Replaces the canonical list and regroups.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.regroup();
    }

    /// Replaces the column set and regroups.
    pub fn set_columns(&mut self, columns: ColumnSet) {
        self.columns = columns;
        self.regroup();
    }

    fn regroup(&mut self) {
        self.live = group_tasks(
            &self.tasks,
            &self.columns,
            self.config.unmapped_status_policy,
        );
    }

    /// Starts a drag of `active_id`.
    ///
    /// Ids not shown on the board are ignored.
    pub fn on_drag_start(&mut self, active_id: &str) {
        let Some((column, index)) = self.live.locate(active_id) else {
            tracing::debug!(task_id = active_id, "drag start on unknown task ignored");
            return;
        };
        let source = column.clone();
        let Some(dragged) = self
            .live
            .column(&source)
            .and_then(|tasks| tasks.get(index))
            .cloned()
        else {
            return;
        };
        self.session.start(dragged.id().clone(), source, &self.live);
        self.dragged = Some(dragged);
    }

    /// Handles the pointer moving over `over_id`.
    ///
    /// Within the source column the live map is reordered immediately. Over
    /// another column only the hovered column is recorded.
    pub fn on_drag_over(&mut self, active_id: &str, over_id: Option<&str>) {
        let Some(over_id) = over_id else {
            return;
        };
        if active_id == over_id {
            return;
        }
        let Some(session) = self.session.current() else {
            return;
        };
        let Some(target) = resolve_drop_target(over_id, &self.columns, &self.live) else {
            return;
        };

        if target.column_id() != session.source_column_id() {
            let column = target.column_id().clone();
            if self.session.observe_target(&column) {
                tracing::debug!(task_id = active_id, column = %column, "drag entered column");
            }
            return;
        }

        let Some(over_task) = target.task_id() else {
            return;
        };
        if let Some(next) = reorder_within_column(
            &self.live,
            session.active_task_id(),
            over_task,
            session.source_column_id(),
        ) {
            self.live = next;
        }
    }

    /// Finishes the drag gesture.
    ///
    /// Without a drop target the gesture is cancelled: no writes happen and
    /// the live map is regrouped from the canonical list, discarding any
    /// speculative reordering. Otherwise the final placement is synchronized
    /// and the owner is notified.
    pub fn on_drag_end(&mut self, active_id: &str, over_id: Option<&str>) -> DragOutcome {
        let session = self.session.end();
        let dragged = self.dragged.take();

        let (Some(session), Some(dragged), Some(over_id)) = (session, dragged, over_id) else {
            tracing::debug!(task_id = active_id, "drag cancelled");
            self.regroup();
            return DragOutcome::Cancelled;
        };

        match resolve_drop(&session, over_id, &dragged, &self.columns, &self.live) {
            Placement::SameColumn { .. } => {
                let synced =
                    self.synchronizer
                        .synchronize(&self.live, &self.tasks, Some(dragged.id()));
                self.tasks.clone_from(&synced.tasks);
                DragOutcome::Reordered {
                    tasks: synced.tasks,
                    writes: synced.writes,
                }
            }
            Placement::CrossColumn { from, to, columns } => {
                tracing::debug!(task_id = %dragged.id(), from = %from, to = %to, "task moved");
                self.live = columns;
                let synced =
                    self.synchronizer
                        .synchronize(&self.live, &self.tasks, Some(dragged.id()));
                self.tasks.clone_from(&synced.tasks);
                DragOutcome::Moved {
                    from,
                    to,
                    tasks: synced.tasks,
                    writes: synced.writes,
                }
            }
        }
    }

    /// Creates a task ranked above every existing one.
    ///
    /// The rank is the store's task count plus one. The task is persisted
    /// before the owner is notified; a failed write aborts the creation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when counting or writing fails.
    pub async fn create_task(&mut self, task: Task) -> BoardServiceResult<Task> {
        let store = self.synchronizer.store();
        let count = store.count().await?;
        let rank = i64::try_from(count).unwrap_or(i64::MAX).saturating_add(1);
        let created = task.with_sort(rank);
        store.put(&created).await?;

        self.tasks.push(created.clone());
        self.synchronizer.notify(&self.tasks);
        self.slot(created.clone());
        Ok(created)
    }

    /// Replaces a task after an edit and re-slots it into its column.
    ///
    /// A task missing from the canonical list is appended.
    /// The write queues behind any pending drag writes. A failed write is
    /// logged and does not block the in-memory update.
    pub async fn update_task(&mut self, task: Task) {
        let report = self.synchronizer.persist(vec![task.clone()]).wait().await;
        if !report.is_complete() {
            tracing::warn!(task_id = %task.id(), "failed to persist edited task");
        }

        match self.tasks.iter_mut().find(|existing| existing.id() == task.id()) {
            Some(existing) => existing.clone_from(&task),
            None => self.tasks.push(task.clone()),
        }
        self.synchronizer.notify(&self.tasks);

        self.live.remove_task(task.id());
        self.slot(task);
    }

    /// Soft-deletes a task and removes it from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store rejects the
    /// delete; board state is left unchanged.
    pub async fn delete_task(&mut self, id: &TaskId) -> BoardServiceResult<()> {
        self.synchronizer.flush().await;
        self.synchronizer.store().delete(id).await?;

        self.tasks.retain(|task| task.id() != id);
        self.synchronizer.notify(&self.tasks);
        self.live.remove_task(id);
        Ok(())
    }

    /// Inserts a task into the column for its status, keeping rank order.
    fn slot(&mut self, task: Task) {
        if task.is_removed() {
            return;
        }
        let Some(column) = self
            .columns
            .column_for_status(task.status(), self.config.unmapped_status_policy)
            .cloned()
        else {
            tracing::warn!(
                task_id = %task.id(),
                status = %task.status(),
                "task status matches no column; not shown on board"
            );
            return;
        };
        let tasks = self.live.column_mut(&column);
        tasks.push(task);
        sort_by_rank(tasks);
    }
}
