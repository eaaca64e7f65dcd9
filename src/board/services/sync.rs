//! Reconciliation of per-column state into the canonical task list.

use crate::board::{
    domain::{ColumnTaskMap, Task, TaskId},
    ports::{TaskListObserver, TaskStore},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::{
    runtime::Handle,
    sync::{mpsc, oneshot},
};

/// Rebuilds the canonical list from the final per-column map.
///
/// Each placed task is taken from `original` by id, with its status set to
/// the owning column and its rank copied from the map. Only `active` gets its
/// update time set to `now`. Tasks in `original` that no column holds are
/// appended unchanged so nothing is lost. Column entries with no original
/// record are dropped.
#[must_use]
pub fn rebuild_task_list(
    final_map: &ColumnTaskMap,
    original: &[Task],
    active: Option<&TaskId>,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let by_id: HashMap<&TaskId, &Task> = original.iter().map(|task| (task.id(), task)).collect();
    let mut rebuilt = Vec::with_capacity(original.len());
    let mut placed: HashSet<&TaskId> = HashSet::with_capacity(original.len());

    for (column_id, tasks) in final_map.iter() {
        for placed_task in tasks {
            let Some(original_task) = by_id.get(placed_task.id()) else {
                continue;
            };
            if !placed.insert(original_task.id()) {
                continue;
            }
            let mut updated = (*original_task).clone();
            updated.move_to_status(column_id.clone());
            if let Some(sort) = placed_task.sort() {
                updated.set_sort(sort);
            }
            if active == Some(placed_task.id()) {
                updated.touch_at(now);
            }
            rebuilt.push(updated);
        }
    }

    rebuilt.extend(
        original
            .iter()
            .filter(|task| !placed.contains(task.id()))
            .cloned(),
    );
    rebuilt
}

/// Returns the rebuilt records that differ from their original version.
#[must_use]
pub fn changed_tasks(rebuilt: &[Task], original: &[Task]) -> Vec<Task> {
    let by_id: HashMap<&TaskId, &Task> = original.iter().map(|task| (task.id(), task)).collect();
    rebuilt
        .iter()
        .filter(|task| {
            by_id
                .get(task.id())
                .is_none_or(|before| *before != *task)
        })
        .cloned()
        .collect()
}

/// Outcome of a batch of persistence writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistenceReport {
    /// Tasks written successfully.
    pub written: Vec<TaskId>,
    /// Tasks whose write failed.
    pub failed: Vec<TaskId>,
}

impl PersistenceReport {
    /// Returns whether every write succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Handle to persistence writes running in the background.
///
/// Dropping the handle does not cancel the writes.
#[derive(Debug, Default)]
pub struct PendingWrites {
    batch: Vec<TaskId>,
    reply: Option<oneshot::Receiver<PersistenceReport>>,
}

impl PendingWrites {
    /// A handle for an empty batch.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            batch: Vec::new(),
            reply: None,
        }
    }

    /// Returns whether any write was scheduled.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.reply.is_some()
    }

    /// Waits for the writes to finish.
    ///
    /// If the writer stopped before reporting, every task of the batch is
    /// reported as failed.
    pub async fn wait(self) -> PersistenceReport {
        let Some(reply) = self.reply else {
            return PersistenceReport::default();
        };
        match reply.await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    tasks = self.batch.len(),
                    "task persistence did not complete"
                );
                PersistenceReport {
                    written: Vec::new(),
                    failed: self.batch,
                }
            }
        }
    }
}

/// A batch queued for the background writer.
struct WriteBatch {
    tasks: Vec<Task>,
    reply: oneshot::Sender<PersistenceReport>,
}

/// Result of synchronizing a drag result.
#[derive(Debug)]
pub struct Synchronized {
    /// The rebuilt canonical list, already handed to the observer.
    pub tasks: Vec<Task>,
    /// Writes of the changed records.
    pub writes: PendingWrites,
}

/// Writes every task, logging failures without stopping.
async fn write_all<S>(store: &S, tasks: Vec<Task>) -> PersistenceReport
where
    S: TaskStore + ?Sized,
{
    let mut report = PersistenceReport::default();
    for task in tasks {
        match store.put(&task).await {
            Ok(id) => report.written.push(id),
            Err(err) => {
                tracing::warn!(task_id = %task.id(), error = %err, "failed to persist task");
                report.failed.push(task.id().clone());
            }
        }
    }
    report
}

/// Drains queued batches one at a time, in the order they were sent.
async fn run_writer<S>(store: Arc<S>, mut batches: mpsc::UnboundedReceiver<WriteBatch>)
where
    S: TaskStore + ?Sized,
{
    while let Some(batch) = batches.recv().await {
        let report = write_all(store.as_ref(), batch.tasks).await;
        if batch.reply.send(report).is_err() {
            tracing::trace!("persistence report dropped unread");
        }
    }
    tracing::debug!("task writer stopped");
}

/// Synchronizes drag results with the store and the list owner.
///
/// Writes from every clone go through a single background writer, so a
/// later batch never lands before an earlier one.
pub struct TaskSynchronizer<S, C>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    observer: Arc<dyn TaskListObserver>,
    writer: mpsc::UnboundedSender<WriteBatch>,
}

impl<S, C> Clone for TaskSynchronizer<S, C>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            observer: Arc::clone(&self.observer),
            writer: self.writer.clone(),
        }
    }
}

impl<S, C> TaskSynchronizer<S, C>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a synchronizer whose writer task runs on `runtime`.
    ///
    /// The writer stops once every clone of the synchronizer is dropped.
    #[must_use]
    pub fn new(
        store: Arc<S>,
        clock: Arc<C>,
        observer: Arc<dyn TaskListObserver>,
        runtime: &Handle,
    ) -> Self {
        let (writer, batches) = mpsc::unbounded_channel();
        runtime.spawn(run_writer(Arc::clone(&store), batches));
        Self {
            store,
            clock,
            observer,
            writer,
        }
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Rebuilds the canonical list, schedules writes for changed records and
    /// notifies the observer.
    ///
    /// Returns without waiting for the store.
    pub fn synchronize(
        &self,
        final_map: &ColumnTaskMap,
        original: &[Task],
        active: Option<&TaskId>,
    ) -> Synchronized {
        let tasks = rebuild_task_list(final_map, original, active, self.clock.utc());
        let writes = self.persist(changed_tasks(&tasks, original));
        self.notify(&tasks);
        Synchronized { tasks, writes }
    }

    /// Queues one write per task behind every batch already queued.
    pub fn persist(&self, tasks: Vec<Task>) -> PendingWrites {
        if tasks.is_empty() {
            return PendingWrites::none();
        }
        self.enqueue(tasks)
    }

    /// Waits until every batch queued so far has been written.
    pub async fn flush(&self) {
        self.enqueue(Vec::new()).wait().await;
    }

    fn enqueue(&self, tasks: Vec<Task>) -> PendingWrites {
        let batch = tasks.iter().map(|task| task.id().clone()).collect();
        let (reply, receiver) = oneshot::channel();
        if self.writer.send(WriteBatch { tasks, reply }).is_err() {
            tracing::warn!("task writer is not running");
        }
        PendingWrites {
            batch,
            reply: Some(receiver),
        }
    }

    /// Hands the canonical list to the observer.
    pub fn notify(&self, tasks: &[Task]) {
        self.observer.on_tasks_change(tasks);
    }
}
