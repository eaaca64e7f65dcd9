//! Shared builders for board unit tests.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::board::{
    adapters::memory::{InMemoryTaskStore, RecordingObserver},
    domain::{
        BoardConfig, Column, ColumnId, ColumnSet, ColumnTaskMap, PersistedTaskData, PriorityId,
        StatusId, Task, TaskId,
    },
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
    services::{KanbanBoard, TaskSynchronizer},
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use mockall::mock;
use tokio::sync::Notify;

mock! {
    pub Store {}

    #[async_trait]
    impl TaskStore for Store {
        async fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;
        async fn put(&self, task: &Task) -> TaskStoreResult<TaskId>;
        async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;
        async fn get_all(&self) -> TaskStoreResult<Vec<Task>>;
        async fn bulk_put(&self, tasks: &[Task]) -> TaskStoreResult<()>;
        async fn count(&self) -> TaskStoreResult<usize>;
    }
}

/// In-memory store whose first `put` is held until the gate opens.
pub struct GatedStore {
    inner: InMemoryTaskStore,
    gate: Arc<Notify>,
    held: AtomicBool,
}

impl GatedStore {
    pub fn new(inner: InMemoryTaskStore, gate: Arc<Notify>) -> Self {
        Self {
            inner,
            gate,
            held: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl TaskStore for GatedStore {
    async fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        self.inner.get(id).await
    }

    async fn put(&self, task: &Task) -> TaskStoreResult<TaskId> {
        if self.held.swap(false, Ordering::SeqCst) {
            self.gate.notified().await;
        }
        self.inner.put(task).await
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        self.inner.delete(id).await
    }

    async fn get_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.inner.get_all().await
    }

    async fn bulk_put(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        self.inner.bulk_put(tasks).await
    }

    async fn count(&self) -> TaskStoreResult<usize> {
        self.inner.count().await
    }
}

pub type TestBoard = KanbanBoard<InMemoryTaskStore, DefaultClock>;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .single()
        .expect("valid fixed timestamp")
}

pub fn column_id(id: &str) -> ColumnId {
    StatusId::new(id).expect("valid column id")
}

pub fn task_id(id: &str) -> TaskId {
    TaskId::new(id).expect("valid task id")
}

/// Builds a persisted task with deterministic timestamps.
pub fn task(id: &str, status: &str, sort: Option<i64>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: task_id(id),
        name: format!("Task {id}"),
        content: None,
        status: column_id(status),
        priority: PriorityId::new("p2").expect("valid priority id"),
        groups: Vec::new(),
        sort,
        is_top: false,
        is_removed: false,
        create_time: fixed_time(),
        update_time: fixed_time(),
        expect_start_time: None,
        expect_end_time: None,
    })
}

pub fn columns(ids: &[&str]) -> ColumnSet {
    ColumnSet::new(
        ids.iter()
            .map(|id| Column::new(column_id(id), format!("Column {id}"))),
    )
}

/// Builds a map whose columns hold exactly the given tasks, in order.
pub fn map_of(columns: &[(&str, Vec<Task>)]) -> ColumnTaskMap {
    let mut map = ColumnTaskMap::default();
    for (id, tasks) in columns {
        map.replace_column(column_id(id), tasks.clone());
    }
    map
}

pub fn ids_in(map: &ColumnTaskMap, column: &str) -> Vec<String> {
    map.task_ids(&column_id(column))
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn ranks_in(map: &ColumnTaskMap, column: &str) -> Vec<Option<i64>> {
    map.column(&column_id(column))
        .unwrap_or_default()
        .iter()
        .map(Task::sort)
        .collect()
}

pub fn store_failure() -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other("disk full"))
}

/// Wires a synchronizer over `store`; must run inside a tokio runtime.
pub fn synchronizer_over<S>(
    store: S,
    observer: &RecordingObserver,
) -> TaskSynchronizer<S, DefaultClock>
where
    S: TaskStore + 'static,
{
    TaskSynchronizer::new(
        Arc::new(store),
        Arc::new(DefaultClock),
        Arc::new(observer.clone()),
        &tokio::runtime::Handle::current(),
    )
}

/// Assembles a board over an arbitrary store.
pub fn board_over<S>(
    store: S,
    columns: ColumnSet,
    tasks: Vec<Task>,
) -> (KanbanBoard<S, DefaultClock>, RecordingObserver)
where
    S: TaskStore + 'static,
{
    let observer = RecordingObserver::new();
    let synchronizer = synchronizer_over(store, &observer);
    let board = KanbanBoard::new(BoardConfig::default(), columns, tasks, synchronizer);
    (board, observer)
}

/// Assembles a board over a seeded in-memory store; must run inside a tokio
/// runtime.
pub fn board_with(
    columns: ColumnSet,
    tasks: Vec<Task>,
) -> (TestBoard, InMemoryTaskStore, RecordingObserver) {
    let store = InMemoryTaskStore::new();
    store
        .seed_if_empty(tasks.clone())
        .expect("seed in-memory store");
    let (board, observer) = board_over(store.clone(), columns, tasks);
    (board, store, observer)
}
