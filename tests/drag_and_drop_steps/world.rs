//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::Arc;

use chrono::Utc;
use eyre::WrapErr;
use kanban_drag::board::{
    adapters::memory::{InMemoryTaskStore, RecordingObserver},
    domain::{
        BoardConfig, Column, ColumnSet, PersistedTaskData, PriorityId, StatusId, Task, TaskId,
    },
    services::{KanbanBoard, PersistenceReport, TaskSynchronizer},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = KanbanBoard<InMemoryTaskStore, DefaultClock>;

/// Scenario world for drag-and-drop behaviour tests.
///
/// The board is assembled on first use so that it picks up the runtime the
/// scenario runs on.
#[derive(Default)]
pub struct DragWorld {
    pub column_ids: Vec<String>,
    pub seed: Vec<Task>,
    pub store: InMemoryTaskStore,
    pub observer: RecordingObserver,
    pub board: Option<TestBoard>,
    pub last_report: Option<PersistenceReport>,
}

impl DragWorld {
    /// Returns the board, building it from the seeded scenario state.
    pub fn board(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        if self.board.is_none() {
            let columns = self
                .column_ids
                .iter()
                .map(|id| {
                    StatusId::new(id.as_str()).map(|status| Column::new(status, id.as_str()))
                })
                .collect::<Result<Vec<_>, _>>()
                .wrap_err("build scenario columns")?;
            self.store
                .seed_if_empty(self.seed.clone())
                .wrap_err("seed scenario store")?;
            let synchronizer = TaskSynchronizer::new(
                Arc::new(self.store.clone()),
                Arc::new(DefaultClock),
                Arc::new(self.observer.clone()),
                &tokio::runtime::Handle::current(),
            );
            self.board = Some(KanbanBoard::new(
                BoardConfig::default(),
                ColumnSet::new(columns),
                self.seed.clone(),
                synchronizer,
            ));
        }
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board missing after construction"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}

/// Builds a persisted task for scenario seeding.
pub fn seeded_task(id: &str, status: &str, rank: i64) -> Result<Task, eyre::Report> {
    let now = Utc::now();
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id).wrap_err("scenario task id")?,
        name: format!("Task {id}"),
        content: None,
        status: StatusId::new(status).wrap_err("scenario status")?,
        priority: PriorityId::new("normal").wrap_err("scenario priority")?,
        groups: Vec::new(),
        sort: Some(rank),
        is_top: false,
        is_removed: false,
        create_time: now,
        update_time: now,
        expect_start_time: None,
        expect_end_time: None,
    }))
}

/// Splits a comma-separated scenario list.
pub fn list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
