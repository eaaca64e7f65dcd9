//! Drag engine services.
//!
//! The engine is a set of synchronous transformations over
//! [`ColumnTaskMap`](crate::board::domain::ColumnTaskMap) values plus the
//! [`KanbanBoard`] controller that applies them in response to drag events:
//!
//! - [`grouping`] derives the per-column map from the canonical list
//! - [`session`] tracks one drag gesture and its drag-start snapshot
//! - [`reorder`] reorders a column live during drag-over
//! - [`placement`] resolves drop targets and cross-column moves
//! - [`sync`] rebuilds the canonical list, persists and notifies

pub mod grouping;
pub mod placement;
pub mod reorder;
pub mod session;
pub mod sync;

mod board;

pub use board::{
    BoardServiceError, BoardServiceResult, DragOutcome, KanbanBoard, load_columns,
};
pub use grouping::{group_tasks, sort_by_rank};
pub use placement::{DropTarget, Placement, resolve_drop, resolve_drop_target};
pub use reorder::{reorder_within_column, rerank};
pub use session::{DragSession, DragSessionData};
pub use sync::{
    PendingWrites, PersistenceReport, Synchronized, TaskSynchronizer, changed_tasks,
    rebuild_task_list,
};
