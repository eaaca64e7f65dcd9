//! Drop target resolution and cross-column moves.

use super::{reorder::rerank, session::DragSessionData};
use crate::board::domain::{ColumnId, ColumnSet, ColumnTaskMap, Task, TaskId};

/// What the pointer was over when a drag event fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column itself, typically its empty area.
    Column {
        /// The hovered column.
        id: ColumnId,
    },
    /// A task card.
    Task {
        /// The hovered task.
        id: TaskId,
        /// The column currently holding the hovered task.
        column_id: ColumnId,
    },
}

impl DropTarget {
    /// Returns the column the target belongs to.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        match self {
            Self::Column { id } | Self::Task { column_id: id, .. } => id,
        }
    }

    /// Returns the hovered task id, if the target is a task.
    #[must_use]
    pub const fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Column { .. } => None,
            Self::Task { id, .. } => Some(id),
        }
    }
}

/// Classifies `over_id` as a column or a task.
///
/// Column ids take precedence. Otherwise the live map is searched for a task
/// with that id. Returns `None` when neither matches.
#[must_use]
pub fn resolve_drop_target(
    over_id: &str,
    columns: &ColumnSet,
    live: &ColumnTaskMap,
) -> Option<DropTarget> {
    if let Some(column) = columns.get(over_id) {
        return Some(DropTarget::Column {
            id: column.id().clone(),
        });
    }
    let (column_id, index) = live.locate(over_id)?;
    let task = live.column(column_id)?.get(index)?;
    Some(DropTarget::Task {
        id: task.id().clone(),
        column_id: column_id.clone(),
    })
}

/// Final placement of a dropped task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The drop landed in the source column; the live map already holds the
    /// result of drag-over reordering.
    SameColumn {
        /// The source column.
        column: ColumnId,
    },
    /// The task moved to another column.
    CrossColumn {
        /// The source column.
        from: ColumnId,
        /// The target column.
        to: ColumnId,
        /// Complete replacement map derived from the drag-start snapshot.
        columns: ColumnTaskMap,
    },
}

/// Computes where a dropped task ends up.
///
/// The target column comes from [`resolve_drop_target`] against the live map
/// and falls back to the source column when `over_id` is unknown. Moves to
/// another column are computed from the drag-start snapshot, never from the
/// live map: the task is removed from the source sequence, inserted into the
/// target sequence before the hovered task (or appended), stamped with the
/// target status, and both sequences are reranked. Untouched columns pass
/// through from the snapshot.
#[must_use]
pub fn resolve_drop(
    session: &DragSessionData,
    over_id: &str,
    dragged: &Task,
    columns: &ColumnSet,
    live: &ColumnTaskMap,
) -> Placement {
    let source = session.source_column_id();
    let target = resolve_drop_target(over_id, columns, live)
        .map_or_else(|| source.clone(), |found| found.column_id().clone());

    if &target == source {
        return Placement::SameColumn {
            column: target,
        };
    }

    let snapshot = session.snapshot();
    let mut next = snapshot.snapshot();

    let mut source_tasks: Vec<Task> = snapshot
        .column(source)
        .unwrap_or_default()
        .iter()
        .filter(|task| task.id() != dragged.id())
        .cloned()
        .collect();
    let mut target_tasks: Vec<Task> = snapshot
        .column(&target)
        .unwrap_or_default()
        .iter()
        .filter(|task| task.id() != dragged.id())
        .cloned()
        .collect();

    let insert_index = target_tasks
        .iter()
        .position(|task| task.id().as_str() == over_id)
        .unwrap_or(target_tasks.len());
    let mut moved = dragged.clone();
    moved.move_to_status(target.clone());
    target_tasks.insert(insert_index, moved);

    rerank(&mut source_tasks);
    rerank(&mut target_tasks);
    next.replace_column(source.clone(), source_tasks);
    next.replace_column(target.clone(), target_tasks);

    Placement::CrossColumn {
        from: source.clone(),
        to: target,
        columns: next,
    }
}
