//! Partitioning of the canonical task list into board columns.

use crate::board::domain::{ColumnSet, ColumnTaskMap, Task, UnmappedStatusPolicy};
use std::cmp::Reverse;

/// Groups `tasks` into per-column sequences.
///
/// Every known column receives a sequence, possibly empty. Soft-deleted tasks
/// are skipped. Tasks whose status maps to no column are handled according
/// to `policy`; under [`UnmappedStatusPolicy::Exclude`] they are left out and
/// logged. Each sequence is ordered by rank, highest first, keeping input
/// order between equal ranks, so grouping the same input twice yields the
/// same map.
#[must_use]
pub fn group_tasks(
    tasks: &[Task],
    columns: &ColumnSet,
    policy: UnmappedStatusPolicy,
) -> ColumnTaskMap {
    let mut grouped = ColumnTaskMap::with_columns(columns.ids());

    for task in tasks.iter().filter(|task| !task.is_removed()) {
        match columns.column_for_status(task.status(), policy) {
            Some(column) => grouped.column_mut(column).push(task.clone()),
            None => tracing::warn!(
                task_id = %task.id(),
                status = %task.status(),
                "task status matches no column; excluding task from board"
            ),
        }
    }

    let ids: Vec<_> = grouped.column_ids().cloned().collect();
    for id in &ids {
        sort_by_rank(grouped.column_mut(id));
    }
    grouped
}

/// Orders a column by rank, highest first; ties keep their relative order.
pub fn sort_by_rank(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| Reverse(task.rank()));
}
