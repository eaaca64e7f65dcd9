//! Live reordering inside a single column.

use crate::board::domain::{ColumnId, ColumnTaskMap, Task, TaskId};

/// Reassigns ranks so the first task gets the highest rank.
///
/// Ranks run from `len` down to `1`, so sorting by rank descending
/// reproduces the sequence exactly.
pub fn rerank(tasks: &mut [Task]) {
    let len = tasks.len();
    for (position, task) in tasks.iter_mut().enumerate() {
        task.set_sort(rank_for(len, position));
    }
}

fn rank_for(len: usize, position: usize) -> i64 {
    i64::try_from(len.saturating_sub(position)).unwrap_or(i64::MAX)
}

/// Moves `active` to the hovered task's position within `column`.
///
/// Returns `None` when either task is missing from the column or the active
/// task already sits at the hovered index. Otherwise returns a new map in
/// which only `column` changed: the active task is reinserted at the hovered
/// index (one lower when it came from above) and the column is reranked.
#[must_use]
pub fn reorder_within_column(
    map: &ColumnTaskMap,
    active: &TaskId,
    over: &TaskId,
    column: &ColumnId,
) -> Option<ColumnTaskMap> {
    let tasks = map.column(column)?;
    let current_index = tasks.iter().position(|task| task.id() == active)?;
    let over_index = tasks.iter().position(|task| task.id() == over)?;
    if current_index == over_index {
        return None;
    }

    let mut reordered = tasks.to_vec();
    let moving = reordered.remove(current_index);
    let insert_index = if current_index < over_index {
        over_index - 1
    } else {
        over_index
    };
    reordered.insert(insert_index, moving);
    rerank(&mut reordered);

    let mut next = map.clone();
    next.replace_column(column.clone(), reordered);
    Some(next)
}
