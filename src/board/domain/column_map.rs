//! Per-column ordered task sequences.

use super::{ColumnId, Task, TaskId};
use indexmap::IndexMap;

/// Mapping from column identifier to the ordered tasks shown in it.
///
/// Columns keep their board order. Every known column is present, including
/// empty ones, and a task id appears in at most one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnTaskMap {
    columns: IndexMap<ColumnId, Vec<Task>>,
}

impl ColumnTaskMap {
    /// Creates a map with an empty sequence for every given column.
    #[must_use]
    pub fn with_columns<'a>(ids: impl IntoIterator<Item = &'a ColumnId>) -> Self {
        Self {
            columns: ids.into_iter().map(|id| (id.clone(), Vec::new())).collect(),
        }
    }

    /// Takes an owned deep copy of every column sequence.
    ///
    /// Used to isolate the drag-start state from live drag-over edits.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(id, tasks)| (id.clone(), tasks.to_vec()))
                .collect(),
        }
    }

    /// Returns the task sequence of a column.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&[Task]> {
        self.columns.get(id).map(Vec::as_slice)
    }

    /// Returns a mutable task sequence, creating an empty one for unknown
    /// columns.
    pub fn column_mut(&mut self, id: &ColumnId) -> &mut Vec<Task> {
        self.columns.entry(id.clone()).or_default()
    }

    /// Replaces a column's sequence, appending the column if it is unknown.
    pub fn replace_column(&mut self, id: ColumnId, tasks: Vec<Task>) {
        self.columns.insert(id, tasks);
    }

    /// Iterates columns in board order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &[Task])> {
        self.columns.iter().map(|(id, tasks)| (id, tasks.as_slice()))
    }

    /// Iterates column identifiers in board order.
    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.keys()
    }

    /// Iterates every task across all columns.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.values().flatten()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Finds the column and index holding the task whose id equals `task_id`.
    #[must_use]
    pub fn locate(&self, task_id: &str) -> Option<(&ColumnId, usize)> {
        self.columns.iter().find_map(|(column, tasks)| {
            tasks
                .iter()
                .position(|task| task.id().as_str() == task_id)
                .map(|index| (column, index))
        })
    }

    /// Finds a task by identifier across all columns.
    #[must_use]
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks().find(|task| task.id().as_str() == task_id)
    }

    /// Returns the ids of a column's tasks in order; empty for unknown
    /// columns.
    #[must_use]
    pub fn task_ids(&self, column: &ColumnId) -> Vec<TaskId> {
        self.column(column)
            .map(|tasks| tasks.iter().map(|task| task.id().clone()).collect())
            .unwrap_or_default()
    }

    /// Removes a task from whichever column holds it and returns it.
    pub fn remove_task(&mut self, task_id: &TaskId) -> Option<Task> {
        self.columns.values_mut().find_map(|tasks| {
            let index = tasks.iter().position(|task| task.id() == task_id)?;
            Some(tasks.remove(index))
        })
    }
}
