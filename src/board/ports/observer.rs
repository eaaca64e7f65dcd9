//! Upward notification port for canonical list changes.

use crate::board::domain::Task;

/// Receives the complete rebuilt canonical list after the board changes it.
///
/// Called synchronously, before any persistence write has completed. Any
/// `Fn(&[Task])` closure that is `Send + Sync` is an observer.
pub trait TaskListObserver: Send + Sync {
    /// Handles the updated canonical task list.
    fn on_tasks_change(&self, tasks: &[Task]);
}

impl<F> TaskListObserver for F
where
    F: Fn(&[Task]) + Send + Sync,
{
    fn on_tasks_change(&self, tasks: &[Task]) {
        self(tasks);
    }
}
