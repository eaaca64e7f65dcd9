//! Observer that records every notification it receives.

use std::sync::{Arc, Mutex};

use crate::board::{domain::Task, ports::TaskListObserver};

/// Task list observer keeping a copy of each notified list.
///
/// Clones share the same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    notifications: Arc<Mutex<Vec<Vec<Task>>>>,
}

impl RecordingObserver {
    /// Creates an observer with no recorded notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notified list, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Vec<Task>> {
        self.notifications
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the most recently notified list.
    #[must_use]
    pub fn last(&self) -> Option<Vec<Task>> {
        self.notifications
            .lock()
            .ok()
            .and_then(|guard| guard.last().cloned())
    }

    /// Returns how many notifications were received.
    #[must_use]
    pub fn count(&self) -> usize {
        self.notifications.lock().map_or(0, |guard| guard.len())
    }
}

impl TaskListObserver for RecordingObserver {
    fn on_tasks_change(&self, tasks: &[Task]) {
        match self.notifications.lock() {
            Ok(mut guard) => guard.push(tasks.to_vec()),
            Err(err) => tracing::warn!(error = %err, "observer recording lock poisoned"),
        }
    }
}
