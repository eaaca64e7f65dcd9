//! State of a single drag gesture.

use crate::board::domain::{ColumnId, ColumnTaskMap, TaskId};

/// Data captured for one drag gesture.
///
/// The snapshot is an owned deep copy of the per-column map at drag start and
/// is never shared with the live map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSessionData {
    active_task_id: TaskId,
    source_column_id: ColumnId,
    snapshot: ColumnTaskMap,
    last_observed_target: Option<ColumnId>,
}

impl DragSessionData {
    /// Returns the id of the dragged task.
    #[must_use]
    pub const fn active_task_id(&self) -> &TaskId {
        &self.active_task_id
    }

    /// Returns the column the drag started in.
    #[must_use]
    pub const fn source_column_id(&self) -> &ColumnId {
        &self.source_column_id
    }

    /// Returns the per-column map as it was when the drag started.
    #[must_use]
    pub const fn snapshot(&self) -> &ColumnTaskMap {
        &self.snapshot
    }

    /// Returns the most recent foreign column hovered during the drag.
    #[must_use]
    pub const fn last_observed_target(&self) -> Option<&ColumnId> {
        self.last_observed_target.as_ref()
    }
}

/// Lifecycle holder for the one drag gesture in progress.
///
/// Starting a new session replaces any previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    current: Option<DragSessionData>,
}

impl DragSession {
    /// Creates an idle session holder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag of `task_id` from `source_column_id`, snapshotting
    /// `current_map`.
    pub fn start(
        &mut self,
        task_id: TaskId,
        source_column_id: ColumnId,
        current_map: &ColumnTaskMap,
    ) {
        tracing::debug!(task_id = %task_id, column = %source_column_id, "drag started");
        self.current = Some(DragSessionData {
            active_task_id: task_id,
            source_column_id,
            snapshot: current_map.snapshot(),
            last_observed_target: None,
        });
    }

    /// Records `candidate` as the latest hovered column.
    ///
    /// Returns `true` when it differs from the previously observed column and
    /// therefore needs processing. Always `false` when no drag is active.
    pub fn observe_target(&mut self, candidate: &ColumnId) -> bool {
        let Some(data) = self.current.as_mut() else {
            return false;
        };
        if data.last_observed_target.as_ref() == Some(candidate) {
            return false;
        }
        data.last_observed_target = Some(candidate.clone());
        true
    }

    /// Ends the gesture, returning its data and clearing the session.
    pub fn end(&mut self) -> Option<DragSessionData> {
        self.current.take()
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the data of the drag in progress.
    #[must_use]
    pub const fn current(&self) -> Option<&DragSessionData> {
        self.current.as_ref()
    }

    /// Returns the source column of the drag in progress.
    #[must_use]
    pub fn source_column_id(&self) -> Option<&ColumnId> {
        self.current.as_ref().map(DragSessionData::source_column_id)
    }

    /// Returns the dragged task id of the drag in progress.
    #[must_use]
    pub fn active_task_id(&self) -> Option<&TaskId> {
        self.current.as_ref().map(DragSessionData::active_task_id)
    }
}
