//! Task aggregate placed on the board.

use super::{BoardDomainError, GroupId, PriorityId, StatusId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A task record as held in the canonical list.
///
/// `sort` is only meaningful relative to other tasks sharing the same status;
/// higher ranks are shown first. Records stored without `createTime` or
/// `updateTime` load with the Unix epoch in their place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    status: StatusId,
    priority: PriorityId,
    #[serde(rename = "group", default)]
    groups: Vec<GroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort: Option<i64>,
    #[serde(default)]
    is_top: bool,
    #[serde(default)]
    is_removed: bool,
    #[serde(default)]
    create_time: DateTime<Utc>,
    #[serde(default)]
    update_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expect_start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expect_end_time: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Display name.
    pub name: String,
    /// Free-form content.
    pub content: Option<String>,
    /// Status identifier.
    pub status: StatusId,
    /// Priority identifier.
    pub priority: PriorityId,
    /// Group identifiers.
    pub groups: Vec<GroupId>,
    /// Rank within the status column, if one was ever assigned.
    pub sort: Option<i64>,
    /// Pinned flag.
    pub is_top: bool,
    /// Soft-delete flag.
    pub is_removed: bool,
    /// Creation timestamp.
    pub create_time: DateTime<Utc>,
    /// Latest update timestamp.
    pub update_time: DateTime<Utc>,
    /// Expected start, if planned.
    pub expect_start_time: Option<DateTime<Utc>>,
    /// Expected end, if planned.
    pub expect_end_time: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new unranked task stamped with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when `name` is blank.
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        status: StatusId,
        priority: PriorityId,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let raw_name = name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskName);
        }
        let timestamp = clock.utc();

        Ok(Self {
            id,
            name: trimmed.to_owned(),
            content: None,
            status,
            priority,
            groups: Vec::new(),
            sort: None,
            is_top: false,
            is_removed: false,
            create_time: timestamp,
            update_time: timestamp,
            expect_start_time: None,
            expect_end_time: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            content: data.content,
            status: data.status,
            priority: data.priority,
            groups: data.groups,
            sort: data.sort,
            is_top: data.is_top,
            is_removed: data.is_removed,
            create_time: data.create_time,
            update_time: data.update_time,
            expect_start_time: data.expect_start_time,
            expect_end_time: data.expect_end_time,
        }
    }

    /// Sets the task content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the task groups.
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = GroupId>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    /// Sets the rank.
    #[must_use]
    pub const fn with_sort(mut self, sort: i64) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the pinned flag.
    #[must_use]
    pub const fn with_top(mut self, is_top: bool) -> Self {
        self.is_top = is_top;
        self
    }

    /// Sets the expected working window.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvertedExpectedWindow`] when `start` is
    /// after `end`.
    pub fn with_expected_window(
        mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, BoardDomainError> {
        if start > end {
            return Err(BoardDomainError::InvertedExpectedWindow {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        self.expect_start_time = Some(start);
        self.expect_end_time = Some(end);
        Ok(self)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-form content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn status(&self) -> &StatusId {
        &self.status
    }

    /// Returns the priority identifier.
    #[must_use]
    pub const fn priority(&self) -> &PriorityId {
        &self.priority
    }

    /// Returns the group identifiers.
    #[must_use]
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    /// Returns the stored rank, if one was ever assigned.
    #[must_use]
    pub const fn sort(&self) -> Option<i64> {
        self.sort
    }

    /// Returns the rank used for ordering; an absent rank counts as zero.
    #[must_use]
    pub fn rank(&self) -> i64 {
        self.sort.unwrap_or_default()
    }

    /// Returns whether the task is pinned.
    #[must_use]
    pub const fn is_top(&self) -> bool {
        self.is_top
    }

    /// Returns whether the task was soft-deleted.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.is_removed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn create_time(&self) -> DateTime<Utc> {
        self.create_time
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn update_time(&self) -> DateTime<Utc> {
        self.update_time
    }

    /// Returns the expected start, if planned.
    #[must_use]
    pub const fn expect_start_time(&self) -> Option<DateTime<Utc>> {
        self.expect_start_time
    }

    /// Returns the expected end, if planned.
    #[must_use]
    pub const fn expect_end_time(&self) -> Option<DateTime<Utc>> {
        self.expect_end_time
    }

    /// Overwrites the rank.
    pub const fn set_sort(&mut self, sort: i64) {
        self.sort = Some(sort);
    }

    /// Moves the task to another status.
    pub fn move_to_status(&mut self, status: StatusId) {
        self.status = status;
    }

    /// Sets the update timestamp to `timestamp`.
    pub const fn touch_at(&mut self, timestamp: DateTime<Utc>) {
        self.update_time = timestamp;
    }

    /// Sets the update timestamp to the clock's current time.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.update_time = clock.utc();
    }

    /// Flags the task as soft-deleted and refreshes its update timestamp.
    pub fn mark_removed(&mut self, clock: &impl Clock) {
        self.is_removed = true;
        self.touch(clock);
    }
}
