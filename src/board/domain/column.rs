//! Board columns and the status-to-column mapping rule.

use super::{BoardDomainError, ColumnId, ConfigItem, StatusId, UnmappedStatusPolicy};

/// A visible bucket of tasks sharing a mapped status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    title: String,
    color: Option<String>,
}

impl Column {
    /// Creates a column without a color.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color: None,
        }
    }

    /// Sets the column color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Derives a column from a status lookup entry.
    ///
    /// An empty color string is treated as no color.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyIdentifier`] when the entry id is
    /// blank.
    pub fn from_status(item: &ConfigItem) -> Result<Self, BoardDomainError> {
        let column = Self::new(StatusId::new(item.id.clone())?, item.name.clone());
        if item.color.trim().is_empty() {
            return Ok(column);
        }
        Ok(column.with_color(item.color.clone()))
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the display color, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns whether a task with `status` belongs in this column.
    #[must_use]
    pub fn accepts(&self, status: &StatusId) -> bool {
        &self.id == status
    }
}

/// Ordered set of board columns.
///
/// Identifiers are unique; when built from a list containing duplicates the
/// first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Creates a column set from columns in display order.
    #[must_use]
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        let mut unique: Vec<Column> = Vec::new();
        for column in columns {
            if unique.iter().all(|existing| existing.id != column.id) {
                unique.push(column);
            }
        }
        Self { columns: unique }
    }

    /// Derives the column set from status lookup entries in lookup order.
    ///
    /// Entries with a blank identifier are skipped with a warning.
    #[must_use]
    pub fn from_statuses(items: &[ConfigItem]) -> Self {
        let columns = items
            .iter()
            .filter_map(|item| match Column::from_status(item) {
                Ok(column) => Some(column),
                Err(err) => {
                    tracing::warn!(
                        status_name = %item.name,
                        error = %err,
                        "skipping status without identifier"
                    );
                    None
                }
            });
        Self::new(columns)
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Iterates column identifiers in display order.
    pub fn ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.iter().map(Column::id)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id.as_str() == id)
    }

    /// Maps a task status to the column that should hold the task.
    ///
    /// Returns `None` when the status matches no column and `policy` is
    /// [`UnmappedStatusPolicy::Exclude`], or when the board has no columns.
    #[must_use]
    pub fn column_for_status(
        &self,
        status: &StatusId,
        policy: UnmappedStatusPolicy,
    ) -> Option<&ColumnId> {
        let matched = self
            .columns
            .iter()
            .find(|column| column.accepts(status))
            .map(Column::id);
        match (matched, policy) {
            (Some(id), _) => Some(id),
            (None, UnmappedStatusPolicy::Exclude) => None,
            (None, UnmappedStatusPolicy::FirstColumn) => self.columns.first().map(Column::id),
        }
    }
}
