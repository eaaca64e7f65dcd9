//! Board configuration.

use super::lookup::{ConfigCatalog, ConfigItem, DEFAULT_FALLBACK_COLOR};

/// What to do with a task whose status matches no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedStatusPolicy {
    /// Leave the task out of every column and log a data-integrity warning.
    #[default]
    Exclude,
    /// Place the task in the first column of the board.
    FirstColumn,
}

/// Configuration for board grouping and presentation fallbacks.
///
/// # Examples
///
/// ```
/// use kanban_drag::board::domain::{BoardConfig, UnmappedStatusPolicy};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.unmapped_status_policy, UnmappedStatusPolicy::Exclude);
///
/// let lenient = BoardConfig::lenient();
/// assert_eq!(lenient.unmapped_status_policy, UnmappedStatusPolicy::FirstColumn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Handling of tasks whose status matches no column.
    pub unmapped_status_policy: UnmappedStatusPolicy,
    /// Color used for lookup entries that cannot be resolved.
    pub fallback_color: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            unmapped_status_policy: UnmappedStatusPolicy::Exclude,
            fallback_color: DEFAULT_FALLBACK_COLOR.to_owned(),
        }
    }
}

impl BoardConfig {
    /// Creates a configuration that keeps unmapped tasks visible in the first
    /// column instead of hiding them.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            unmapped_status_policy: UnmappedStatusPolicy::FirstColumn,
            ..Self::default()
        }
    }

    /// Builds a label catalog that falls back to this configuration's color.
    #[must_use]
    pub fn catalog(&self, items: Vec<ConfigItem>) -> ConfigCatalog {
        ConfigCatalog::new(items).with_fallback_color(self.fallback_color.as_str())
    }

    /// Sets the unmapped status policy.
    #[must_use]
    pub const fn with_unmapped_status_policy(mut self, policy: UnmappedStatusPolicy) -> Self {
        self.unmapped_status_policy = policy;
        self
    }
}
