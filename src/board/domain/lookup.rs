//! Configuration lookup records for statuses, priorities and groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color used when a lookup entry cannot be resolved.
pub const DEFAULT_FALLBACK_COLOR: &str = "#666666";

/// Which lookup table a [`ConfigItem`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKind {
    /// Task statuses; these define the board columns.
    Status,
    /// Task priorities.
    Priority,
    /// Task groups.
    Group,
}

impl ConfigKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lookup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItem {
    /// Stable identifier referenced by tasks.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color, usually a hex string.
    pub color: String,
}

impl ConfigItem {
    /// Creates a lookup entry.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Loaded lookup table used to resolve display labels.
///
/// Unknown identifiers resolve to the raw id as the name and to the fallback
/// color, so stale references still render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCatalog {
    items: Vec<ConfigItem>,
    fallback_color: String,
}

impl ConfigCatalog {
    /// Creates a catalog with the default fallback color.
    #[must_use]
    pub fn new(items: Vec<ConfigItem>) -> Self {
        Self {
            items,
            fallback_color: DEFAULT_FALLBACK_COLOR.to_owned(),
        }
    }

    /// Overrides the fallback color.
    #[must_use]
    pub fn with_fallback_color(mut self, color: impl Into<String>) -> Self {
        self.fallback_color = color.into();
        self
    }

    /// Returns all entries in lookup order.
    #[must_use]
    pub fn items(&self) -> &[ConfigItem] {
        &self.items
    }

    /// Finds an entry by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ConfigItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolves the display name, falling back to the id itself.
    #[must_use]
    pub fn name_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |item| item.name.as_str())
    }

    /// Resolves the display color, falling back to the catalog fallback.
    #[must_use]
    pub fn color_for(&self, id: &str) -> &str {
        self.get(id)
            .map_or(self.fallback_color.as_str(), |item| item.color.as_str())
    }
}
