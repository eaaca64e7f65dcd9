//! In-memory configuration lookup tables.

use async_trait::async_trait;

use crate::board::{
    domain::{ConfigItem, ConfigKind},
    ports::{ConfigLookup, ConfigLookupError, ConfigLookupResult},
};

/// Read-only lookup table held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryConfigLookup {
    kind: ConfigKind,
    items: Vec<ConfigItem>,
}

impl InMemoryConfigLookup {
    /// Creates a lookup table from entries in table order.
    #[must_use]
    pub fn new(kind: ConfigKind, items: Vec<ConfigItem>) -> Self {
        Self { kind, items }
    }

    /// Decodes a JSON array of `{id, name, color}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLookupError::InvalidSeed`] when the JSON does not
    /// decode into lookup entries.
    pub fn from_json(kind: ConfigKind, json: &str) -> ConfigLookupResult<Self> {
        let items: Vec<ConfigItem> =
            serde_json::from_str(json).map_err(|err| ConfigLookupError::InvalidSeed {
                kind,
                message: err.to_string(),
            })?;
        Ok(Self::new(kind, items))
    }
}

#[async_trait]
impl ConfigLookup for InMemoryConfigLookup {
    fn kind(&self) -> ConfigKind {
        self.kind
    }

    async fn get_all(&self) -> ConfigLookupResult<Vec<ConfigItem>> {
        Ok(self.items.clone())
    }

    async fn get_by_id(&self, id: &str) -> ConfigLookupResult<Option<ConfigItem>> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }
}
