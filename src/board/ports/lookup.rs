//! Lookup port for status, priority and group configuration tables.

use crate::board::domain::{ConfigItem, ConfigKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration lookups.
pub type ConfigLookupResult<T> = Result<T, ConfigLookupError>;

/// Read access to one configuration table.
#[async_trait]
pub trait ConfigLookup: Send + Sync {
    /// Returns which table this lookup serves.
    fn kind(&self) -> ConfigKind;

    /// Returns every entry in table order.
    async fn get_all(&self) -> ConfigLookupResult<Vec<ConfigItem>>;

    /// Finds an entry by identifier.
    ///
    /// Returns `None` when no entry has the identifier.
    async fn get_by_id(&self, id: &str) -> ConfigLookupResult<Option<ConfigItem>>;
}

/// Errors returned by configuration lookups.
#[derive(Debug, Clone, Error)]
pub enum ConfigLookupError {
    /// The seed data could not be decoded.
    #[error("invalid {kind} seed data: {message}")]
    InvalidSeed {
        /// Table being seeded.
        kind: ConfigKind,
        /// Decoder message.
        message: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigLookupError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
