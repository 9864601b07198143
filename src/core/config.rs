//! Builder configuration.
//!
//! Configured in code with the builder methods, or read from TOML where
//! every key is optional:
//!
//! ```toml
//! storage_key = "my_character"
//! catalog_source = { url = "https://example.com/domain_cards.json" }
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::cards::CatalogSource;

/// Blob key the store is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "daggerheart_builder_state";

/// Complete builder configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Key under which the serialized store is written.
    pub storage_key: String,

    /// Where the card catalog is read from at startup.
    pub catalog_source: CatalogSource,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            catalog_source: CatalogSource::default(),
        }
    }
}

impl BuilderConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the catalog source.
    #[must_use]
    pub fn with_catalog_source(mut self, source: CatalogSource) -> Self {
        self.catalog_source = source;
        self
    }

    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
