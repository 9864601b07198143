//! Card source retrieval.
//!
//! `CardCatalog::load` never fails: an unreachable source, a non-success
//! HTTP status, or an unparsable document all produce the built-in catalog.

use std::path::PathBuf;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::core::error::{BuilderError, Result};

use super::catalog::CardCatalog;

/// Where to read the card list from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// HTTP(S) GET.
    Url(String),
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON text held in memory.
    Inline(String),
}

impl CatalogSource {
    /// Interpret a location string: `http://` and `https://` are URLs,
    /// anything else is a file path.
    #[must_use]
    pub fn locate(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Retrieve the raw document text.
    pub async fn fetch(&self) -> Result<String> {
        match self {
            Self::Url(url) => {
                let response = Client::new().get(url).send().await?;
                if !response.status().is_success() {
                    return Err(BuilderError::BadStatus(response.status().as_u16()));
                }
                Ok(response.text().await?)
            }
            Self::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            Self::Inline(text) => Ok(text.clone()),
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::File(PathBuf::from("domain_cards.json"))
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "url {url}"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Inline(_) => f.write_str("inline document"),
        }
    }
}

impl CardCatalog {
    /// Retrieve, parse and normalize a catalog from `source`.
    ///
    /// Falls back to [`CardCatalog::builtin`] on any failure.
    pub async fn load(source: &CatalogSource) -> Self {
        match Self::try_load(source).await {
            Ok(catalog) => {
                tracing::info!(%source, cards = catalog.len(), "card catalog loaded");
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    %source,
                    error = %e,
                    "card source unavailable, using built-in cards"
                );
                Self::builtin()
            }
        }
    }

    async fn try_load(source: &CatalogSource) -> Result<Self> {
        let text = source.fetch().await?;
        Self::from_json(&text)
    }

    /// Start loading on the tokio runtime.
    ///
    /// Callers keep an empty catalog until the handle resolves.
    pub fn spawn_load(source: CatalogSource) -> JoinHandle<CardCatalog> {
        tokio::spawn(async move { Self::load(&source).await })
    }
}
