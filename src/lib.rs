//! # daggerheart-builder
//!
//! Level-by-level character builder for Daggerheart.
//!
//! ## Design Principles
//!
//! 1. **Draft vs. Lock**: Each level is edited as a live draft. Locking
//!    freezes a deep copy into history; later edits never reach it.
//!
//! 2. **Degrade, Don't Fail**: Bad form input, unreachable card sources and
//!    damaged save data all fall back to documented defaults.
//!
//! 3. **Independent Parts**: The store never reads the catalog. UI code
//!    glues them together and reacts to store events.
//!
//! ## Modules
//!
//! - `core`: Levels, configuration, errors, RNG
//! - `character`: Traits, classes, drafts and snapshots
//! - `store`: The level state store, observers and persistence
//! - `cards`: Card definitions, normalization and the catalog
//! - `export`: Portable build documents
//! - `suggest`: Optional trait and heritage suggestions, level progression

pub mod core;
pub mod character;
pub mod store;
pub mod cards;
pub mod export;
pub mod suggest;

// Re-export commonly used types
pub use crate::core::{
    Level, BuildRng,
    BuilderConfig, BuilderError, Result, DEFAULT_STORAGE_KEY,
};

pub use crate::character::{
    CharacterMeta, ClassInfo, ClassName, DraftField, Heritage,
    LevelDraft, LevelSnapshot, Trait, TraitScores,
};

pub use crate::store::{
    BlobStore, FileBlobStore, MemoryBlobStore, PersistOnChange,
    LevelHistory, LevelStore, StoreState,
    StoreEvent, StoreListener, SubscriptionId,
};

pub use crate::cards::{Card, CardCatalog, CatalogSource};

pub use crate::export::BuildExport;
