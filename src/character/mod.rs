//! Character model: traits, classes, drafts and snapshots.
//!
//! ## Key Types
//!
//! - `Trait` / `TraitScores`: the six fixed traits
//! - `ClassName` / `ClassInfo`: the nine classes with SRD reference data
//! - `LevelDraft`: the editable configuration of one level
//! - `LevelSnapshot`: a locked, read-only copy of a draft
//! - `CharacterMeta`: name and currently viewed level

pub mod class;
pub mod draft;
pub mod traits;

use serde::{Deserialize, Serialize};

pub use class::{ClassInfo, ClassName};
pub use draft::{
    DraftField, Experiences, Heritage, LevelDraft, LevelSnapshot, DEFAULT_EVASION, DEFAULT_HP,
    DEFAULT_TRAIT, EXPERIENCE_SLOTS,
};
pub use traits::{Trait, TraitScores};

use crate::core::Level;

/// Character name and the level currently being viewed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterMeta {
    pub name: String,
    pub level: Level,
}
