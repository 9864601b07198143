//! Card system: definitions, normalization, catalog and sources.
//!
//! ## Key Types
//!
//! - `Card`: one normalized domain card
//! - `CardCatalog`: ordered cards plus the sorted domain index
//! - `CatalogSource`: URL, file or inline JSON to load from
//!
//! ## Loading
//!
//! Sources may use either of two spellings per field (see
//! `normalize::FIELD_SYNONYMS`). Loading never surfaces an error; failures
//! fall back to the built-in catalog.

pub mod catalog;
pub mod defaults;
pub mod definition;
pub mod normalize;
pub mod source;

pub use catalog::CardCatalog;
pub use definition::Card;
pub use normalize::{CardField, FIELD_SYNONYMS, UNKNOWN_DOMAIN};
pub use source::CatalogSource;
