//! Core types: levels, configuration, errors and RNG.
//!
//! These are shared by the character model, the store and the catalog.

pub mod config;
pub mod error;
pub mod level;
pub mod rng;

pub use config::{BuilderConfig, DEFAULT_STORAGE_KEY};
pub use error::{BuilderError, Result};
pub use level::Level;
pub use rng::BuildRng;
