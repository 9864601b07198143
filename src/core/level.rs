//! Character level identification.
//!
//! ## Level
//!
//! Type-safe progression level clamped to 1-10. Every constructor clamps,
//! so a `Level` outside that range cannot exist.

use serde::{Deserialize, Serialize};

/// Progression level in the range 1-10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Lowest level.
    pub const MIN: Level = Level(1);

    /// Highest level.
    pub const MAX: Level = Level(10);

    /// Create a level, clamping `n` into 1-10.
    #[must_use]
    pub const fn new(n: i64) -> Self {
        if n < Self::MIN.0 as i64 {
            Self::MIN
        } else if n > Self::MAX.0 as i64 {
            Self::MAX
        } else {
            Self(n as u8)
        }
    }

    /// Parse user text into a level.
    ///
    /// Unparsable text falls back to level 1.
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        text.trim().parse::<i64>().map(Self::new).unwrap_or(Self::MIN)
    }

    /// Get the raw level number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// SRD tier for this level.
    ///
    /// Level 1 is tier 1, 2-4 tier 2, 5-7 tier 3, 8-10 tier 4.
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self.0 {
            1 => 1,
            2..=4 => 2,
            5..=7 => 3,
            _ => 4,
        }
    }

    /// Iterate over every level, lowest first.
    ///
    /// ```
    /// use daggerheart_builder::Level;
    ///
    /// let levels: Vec<_> = Level::all().collect();
    /// assert_eq!(levels.len(), 10);
    /// assert_eq!(levels[0], Level::MIN);
    /// assert_eq!(levels[9], Level::MAX);
    /// ```
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Level)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i64> for Level {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}", self.0)
    }
}
