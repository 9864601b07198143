//! The six character traits and their per-draft scores.

use serde::{Deserialize, Serialize};

/// One of the six fixed character traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Agility,
    Strength,
    Finesse,
    Instinct,
    Presence,
    Knowledge,
}

impl Trait {
    /// All traits in sheet order.
    pub const ALL: [Trait; 6] = [
        Trait::Agility,
        Trait::Strength,
        Trait::Finesse,
        Trait::Instinct,
        Trait::Presence,
        Trait::Knowledge,
    ];

    /// Lowercase key used in paths and persisted documents.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Trait::Agility => "agility",
            Trait::Strength => "strength",
            Trait::Finesse => "finesse",
            Trait::Instinct => "instinct",
            Trait::Presence => "presence",
            Trait::Knowledge => "knowledge",
        }
    }

    /// Look up a trait by key, ignoring case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Trait modifiers for one draft. Every trait defaults to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitScores {
    pub agility: i32,
    pub strength: i32,
    pub finesse: i32,
    pub instinct: i32,
    pub presence: i32,
    pub knowledge: i32,
}

impl TraitScores {
    /// Get the score for a trait.
    #[must_use]
    pub fn get(&self, t: Trait) -> i32 {
        match t {
            Trait::Agility => self.agility,
            Trait::Strength => self.strength,
            Trait::Finesse => self.finesse,
            Trait::Instinct => self.instinct,
            Trait::Presence => self.presence,
            Trait::Knowledge => self.knowledge,
        }
    }

    /// Set the score for a trait.
    pub fn set(&mut self, t: Trait, value: i32) {
        let slot = match t {
            Trait::Agility => &mut self.agility,
            Trait::Strength => &mut self.strength,
            Trait::Finesse => &mut self.finesse,
            Trait::Instinct => &mut self.instinct,
            Trait::Presence => &mut self.presence,
            Trait::Knowledge => &mut self.knowledge,
        };
        *slot = value;
    }

    /// Iterate `(trait, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, i32)> + '_ {
        Trait::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}
