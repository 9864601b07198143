//! Card definitions - static card data.
//!
//! A `Card` is one selectable domain card as it appears in the catalog.
//! Drafts refer to cards by name only, so card data never lives in a
//! character's history.

use serde::{Deserialize, Serialize};

/// A domain card.
///
/// ## Example
///
/// ```
/// use daggerheart_builder::cards::Card;
///
/// let ward = Card::new("Rune Ward", "Arcana")
///     .with_type("Spell")
///     .with_recall_cost(0);
///
/// assert_eq!(ward.level, 1);
/// assert_eq!(ward.recall_cost, Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique name within a catalog.
    pub name: String,

    /// Domain the card belongs to.
    pub domain: String,

    /// Minimum character level, at least 1.
    pub level: u32,

    /// Free-form card type (Spell, Ability, Grimoire...).
    #[serde(rename = "type")]
    pub card_type: String,

    /// Stress cost to recall from the vault, if any.
    #[serde(rename = "recallCost")]
    pub recall_cost: Option<i64>,

    pub description: String,
}

impl Card {
    /// Create a level-1 card with empty type and description.
    #[must_use]
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            level: 1,
            card_type: String::new(),
            recall_cost: None,
            description: String::new(),
        }
    }

    /// Set the level (builder pattern). Values below 1 are raised to 1.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    /// Set the card type (builder pattern).
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    /// Set the recall cost (builder pattern).
    #[must_use]
    pub fn with_recall_cost(mut self, cost: i64) -> Self {
        self.recall_cost = Some(cost);
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Case-insensitive substring match on the name. Empty `needle` matches.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
