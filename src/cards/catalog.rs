//! Card catalog: ordered cards with a domain index and name lookup.
//!
//! Queries are stable filters. Results keep catalog order and are never
//! ranked.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::character::ClassName;
use crate::core::error::Result;
use crate::core::Level;

use super::defaults::builtin_cards;
use super::definition::Card;
use super::normalize::normalize_document;

/// Normalized set of selectable cards.
///
/// ## Example
///
/// ```
/// use daggerheart_builder::cards::{Card, CardCatalog};
///
/// let catalog = CardCatalog::from_cards(vec![
///     Card::new("Rune Ward", "Arcana"),
///     Card::new("Whirlwind", "Blade").with_level(2),
/// ]);
///
/// assert_eq!(catalog.domains(), &["Arcana".to_string(), "Blade".to_string()]);
/// assert_eq!(catalog.query("", "", 1).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    domains: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Build a catalog from cards in order.
    ///
    /// Later cards repeating an earlier name are dropped.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut catalog = Self::default();
        for card in cards {
            if catalog.index.contains_key(&card.name) {
                continue;
            }
            catalog.index.insert(card.name.clone(), catalog.cards.len());
            catalog.cards.push(card);
        }
        catalog.domains = catalog
            .cards
            .iter()
            .filter(|c| !c.domain.is_empty())
            .map(|c| c.domain.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        catalog
    }

    /// The built-in six-card fallback catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_cards(builtin_cards())
    }

    /// Parse and normalize a JSON card source document.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from_cards(normalize_document(&document)?))
    }

    /// All cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.index.get(name).map(|&i| &self.cards[i])
    }

    /// Distinct domains, sorted ascending.
    ///
    /// The empty string is not included; callers use it as the
    /// "all domains" filter value.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Cards matching every filter, in catalog order.
    ///
    /// - `domain`: exact match, or empty for any domain
    /// - `text`: case-insensitive name substring, or empty for any name
    /// - `max_level`: cards above this level are excluded
    #[must_use]
    pub fn query(&self, text: &str, domain: &str, max_level: u32) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| domain.is_empty() || c.domain == domain)
            .filter(|c| c.name_contains(text))
            .filter(|c| c.level <= max_level)
            .collect()
    }

    /// Cards from the class's domains at or below `level`, excluding `chosen`.
    #[must_use]
    pub fn eligible_for(&self, class: ClassName, level: Level, chosen: &[String]) -> Vec<&Card> {
        let domains = class.info().domains;
        self.cards
            .iter()
            .filter(|c| domains.iter().any(|d| *d == c.domain))
            .filter(|c| c.level <= u32::from(level.get()))
            .filter(|c| !chosen.contains(&c.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::UNKNOWN_DOMAIN;

    fn sample() -> CardCatalog {
        CardCatalog::from_cards(vec![
            Card::new("Rune Ward", "Arcana"),
            Card::new("Whirlwind", "Blade").with_level(1),
            Card::new("Wall Walk", "Arcana").with_level(1),
            Card::new("Cinder Grasp", "Arcana").with_level(2),
            Card::new("Reckless", "Blade").with_level(2),
            Card::new("Book of Ava", "Codex").with_level(1),
        ])
    }

    #[test]
    fn test_domains_sorted_distinct() {
        let catalog = sample();
        assert_eq!(catalog.domains(), &["Arcana", "Blade", "Codex"].map(String::from));
    }

    #[test]
    fn test_query_filters() {
        let catalog = sample();

        fn names(cards: Vec<&Card>) -> Vec<String> {
            cards.into_iter().map(|c| c.name.clone()).collect()
        }

        assert_eq!(
            names(catalog.query("", "Arcana", 10)),
            vec!["Rune Ward", "Wall Walk", "Cinder Grasp"]
        );
        assert_eq!(names(catalog.query("WA", "", 10)), vec!["Rune Ward", "Wall Walk"]);
        assert_eq!(names(catalog.query("", "", 1)).len(), 4);
        assert!(catalog.query("", "", 0).is_empty());
        assert!(catalog.query("", "arcana", 10).is_empty());
    }

    #[test]
    fn test_blank_domains_not_listed() {
        let catalog = CardCatalog::from_json(
            r#"[{"name":"A","domain":""},{"name":"B","domain":"Blade"},{"name":"C"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.domains(), &["Blade", UNKNOWN_DOMAIN].map(String::from));
        assert!(catalog.domains().iter().all(|d| !d.is_empty()));
        assert_eq!(catalog.query("", UNKNOWN_DOMAIN, 10).len(), 2);

        let direct = CardCatalog::from_cards(vec![Card::new("X", "")]);
        assert!(direct.domains().is_empty());
        assert_eq!(direct.len(), 1);
    }

    #[test]
    fn test_get() {
        let catalog = sample();
        assert_eq!(catalog.get("Reckless").map(|c| c.level), Some(2));
        assert!(catalog.get("Removed Card").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let catalog = CardCatalog::from_cards(vec![
            Card::new("A", "Bone"),
            Card::new("A", "Sage").with_level(3),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A").map(|c| c.domain.as_str()), Some("Bone"));
    }

    #[test]
    fn test_eligible_for_class() {
        let catalog = sample();
        let chosen = vec!["Rune Ward".to_string()];

        // Druid draws from Sage and Arcana.
        let eligible = catalog.eligible_for(ClassName::Druid, Level::new(1), &chosen);
        let names: Vec<_> = eligible.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Wall Walk"]);

        let eligible = catalog.eligible_for(ClassName::Druid, Level::new(2), &chosen);
        assert_eq!(eligible.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CardCatalog::from_json("not json").is_err());
        assert!(CardCatalog::from_json(r#"{"deck": []}"#).is_err());
        assert_eq!(CardCatalog::from_json("[]").unwrap().len(), 0);
    }
}
