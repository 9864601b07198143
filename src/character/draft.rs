//! Level drafts and locked snapshots.
//!
//! A `LevelDraft` is the editable working copy for one level. Locking it
//! produces a `LevelSnapshot`, a frozen copy that exposes read access only.
//!
//! ## Field paths
//!
//! Drafts are edited one field at a time through `DraftField`. String paths
//! (`"traits.agility"`, `"heritage.community"`, `"experiences.1"`) parse into
//! the same enum for UI glue that works with text identifiers.

use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::error::BuilderError;
use crate::core::Level;

use super::class::ClassName;
use super::traits::{Trait, TraitScores};

/// Default hit points for a fresh draft.
pub const DEFAULT_HP: i32 = 6;

/// Default evasion for a fresh draft.
pub const DEFAULT_EVASION: i32 = 10;

/// Default trait modifier.
pub const DEFAULT_TRAIT: i32 = 0;

/// Number of experience slots on a draft.
pub const EXPERIENCE_SLOTS: usize = 2;

/// Ancestry plus community.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Heritage {
    pub ancestry: String,
    pub community: String,
    pub features: String,
}

/// Up to two free-text experiences.
pub type Experiences = SmallVec<[String; EXPERIENCE_SLOTS]>;

/// One editable field of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Class,
    Subclass,
    Trait(Trait),
    Hp,
    Evasion,
    Ancestry,
    Community,
    Features,
    /// Experience slot, 0 or 1.
    Experience(usize),
}

impl FromStr for DraftField {
    type Err = BuilderError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || BuilderError::UnknownField(path.to_string());
        let field = match path.trim().split_once('.') {
            None => match path.trim() {
                "class" => DraftField::Class,
                "subclass" => DraftField::Subclass,
                "hp" => DraftField::Hp,
                "evasion" => DraftField::Evasion,
                _ => return Err(unknown()),
            },
            Some(("traits", name)) => DraftField::Trait(Trait::from_key(name).ok_or_else(unknown)?),
            Some(("heritage", "ancestry")) => DraftField::Ancestry,
            Some(("heritage", "community")) => DraftField::Community,
            Some(("heritage", "features")) => DraftField::Features,
            Some(("experiences", slot)) => {
                let slot: usize = slot.parse().map_err(|_| unknown())?;
                if slot >= EXPERIENCE_SLOTS {
                    return Err(unknown());
                }
                DraftField::Experience(slot)
            }
            Some(_) => return Err(unknown()),
        };
        Ok(field)
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftField::Class => f.write_str("class"),
            DraftField::Subclass => f.write_str("subclass"),
            DraftField::Trait(t) => write!(f, "traits.{}", t.key()),
            DraftField::Hp => f.write_str("hp"),
            DraftField::Evasion => f.write_str("evasion"),
            DraftField::Ancestry => f.write_str("heritage.ancestry"),
            DraftField::Community => f.write_str("heritage.community"),
            DraftField::Features => f.write_str("heritage.features"),
            DraftField::Experience(slot) => write!(f, "experiences.{slot}"),
        }
    }
}

/// Mutable working copy of one level's configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelDraft {
    level: Level,
    #[serde(serialize_with = "serialize_class")]
    class: Option<ClassName>,
    subclass: String,
    traits: TraitScores,
    hp: i32,
    evasion: i32,
    heritage: Heritage,
    experiences: Experiences,
    cards: Vec<String>,
}

fn serialize_class<S: Serializer>(class: &Option<ClassName>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(class.map(ClassName::as_str).unwrap_or(""))
}

impl LevelDraft {
    /// Fresh draft for `level` with every field at its default.
    #[must_use]
    pub fn template(level: Level) -> Self {
        Self {
            level,
            class: None,
            subclass: String::new(),
            traits: TraitScores::default(),
            hp: DEFAULT_HP,
            evasion: DEFAULT_EVASION,
            heritage: Heritage::default(),
            experiences: Experiences::new(),
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn class(&self) -> Option<ClassName> {
        self.class
    }

    #[must_use]
    pub fn subclass(&self) -> &str {
        &self.subclass
    }

    #[must_use]
    pub fn traits(&self) -> &TraitScores {
        &self.traits
    }

    #[must_use]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    #[must_use]
    pub fn evasion(&self) -> i32 {
        self.evasion
    }

    #[must_use]
    pub fn heritage(&self) -> &Heritage {
        &self.heritage
    }

    #[must_use]
    pub fn experiences(&self) -> &[String] {
        &self.experiences
    }

    /// Selected card names in selection order.
    #[must_use]
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Whether `name` is currently selected.
    #[must_use]
    pub fn has_card(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c == name)
    }

    /// Apply raw form input to one field.
    ///
    /// Numeric fields coerce unparsable or empty input to their default.
    /// Class text that names no known class clears the class.
    pub fn apply(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Class => self.class = ClassName::parse(value),
            DraftField::Subclass => self.subclass = value.to_string(),
            DraftField::Trait(t) => self.traits.set(t, coerce_int(value, DEFAULT_TRAIT)),
            DraftField::Hp => self.hp = coerce_int(value, DEFAULT_HP),
            DraftField::Evasion => self.evasion = coerce_int(value, DEFAULT_EVASION),
            DraftField::Ancestry => self.heritage.ancestry = value.to_string(),
            DraftField::Community => self.heritage.community = value.to_string(),
            DraftField::Features => self.heritage.features = value.to_string(),
            DraftField::Experience(slot) => self.set_experience(slot, value),
        }
    }

    fn set_experience(&mut self, slot: usize, value: &str) {
        if slot >= EXPERIENCE_SLOTS {
            tracing::debug!(slot, "ignoring out-of-range experience slot");
            return;
        }
        while self.experiences.len() <= slot {
            self.experiences.push(String::new());
        }
        self.experiences[slot] = value.to_string();
    }

    /// Select `name` if absent, deselect it if present.
    ///
    /// Returns true if the card is selected afterwards.
    pub fn toggle_card(&mut self, name: &str) -> bool {
        if let Some(pos) = self.cards.iter().position(|c| c == name) {
            self.cards.remove(pos);
            false
        } else {
            self.cards.push(name.to_string());
            true
        }
    }

    /// Rebuild a draft from a persisted JSON value, field by field.
    ///
    /// Missing or malformed fields take their defaults. The level is always
    /// `level`, whatever the value claims.
    pub(crate) fn from_value(value: &Value, level: Level) -> Self {
        let mut draft = Self::template(level);
        let Some(obj) = value.as_object() else {
            tracing::debug!(%level, "draft is not an object, using template");
            return draft;
        };

        draft.class = obj.get("class").and_then(Value::as_str).and_then(ClassName::parse);
        draft.subclass = string_or_empty(obj.get("subclass"));
        if let Some(traits) = obj.get("traits").and_then(Value::as_object) {
            for t in Trait::ALL {
                draft.traits.set(t, int_or(traits.get(t.key()), DEFAULT_TRAIT));
            }
        }
        draft.hp = int_or(obj.get("hp"), DEFAULT_HP);
        draft.evasion = int_or(obj.get("evasion"), DEFAULT_EVASION);
        if let Some(heritage) = obj.get("heritage").and_then(Value::as_object) {
            draft.heritage = Heritage {
                ancestry: string_or_empty(heritage.get("ancestry")),
                community: string_or_empty(heritage.get("community")),
                features: string_or_empty(heritage.get("features")),
            };
        }
        if let Some(experiences) = obj.get("experiences").and_then(Value::as_array) {
            draft.experiences = experiences
                .iter()
                .take(EXPERIENCE_SLOTS)
                .map(|v| string_or_empty(Some(v)))
                .collect();
        }
        if let Some(cards) = obj.get("cards").and_then(Value::as_array) {
            for name in cards.iter().filter_map(Value::as_str) {
                if !draft.has_card(name) {
                    draft.cards.push(name.to_string());
                }
            }
        }
        draft
    }
}

/// Parse trimmed integer input, falling back to `default`.
fn coerce_int(value: &str, default: i32) -> i32 {
    match value.trim().parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            tracing::debug!(input = value, default, "coercing numeric input to default");
            default
        }
    }
}

fn int_or(value: Option<&Value>, default: i32) -> i32 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

fn string_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// A locked, read-only copy of a draft.
///
/// Never shares structure with the live draft it was taken from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelSnapshot(LevelDraft);

impl LevelSnapshot {
    /// Freeze a draft by copying every field.
    #[must_use]
    pub fn freeze(draft: &LevelDraft) -> Self {
        Self(copy_draft(draft))
    }

    /// Fresh mutable copy for editing; edits never reach this snapshot.
    #[must_use]
    pub fn thaw(&self) -> LevelDraft {
        copy_draft(&self.0)
    }

    /// Read access to the frozen draft.
    #[must_use]
    pub fn draft(&self) -> &LevelDraft {
        &self.0
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.0.level
    }

    pub(crate) fn from_value(value: &Value, level: Level) -> Self {
        Self(LevelDraft::from_value(value, level))
    }
}

fn copy_draft(draft: &LevelDraft) -> LevelDraft {
    LevelDraft {
        level: draft.level,
        class: draft.class,
        subclass: draft.subclass.clone(),
        traits: draft.traits,
        hp: draft.hp,
        evasion: draft.evasion,
        heritage: Heritage {
            ancestry: draft.heritage.ancestry.clone(),
            community: draft.heritage.community.clone(),
            features: draft.heritage.features.clone(),
        },
        experiences: draft.experiences.iter().cloned().collect(),
        cards: draft.cards.iter().cloned().collect(),
    }
}
