//! Character classes and their SRD reference data.
//!
//! The builder does not enforce any of this data. It is exposed so callers
//! can show starting values and restrict card choices to class domains.

use serde::{Deserialize, Serialize};

use super::traits::Trait;

/// One of the nine playable classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassName {
    Bard,
    Druid,
    Guardian,
    Ranger,
    Rogue,
    Seraph,
    Sorcerer,
    Warrior,
    Wizard,
}

/// Static reference data for a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassInfo {
    /// Starting hit points.
    pub hp: i32,
    /// Starting evasion.
    pub evasion: i32,
    /// The two card domains the class draws from.
    pub domains: [&'static str; 2],
    /// The two subclasses.
    pub subclasses: [&'static str; 2],
    /// Trait recommended for the +2 modifier.
    pub primary_trait: Trait,
}

impl ClassName {
    /// All classes in alphabetical order.
    pub const ALL: [ClassName; 9] = [
        ClassName::Bard,
        ClassName::Druid,
        ClassName::Guardian,
        ClassName::Ranger,
        ClassName::Rogue,
        ClassName::Seraph,
        ClassName::Sorcerer,
        ClassName::Warrior,
        ClassName::Wizard,
    ];

    /// Display name, also the persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ClassName::Bard => "Bard",
            ClassName::Druid => "Druid",
            ClassName::Guardian => "Guardian",
            ClassName::Ranger => "Ranger",
            ClassName::Rogue => "Rogue",
            ClassName::Seraph => "Seraph",
            ClassName::Sorcerer => "Sorcerer",
            ClassName::Warrior => "Warrior",
            ClassName::Wizard => "Wizard",
        }
    }

    /// Parse a class name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(text))
    }

    /// SRD reference data for this class.
    #[must_use]
    pub const fn info(self) -> ClassInfo {
        let (hp, evasion, domains, subclasses, primary_trait) = match self {
            ClassName::Bard => (
                5,
                10,
                ["Grace", "Codex"],
                ["Troubadour", "Wordsmith"],
                Trait::Presence,
            ),
            ClassName::Druid => (
                6,
                10,
                ["Sage", "Arcana"],
                ["Warden of the Elements", "Warden of Renewal"],
                Trait::Instinct,
            ),
            ClassName::Guardian => (
                7,
                9,
                ["Valor", "Blade"],
                ["Stalwart", "Vengeance"],
                Trait::Strength,
            ),
            ClassName::Ranger => (
                6,
                12,
                ["Bone", "Sage"],
                ["Beastbound", "Wayfinder"],
                Trait::Agility,
            ),
            ClassName::Rogue => (
                6,
                12,
                ["Midnight", "Grace"],
                ["Nightwalker", "Syndicate"],
                Trait::Finesse,
            ),
            ClassName::Seraph => (
                7,
                9,
                ["Splendor", "Valor"],
                ["Divine Wielder", "Winged Sentinel"],
                Trait::Strength,
            ),
            ClassName::Sorcerer => (
                6,
                10,
                ["Arcana", "Midnight"],
                ["Elemental Origin", "Primal Origin"],
                Trait::Instinct,
            ),
            ClassName::Warrior => (
                6,
                11,
                ["Blade", "Bone"],
                ["Call of the Brave", "Call of the Slayer"],
                Trait::Strength,
            ),
            ClassName::Wizard => (
                5,
                11,
                ["Codex", "Splendor"],
                ["School of Knowledge", "School of War"],
                Trait::Knowledge,
            ),
        };
        ClassInfo {
            hp,
            evasion,
            domains,
            subclasses,
            primary_trait,
        }
    }

    /// Whether `subclass` belongs to this class.
    #[must_use]
    pub fn has_subclass(self, subclass: &str) -> bool {
        self.info().subclasses.iter().any(|s| *s == subclass)
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ClassName::parse("Wizard"), Some(ClassName::Wizard));
        assert_eq!(ClassName::parse("  seraph "), Some(ClassName::Seraph));
        assert_eq!(ClassName::parse("Paladin"), None);
        assert_eq!(ClassName::parse(""), None);
    }

    #[test]
    fn test_info() {
        let guardian = ClassName::Guardian.info();
        assert_eq!(guardian.hp, 7);
        assert_eq!(guardian.evasion, 9);
        assert_eq!(guardian.domains, ["Valor", "Blade"]);

        assert!(ClassName::Ranger.has_subclass("Wayfinder"));
        assert!(!ClassName::Ranger.has_subclass("Stalwart"));
    }

    #[test]
    fn test_every_class_round_trips_by_name() {
        for class in ClassName::ALL {
            assert_eq!(ClassName::parse(class.as_str()), Some(class));
        }
    }
}
