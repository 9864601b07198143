//! Optional suggestions for filling in a draft.
//!
//! Nothing here is applied automatically or enforced; callers feed the
//! results through `LevelStore::set_field` like any other input.
//! [`progression`] describes what each level grants.

pub mod progression;

pub use progression::{
    advancement_options, advancement_picks, level_gains, proficiency, subclass_upgrade,
    tier_achievement, Advancement, LevelGains, SubclassUpgrade, TierAchievement,
    ADVANCEMENTS_PER_LEVEL,
};

use crate::character::{ClassName, Heritage, Trait, TraitScores};
use crate::core::BuildRng;

/// Starting trait modifiers, highest first.
pub const TRAIT_MODIFIERS: [i32; 6] = [2, 1, 1, 0, 0, -1];

/// Order in which non-primary traits receive the remaining modifiers.
pub const RECOMMENDATION_ORDER: [Trait; 6] = [
    Trait::Strength,
    Trait::Finesse,
    Trait::Agility,
    Trait::Instinct,
    Trait::Presence,
    Trait::Knowledge,
];

/// Ancestries with their two feature names.
pub const ANCESTRIES: [(&str, [&str; 2]); 18] = [
    ("Clank", ["Purposeful Design", "Efficient"]),
    ("Drakona", ["Scales", "Elemental Breath"]),
    ("Dwarf", ["Thick Skin", "Increased Fortitude"]),
    ("Elf", ["Quick Reactions", "Celestial Trance"]),
    ("Faerie", ["Luckbender", "Wings"]),
    ("Faun", ["Caprine Leap", "Kick"]),
    ("Firbolg", ["Charge", "Unshakable"]),
    ("Fungril", ["Fungril Network", "Death Connection"]),
    ("Galapa", ["Shell", "Retract"]),
    ("Giant", ["Reach", "Endurance"]),
    ("Goblin", ["Surefooted", "Danger Sense"]),
    ("Halfling", ["Luckbringer", "Internal Compass"]),
    ("Human", ["High Stamina", "Adaptability"]),
    ("Infernis", ["Fearless", "Dread Visage"]),
    ("Katari", ["Feline Instincts", "Retracting Claws"]),
    ("Orc", ["Aggressive", "Powerful Build"]),
    ("Ribbet", ["Amphibious", "Sticky Tongue"]),
    ("Simiah", ["Prehensile Tail", "Nimble"]),
];

/// Communities with their feature name.
pub const COMMUNITIES: [(&str, &str); 9] = [
    ("Highborne", "Privilege"),
    ("Loreborne", "Well-Read"),
    ("Orderborne", "Dedicated"),
    ("Ridgeborne", "Steady"),
    ("Seaborne", "Know the Tide"),
    ("Slyborne", "Scoundrel"),
    ("Underborne", "Low-Light Living"),
    ("Wanderborne", "Nomadic Pack"),
    ("Wildborne", "Lightfoot"),
];

/// Recommended starting traits for a class.
///
/// The class's primary trait gets +2; the rest receive +1, +1, 0, 0, -1 in
/// [`RECOMMENDATION_ORDER`].
#[must_use]
pub fn recommend_traits(class: ClassName) -> TraitScores {
    let primary = class.info().primary_trait;
    let order = std::iter::once(primary)
        .chain(RECOMMENDATION_ORDER.into_iter().filter(|t| *t != primary));

    let mut scores = TraitScores::default();
    for (t, modifier) in order.zip(TRAIT_MODIFIERS) {
        scores.set(t, modifier);
    }
    scores
}

/// Roll a random ancestry and community.
///
/// `features` lists the ancestry's two features and the community feature.
pub fn roll_heritage(rng: &BuildRng) -> Heritage {
    let mut ancestry_rng = rng.for_context("ancestry");
    let mut community_rng = rng.for_context("community");
    let (ancestry, [first, second]) = ANCESTRIES[ancestry_rng.gen_range_usize(0..ANCESTRIES.len())];
    let (community, community_feature) =
        COMMUNITIES[community_rng.gen_range_usize(0..COMMUNITIES.len())];

    Heritage {
        ancestry: ancestry.to_string(),
        community: community.to_string(),
        features: format!("{first}, {second}, {community_feature}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_traits() {
        let scores = recommend_traits(ClassName::Wizard);
        assert_eq!(scores.get(Trait::Knowledge), 2);
        assert_eq!(scores.get(Trait::Strength), 1);
        assert_eq!(scores.get(Trait::Finesse), 1);
        assert_eq!(scores.get(Trait::Agility), 0);
        assert_eq!(scores.get(Trait::Instinct), 0);
        assert_eq!(scores.get(Trait::Presence), -1);
    }

    #[test]
    fn test_recommend_traits_primary_early_in_order() {
        // Guardian's primary is Strength, so Finesse and Agility take the +1s.
        let scores = recommend_traits(ClassName::Guardian);
        assert_eq!(scores.get(Trait::Strength), 2);
        assert_eq!(scores.get(Trait::Finesse), 1);
        assert_eq!(scores.get(Trait::Agility), 1);
        assert_eq!(scores.get(Trait::Instinct), 0);
        assert_eq!(scores.get(Trait::Presence), 0);
        assert_eq!(scores.get(Trait::Knowledge), -1);
    }

    #[test]
    fn test_recommend_traits_always_uses_standard_array() {
        for class in ClassName::ALL {
            let mut values: Vec<_> = recommend_traits(class).iter().map(|(_, v)| v).collect();
            values.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(values, TRAIT_MODIFIERS);
        }
    }

    #[test]
    fn test_roll_heritage_deterministic() {
        let a = roll_heritage(&BuildRng::new(99));
        let b = roll_heritage(&BuildRng::new(99));
        assert_eq!(a, b);

        assert!(ANCESTRIES.iter().any(|(name, _)| *name == a.ancestry));
        assert!(COMMUNITIES.iter().any(|(name, _)| *name == a.community));
        assert_eq!(a.features.split(", ").count(), 3);
    }
}
