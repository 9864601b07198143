//! Built-in fallback catalog used when no card source can be read.

use super::definition::Card;

/// The six built-in cards, in catalog order.
#[must_use]
pub fn builtin_cards() -> Vec<Card> {
    vec![
        Card::new("Rune Ward", "Arcana")
            .with_type("Spell")
            .with_recall_cost(0)
            .with_description(
                "Hold a protective trinket; spend Hope to reduce incoming damage to an ally.",
            ),
        Card::new("Get Back Up", "Blade")
            .with_type("Ability")
            .with_recall_cost(1)
            .with_description(
                "When you take Severe damage, mark a Stress to reduce it by one threshold.",
            ),
        Card::new("Deft Maneuvers", "Bone")
            .with_type("Ability")
            .with_recall_cost(0)
            .with_description("Once per rest, mark a Stress to sprint anywhere within Far range."),
        Card::new("Book of Ava", "Codex")
            .with_type("Grimoire")
            .with_recall_cost(2)
            .with_description("A grimoire of warding and frost spells."),
        Card::new("Inspirational Words", "Grace")
            .with_type("Ability")
            .with_recall_cost(1)
            .with_description("Gain tokens after a long rest and spend them to aid allies."),
        Card::new("Bolt Beacon", "Splendor")
            .with_type("Spell")
            .with_recall_cost(1)
            .with_description("Spend Hope to send a bolt of light at a target within Far range."),
    ]
}
