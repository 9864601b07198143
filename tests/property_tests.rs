//! Property tests for store and catalog invariants.

use proptest::prelude::*;

use daggerheart_builder::{Card, CardCatalog, DraftField, Level, LevelStore};

fn arb_card() -> impl Strategy<Value = Card> {
    (
        "[A-Za-z ]{1,12}",
        prop::sample::select(vec!["Arcana", "Blade", "Bone", "Codex", "Grace"]),
        1u32..=10,
    )
        .prop_map(|(name, domain, level)| Card::new(name, domain).with_level(level))
}

proptest! {
    #[test]
    fn set_level_always_in_range(n in any::<i64>()) {
        let mut store = LevelStore::new();
        let level = store.set_level(n);
        prop_assert!(level >= Level::MIN && level <= Level::MAX);
        prop_assert_eq!(store.meta().level, level);
        prop_assert_eq!(store.current().level(), level);
    }

    #[test]
    fn toggle_twice_is_identity(
        initial in prop::collection::vec("[a-e]{1,2}", 0..6),
        name in "[a-g]{1,2}",
    ) {
        let mut store = LevelStore::new();
        for card in &initial {
            if !store.current().has_card(card) {
                store.toggle_card(card);
            }
        }
        let before = store.current().cards().to_vec();

        store.toggle_card(&name);
        store.toggle_card(&name);

        if before.contains(&name) {
            // Removing then re-adding moves the card to the end.
            let mut expected: Vec<_> = before.iter().filter(|c| **c != name).cloned().collect();
            expected.push(name.clone());
            prop_assert_eq!(store.current().cards(), expected.as_slice());
        } else {
            prop_assert_eq!(store.current().cards(), before.as_slice());
        }
    }

    #[test]
    fn lock_is_isolated_from_later_edits(hp in "[0-9a-z]{0,3}", card in "[a-z]{1,8}") {
        let mut store = LevelStore::new();
        store.toggle_card("Anchor");
        let level = store.lock();
        let frozen = store.snapshot(level).unwrap().clone();

        store.set_field(DraftField::Hp, &hp);
        store.toggle_card(&card);
        store.toggle_card("Anchor");

        prop_assert_eq!(store.snapshot(level).unwrap(), &frozen);
    }

    #[test]
    fn query_respects_max_level(
        cards in prop::collection::vec(arb_card(), 0..20),
        max_level in 0u32..12,
        text in "[a-z]{0,2}",
    ) {
        let catalog = CardCatalog::from_cards(cards);
        let result = catalog.query(&text, "", max_level);

        prop_assert!(result.iter().all(|c| c.level <= max_level));
        if max_level == 0 {
            prop_assert!(result.is_empty());
        }

        // Stable: results appear in catalog order.
        let positions: Vec<_> = result
            .iter()
            .map(|c| catalog.cards().iter().position(|k| k.name == c.name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
