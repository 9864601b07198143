use criterion::{black_box, criterion_group, criterion_main, Criterion};

use daggerheart_builder::{Card, CardCatalog};

const DOMAINS: [&str; 9] = [
    "Arcana", "Blade", "Bone", "Codex", "Grace", "Midnight", "Sage", "Splendor", "Valor",
];

fn full_catalog() -> CardCatalog {
    let cards = (0..189u32)
        .map(|i| {
            Card::new(format!("Card {i}"), DOMAINS[i as usize % DOMAINS.len()])
                .with_level(i % 10 + 1)
        })
        .collect();
    CardCatalog::from_cards(cards)
}

fn bench_query(c: &mut Criterion) {
    let catalog = full_catalog();

    c.bench_function("query_unfiltered", |b| {
        b.iter(|| catalog.query(black_box(""), black_box(""), black_box(10)).len())
    });
    c.bench_function("query_text_domain_level", |b| {
        b.iter(|| catalog.query(black_box("card 1"), black_box("Codex"), black_box(4)).len())
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
