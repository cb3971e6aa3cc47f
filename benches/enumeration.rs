use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use relicforge::catalog::color::Color;
use relicforge::catalog::effect::Effect;
use relicforge::catalog::index::Catalog;
use relicforge::catalog::item::ItemKind;
use relicforge::catalog::stacking::Stacking;
use relicforge::catalog::vessel::Pattern;
use relicforge::scoring::scorer::Scorer;
use relicforge::search::candidates::Candidates;
use relicforge::search::pairing;
use relicforge::search::triples;
use relicforge::store::inventory::Inventory;
use relicforge::store::relic::EffectRef;
use relicforge::store::relic::Relic;
use relicforge::wishlist::entry::Wish;
use relicforge::wishlist::entry::Wishlist;
use relicforge::wishlist::priority::Priority;
use relicforge::wishlist::tables::Tables;
use std::cmp::Reverse;
use std::collections::BTreeMap;

const KEYS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn relic(id: u32, color: Color, kind: ItemKind, keys: &[&str]) -> Relic {
    Relic {
        id,
        item_key: "BeastBone".to_string(),
        item_color: color,
        item_type: kind,
        effects: keys
            .iter()
            .map(|key| {
                vec![EffectRef {
                    key: key.to_string(),
                    name_en: String::new(),
                    name_ja: String::new(),
                }]
            })
            .collect(),
    }
}

/// 120 ordinary and 120 deep relics spread over the four colors, each
/// carrying a rotating pair of the six wished effects
fn world() -> (Inventory, Scorer, Tables) {
    let catalog = Catalog::from((
        KEYS.iter()
            .enumerate()
            .map(|(id, key)| {
                (
                    id as u32,
                    Effect {
                        key: key.to_string(),
                        name_en: None,
                        name_ja: None,
                        stacking: match id % 3 {
                            0 => Stacking::Stackable,
                            1 => Stacking::NonStackable,
                            _ => Stacking::Conditional,
                        },
                    },
                )
            })
            .collect::<BTreeMap<_, _>>(),
        BTreeMap::new(),
        vec![],
        vec![],
    ));
    let wishes = Wishlist {
        effects: KEYS
            .iter()
            .map(|key| Wish {
                key: Some(key.to_string()),
                name_en: None,
                name_ja: None,
                priority: Priority::Preferred,
                rank: 0,
                exclude: false,
            })
            .collect(),
    };
    let mut relics = Vec::new();
    for kind in [ItemKind::Relic, ItemKind::DeepRelic] {
        for n in 0..120usize {
            let color = Color::ALL[n % 4];
            let keys = [KEYS[n % 6], KEYS[(n + 1) % 6]];
            relics.push(relic(relics.len() as u32 + 1, color, kind, &keys));
        }
    }
    let inventory = Inventory {
        character_name: String::new(),
        relics,
    };
    let tables = Tables::resolve(&wishes, &inventory, &catalog).unwrap();
    let scorer = Scorer::from((&inventory, &tables));
    (inventory, scorer, tables)
}

fn exhausting_uniform_triples(c: &mut Criterion) {
    let (inventory, scorer, tables) = world();
    let pool = (0..inventory.relics.len())
        .filter(|&n| !inventory.relics[n].item_type.deep())
        .collect::<Vec<usize>>();
    let pattern = Pattern([Color::Red.into(); 3]);
    let candidates = Candidates::build(&pattern, &pool, &inventory.relics, &scorer, 30);
    c.bench_function("exhaust C(30,3) uniform triples", |b| {
        b.iter(|| black_box(triples::enumerate(&pattern, &candidates, &scorer, &tables)))
    });
}

fn exhausting_mixed_triples(c: &mut Criterion) {
    let (inventory, scorer, tables) = world();
    let pool = (0..inventory.relics.len())
        .filter(|&n| !inventory.relics[n].item_type.deep())
        .collect::<Vec<usize>>();
    let pattern = Pattern([
        Color::Red.into(),
        relicforge::catalog::color::Slot::Any,
        relicforge::catalog::color::Slot::Any,
    ]);
    let candidates = Candidates::build(&pattern, &pool, &inventory.relics, &scorer, 15);
    c.bench_function("exhaust mixed-shape triples with dedup", |b| {
        b.iter(|| black_box(triples::enumerate(&pattern, &candidates, &scorer, &tables)))
    });
}

fn pairing_both_sides(c: &mut Criterion) {
    let (inventory, scorer, tables) = world();
    let pattern = Pattern([Color::Red.into(); 3]);
    let mut sides = [false, true].map(|deep| {
        let pool = (0..inventory.relics.len())
            .filter(|&n| inventory.relics[n].item_type.deep() == deep)
            .collect::<Vec<usize>>();
        let candidates = Candidates::build(&pattern, &pool, &inventory.relics, &scorer, 15);
        triples::enumerate(&pattern, &candidates, &scorer, &tables)
    });
    for side in sides.iter_mut() {
        side.sort_by_key(|t| Reverse(t.score));
        side.truncate(500);
    }
    let [normal, deep] = sides;
    c.bench_function("pair 500x500 triples into a top-10 heap", |b| {
        b.iter(|| black_box(pairing::pair(&normal, &deep, &tables, 10)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .without_plots()
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        exhausting_uniform_triples,
        exhausting_mixed_triples,
        pairing_both_sides,
}
criterion_main!(benches);
