use super::triples::Triple;
use crate::Score;
use crate::SubScore;
use crate::wishlist::tables::Tables;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// compact bookkeeping for one six-slot result: indices into the two
/// triple lists and the combined ordering key. the full document
/// object is built only for entries that survive the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paired {
    pub normal: usize,
    pub deep: usize,
    pub required: bool,
    pub score: Score,
    pub sub: SubScore,
    counter: usize,
}

/// the heap root must be the worst kept result: lowest ordering key
/// first, and the newest insertion first among equal keys
impl Ord for Paired {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.required, other.score, other.sub, self.counter).cmp(&(
            self.required,
            self.score,
            self.sub,
            other.counter,
        ))
    }
}

impl PartialOrd for Paired {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// a bounded min-heap of the best n results seen so far. candidates
/// must strictly beat the current worst once the heap fills; evicted
/// entries are dropped promptly.
pub struct TopN {
    heap: BinaryHeap<Paired>,
    limit: usize,
    counter: usize,
}

impl TopN {
    pub fn new(limit: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(limit + 1),
            limit,
            counter: 0,
        }
    }

    /// the key a candidate has to beat, None while the heap has room
    pub fn worst(&self) -> Option<(bool, Score, SubScore)> {
        match self.heap.len() < self.limit {
            true => None,
            false => self.heap.peek().map(|p| (p.required, p.score, p.sub)),
        }
    }

    pub fn offer(&mut self, normal: usize, deep: usize, required: bool, score: Score, sub: SubScore) {
        if let Some(worst) = self.worst() {
            if (required, score, sub) <= worst {
                return;
            }
        }
        self.counter += 1;
        self.heap.push(Paired {
            normal,
            deep,
            required,
            score,
            sub,
            counter: self.counter,
        });
        if self.heap.len() > self.limit {
            self.heap.pop();
        }
    }

    /// drain into best-first order, stable on insertion for equal keys
    pub fn into_sorted(self) -> Vec<Paired> {
        let mut results = self.heap.into_vec();
        results.sort_by(|a, b| {
            (b.required, b.score, b.sub, a.counter).cmp(&(a.required, a.score, a.sub, b.counter))
        });
        results
    }
}

/// cross-pair the two sides against a top-n heap, with admissibility-
/// preserving bounds. both sides must be sorted descending by triple
/// score; merging two triples can only lose points to cross-side
/// duplicate penalties, so n.score + d.score bounds the true score
/// from above and the loops may break as soon as the bound stops
/// beating the heap's worst entry.
pub fn pair(normal: &[Triple], deep: &[Triple], tables: &Tables, limit: usize) -> Vec<Paired> {
    let mut top = TopN::new(limit);
    let Some(best) = deep.first().map(|d| d.score) else {
        return Vec::new();
    };
    let feasible = feasible(normal, deep, tables);
    for (ni, n) in normal.iter().enumerate() {
        if !improves(&top, feasible, n.score + best) {
            break;
        }
        for (di, d) in deep.iter().enumerate() {
            if !improves(&top, feasible, n.score + d.score) {
                break;
            }
            let counts = n.counts.union(&d.counts);
            let score = counts.stacked(tables) + n.concentration + d.concentration
                - n.exclude_weight
                - d.exclude_weight;
            let required =
                counts.covers(tables) && !n.exclude_required && !d.exclude_required;
            let sub = counts.subrank(tables) - n.exclude_subrank - d.exclude_subrank;
            top.offer(ni, di, required, score, sub);
        }
    }
    top.into_sorted()
}

/// can any cross pair still cover the REQUIRED set? if the union of
/// both sides misses a required index, no pairing can meet it and the
/// bound's required flag degrades to false.
fn feasible(normal: &[Triple], deep: &[Triple], tables: &Tables) -> bool {
    tables
        .required
        .iter()
        .all(|&i| normal.iter().chain(deep).any(|t| t.counts.count(i) > 0))
}

/// optimistic bound check against the heap's worst entry. the bound
/// leaves the sub-score side open, so ties on (required, score) never
/// break the loop.
fn improves(top: &TopN, feasible: bool, bound: Score) -> bool {
    match top.worst() {
        None => true,
        Some((required, score, _)) => (feasible, bound) >= (required, score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::color::Color;
    use crate::catalog::effect::Effect;
    use crate::catalog::index::Catalog;
    use crate::catalog::item::ItemKind;
    use crate::catalog::stacking::Stacking;
    use crate::catalog::vessel::Pattern;
    use crate::scoring::scorer::Scorer;
    use crate::search::candidates::Candidates;
    use crate::search::triples;
    use crate::store::inventory::Inventory;
    use crate::store::relic::EffectRef;
    use crate::store::relic::Relic;
    use crate::wishlist::entry::Wish;
    use crate::wishlist::entry::Wishlist;
    use crate::wishlist::priority::Priority;
    use std::cmp::Reverse;

    fn relic(id: crate::RelicId, kind: ItemKind, keys: &[&str]) -> Relic {
        Relic {
            id,
            item_key: "BeastBone".to_string(),
            item_color: Color::Red,
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

    /// a little world with six ordinary and six deep relics carrying
    /// overlapping stackable and non-stackable effects
    fn world() -> (Inventory, Scorer, Tables) {
        let effects = [
            ("A", Stacking::Stackable, Priority::Required),
            ("B", Stacking::NonStackable, Priority::Preferred),
            ("C", Stacking::Conditional, Priority::NiceToHave),
        ];
        let catalog = Catalog::from((
            effects
                .iter()
                .enumerate()
                .map(|(id, (key, stacking, _))| {
                    (
                        id as crate::EffectId,
                        Effect {
                            key: key.to_string(),
                            name_en: None,
                            name_ja: None,
                            stacking: *stacking,
                        },
                    )
                })
                .collect(),
            Default::default(),
            vec![],
            vec![],
        ));
        let wishlist = Wishlist {
            effects: effects
                .iter()
                .map(|(key, _, priority)| Wish {
                    key: Some(key.to_string()),
                    name_en: None,
                    name_ja: None,
                    priority: *priority,
                    rank: 0,
                    exclude: false,
                })
                .collect(),
        };
        let keysets: [&[&str]; 6] = [&["A", "B"], &["A"], &["B", "C"], &["C"], &["A", "C"], &[]];
        let mut relics = Vec::new();
        for (i, keys) in keysets.iter().enumerate() {
            relics.push(relic(i as crate::RelicId + 1, ItemKind::Relic, keys));
        }
        for (i, keys) in keysets.iter().enumerate() {
            relics.push(relic(i as crate::RelicId + 101, ItemKind::DeepRelic, keys));
        }
        let inventory = Inventory {
            character_name: String::new(),
            relics,
        };
        let tables = Tables::resolve(&wishlist, &inventory, &catalog).unwrap();
        let scorer = Scorer::from((&inventory, &tables));
        (inventory, scorer, tables)
    }

    fn side(inventory: &Inventory, scorer: &Scorer, tables: &Tables, deep: bool) -> Vec<Triple> {
        let pool = (0..inventory.relics.len())
            .filter(|&n| inventory.relics[n].item_type.deep() == deep)
            .collect::<Vec<usize>>();
        let pattern = Pattern([Color::Red.into(); 3]);
        let candidates = Candidates::build(&pattern, &pool, &inventory.relics, scorer, 30);
        let mut triples = triples::enumerate(&pattern, &candidates, scorer, tables);
        triples.sort_by_key(|t| Reverse(t.score));
        triples
    }

    /// the heap with bounds must agree with an exhaustive cross product
    #[test]
    fn matches_brute_force() {
        let (inventory, scorer, tables) = world();
        let normal = side(&inventory, &scorer, &tables, false);
        let deep = side(&inventory, &scorer, &tables, true);
        let pruned = pair(&normal, &deep, &tables, 5);
        let mut brute = Vec::new();
        for n in &normal {
            for d in &deep {
                let counts = n.counts.union(&d.counts);
                let score = counts.stacked(&tables) + n.concentration + d.concentration
                    - n.exclude_weight
                    - d.exclude_weight;
                let required = counts.covers(&tables);
                let sub = counts.subrank(&tables);
                brute.push((required, score, sub));
            }
        }
        brute.sort_by(|a, b| b.cmp(a));
        assert_eq!(pruned.len(), 5);
        for (paired, expected) in pruned.iter().zip(brute.iter()) {
            assert_eq!((paired.required, paired.score, paired.sub), *expected);
        }
    }

    #[test]
    fn results_are_sorted_and_distinct_keys_strictly_descend() {
        let (inventory, scorer, tables) = world();
        let normal = side(&inventory, &scorer, &tables, false);
        let deep = side(&inventory, &scorer, &tables, true);
        let results = pair(&normal, &deep, &tables, 10);
        let keys = results
            .iter()
            .map(|p| (p.required, p.score, p.sub))
            .collect::<Vec<_>>();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn empty_side_pairs_to_nothing() {
        let (_, _, tables) = world();
        assert!(pair(&[], &[], &tables, 10).is_empty());
    }

    #[test]
    fn heap_rejects_ties_when_full() {
        let mut top = TopN::new(1);
        top.offer(0, 0, true, 10, 5);
        top.offer(1, 1, true, 10, 5);
        let results = top.into_sorted();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].normal, 0);
    }

    #[test]
    fn heap_keeps_the_best_n() {
        let mut top = TopN::new(2);
        top.offer(0, 0, false, 1, 0);
        top.offer(1, 0, false, 3, 0);
        top.offer(2, 0, false, 2, 0);
        top.offer(3, 0, true, 0, 0);
        let results = top.into_sorted();
        assert_eq!(
            results
                .iter()
                .map(|p| (p.required, p.score))
                .collect::<Vec<_>>(),
            vec![(true, 0), (false, 3)]
        );
    }
}
