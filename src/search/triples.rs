use super::candidates::Candidates;
use crate::Score;
use crate::SubScore;
use crate::Weight;
use crate::catalog::color::Slot;
use crate::catalog::vessel::Pattern;
use crate::scoring::combo::Counts;
use crate::scoring::scorer::Scorer;
use crate::wishlist::tables::Tables;
use std::collections::HashSet;

/// a scored three-relic subset in compact form: the aggregate count
/// vector plus the per-relic additive constants. this is enough to
/// re-score any six-slot pairing without touching the relics again.
#[derive(Debug, Clone)]
pub struct Triple {
    pub relics: [usize; 3],
    pub counts: Counts,
    pub concentration: Score,
    pub exclude_weight: Weight,
    pub exclude_subrank: SubScore,
    pub exclude_required: bool,
    pub score: Score,
}

impl Triple {
    fn assemble(relics: [usize; 3], scorer: &Scorer, tables: &Tables) -> Self {
        let mut counts = Counts::empty(tables.include.len());
        let mut concentration = 0;
        let mut exclude_weight = 0;
        let mut exclude_required = false;
        let mut excludes = Vec::<u16>::new();
        for &n in &relics {
            let profile = scorer.profile(n);
            counts.absorb(profile);
            concentration += profile.concentration;
            exclude_weight += profile.exclude_weight;
            exclude_required |= profile.exclude_required;
            for &j in &profile.excludes {
                if !excludes.contains(&j) {
                    excludes.push(j);
                }
            }
        }
        let exclude_subrank = excludes
            .iter()
            .map(|&j| tables.exclude[j as usize].sub_rank)
            .sum();
        let score = counts.stacked(tables) + concentration - exclude_weight;
        Self {
            relics,
            counts,
            concentration,
            exclude_weight,
            exclude_subrank,
            exclude_required,
            score,
        }
    }

    pub fn required_met(&self, tables: &Tables) -> bool {
        self.counts.covers(tables) && !self.exclude_required
    }

    pub fn sub_score(&self, tables: &Tables) -> SubScore {
        self.counts.subrank(tables) - self.exclude_subrank
    }
}

/// the specialized pattern shapes. Any-bearing mixes fall through to
/// the general dedup path.
enum Shape {
    Uniform,
    Distinct,
    PairPlusOne { pair: usize, one: usize },
    Mixed,
}

impl From<&Pattern> for Shape {
    fn from(pattern: &Pattern) -> Self {
        let [a, b, c] = pattern.0;
        if a == b && b == c {
            Self::Uniform
        } else if matches!((a, b, c), (Slot::Color(_), Slot::Color(_), Slot::Color(_))) {
            if a != b && b != c && a != c {
                Self::Distinct
            } else if a == b {
                Self::PairPlusOne { pair: 0, one: 2 }
            } else if a == c {
                Self::PairPlusOne { pair: 0, one: 1 }
            } else {
                Self::PairPlusOne { pair: 1, one: 0 }
            }
        } else {
            Self::Mixed
        }
    }
}

/// enumerate every distinct relic triple admitted by the pattern,
/// scored inline. slot lists come pre-sorted from the candidate
/// builder, so the output order is deterministic.
pub fn enumerate(
    pattern: &Pattern,
    candidates: &Candidates,
    scorer: &Scorer,
    tables: &Tables,
) -> Vec<Triple> {
    let mut triples = Vec::new();
    match Shape::from(pattern) {
        Shape::Uniform => {
            let pool = &candidates.0[0];
            for i in 0..pool.len() {
                for j in i + 1..pool.len() {
                    for k in j + 1..pool.len() {
                        triples.push(Triple::assemble(
                            [pool[i], pool[j], pool[k]],
                            scorer,
                            tables,
                        ));
                    }
                }
            }
        }
        Shape::Distinct => {
            // disjoint by color; positions are checked anyway
            for &a in &candidates.0[0] {
                for &b in &candidates.0[1] {
                    for &c in &candidates.0[2] {
                        if distinct(a, b, c) {
                            triples.push(Triple::assemble([a, b, c], scorer, tables));
                        }
                    }
                }
            }
        }
        Shape::PairPlusOne { pair, one } => {
            let shared = &candidates.0[pair];
            for i in 0..shared.len() {
                for j in i + 1..shared.len() {
                    for &c in &candidates.0[one] {
                        if distinct(shared[i], shared[j], c) {
                            triples.push(Triple::assemble([shared[i], shared[j], c], scorer, tables));
                        }
                    }
                }
            }
        }
        Shape::Mixed => {
            let mut seen = HashSet::new();
            for &a in &candidates.0[0] {
                for &b in &candidates.0[1] {
                    if b == a {
                        continue;
                    }
                    for &c in &candidates.0[2] {
                        if c == a || c == b {
                            continue;
                        }
                        let mut key = [a, b, c];
                        key.sort();
                        if seen.insert(key) {
                            triples.push(Triple::assemble([a, b, c], scorer, tables));
                        }
                    }
                }
            }
        }
    }
    triples
}

fn distinct(a: usize, b: usize, c: usize) -> bool {
    a != b && b != c && a != c
}
