use crate::catalog::color::Slot;
use crate::catalog::vessel::Pattern;
use crate::scoring::scorer::Scorer;
use crate::store::relic::Relic;
use std::cmp::Reverse;

/// bounded per-slot candidate lists for one pattern, holding inventory
/// positions sorted by descending per-relic score.
///
/// a slot list always contains every color-matching relic that carries
/// a requested effect (up to the cap), then pads with the best
/// remaining scorers. the cap bounds enumeration work on wide pools
/// (an Any slot sees the whole side) without ever dropping a relic
/// that could complete a REQUIRED wish while room remains.
#[derive(Debug, Clone)]
pub struct Candidates(pub [Vec<usize>; 3]);

impl Candidates {
    pub fn build(
        pattern: &Pattern,
        pool: &[usize],
        relics: &[Relic],
        scorer: &Scorer,
        cap: usize,
    ) -> Self {
        Self(std::array::from_fn(|i| {
            Self::slot(pattern.0[i], pool, relics, scorer, cap)
        }))
    }

    fn slot(slot: Slot, pool: &[usize], relics: &[Relic], scorer: &Scorer, cap: usize) -> Vec<usize> {
        let mut matching = pool
            .iter()
            .copied()
            .filter(|&n| slot.admits(relics[n].item_color))
            .collect::<Vec<usize>>();
        matching.sort_by_key(|&n| (Reverse(scorer.score(n)), n));
        let (mut kept, padding): (Vec<usize>, Vec<usize>) = matching
            .into_iter()
            .partition(|&n| !scorer.profile(n).includes.is_empty());
        kept.truncate(cap);
        kept.extend(padding.into_iter().take(cap - kept.len()));
        kept.sort_by_key(|&n| (Reverse(scorer.score(n)), n));
        kept
    }
}
