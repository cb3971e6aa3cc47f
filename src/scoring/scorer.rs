use super::profile::Profile;
use crate::Score;
use crate::store::inventory::Inventory;
use crate::wishlist::tables::Tables;

/// per-relic profiles memoized over the whole inventory, aligned by
/// inventory position. the cache is filled once before enumeration so
/// every later phase (including parallel ones) reads it immutably,
/// which also makes per-relic scores independent of call order.
pub struct Scorer {
    profiles: Vec<Profile>,
}

impl From<(&Inventory, &Tables)> for Scorer {
    fn from((inventory, tables): (&Inventory, &Tables)) -> Self {
        Self {
            profiles: inventory
                .relics
                .iter()
                .map(|relic| Profile::from((relic, tables)))
                .collect(),
        }
    }
}

impl Scorer {
    pub fn profile(&self, nth: usize) -> &Profile {
        &self.profiles[nth]
    }

    pub fn score(&self, nth: usize) -> Score {
        self.profiles[nth].score
    }
}
