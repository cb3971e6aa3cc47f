use super::profile::Profile;
use crate::Score;
use crate::SubScore;
use crate::catalog::stacking::Stacking;
use crate::wishlist::tables::Tables;

/// aggregate include-index counts for one combination of relics.
/// c[i] is the number of relics in the combination carrying include
/// index i; all stacking rules reduce to arithmetic over this vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts(Vec<u8>);

impl Counts {
    pub fn empty(n: usize) -> Self {
        Self(vec![0; n])
    }

    pub fn count(&self, i: u16) -> u8 {
        self.0[i as usize]
    }

    /// fold one relic's include hits into the vector
    pub fn absorb(&mut self, profile: &Profile) {
        for &i in &profile.includes {
            self.0[i as usize] = self.0[i as usize].saturating_add(1);
        }
    }

    /// elementwise sum, for pairing two independently counted sides
    pub fn union(&self, other: &Self) -> Self {
        Self(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| a.saturating_add(*b))
                .collect(),
        )
    }

    pub fn present(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, _)| i)
    }

    /// stacking-aware score of the aggregate. stackable duplicates add
    /// linearly; conditional and non-stackable duplicates contribute
    /// once and then pay a per-copy discount.
    pub fn stacked(&self, tables: &Tables) -> Score {
        self.present()
            .map(|i| {
                let binding = &tables.include[i];
                let w = binding.weight;
                let c = self.0[i] as Score;
                match binding.stacking {
                    Stacking::Stackable => w * c,
                    flag => w - flag.penalty(w) * (c - 1),
                }
            })
            .sum()
    }

    /// every REQUIRED include key is covered
    pub fn covers(&self, tables: &Tables) -> bool {
        tables.required.iter().all(|&i| self.0[i as usize] > 0)
    }

    /// presence tiebreaker over the include side
    pub fn subrank(&self, tables: &Tables) -> SubScore {
        self.present().map(|i| tables.include[i].sub_rank).sum()
    }

    /// REQUIRED include keys absent from the combination, sorted
    pub fn missing(&self, tables: &Tables) -> Vec<String> {
        let mut keys = tables
            .required
            .iter()
            .filter(|&&i| self.0[i as usize] == 0)
            .map(|&i| tables.include[i as usize].key.clone())
            .collect::<Vec<String>>();
        keys.sort();
        keys
    }

    /// include keys present in the combination, sorted
    pub fn matched(&self, tables: &Tables) -> Vec<String> {
        let mut keys = self
            .present()
            .map(|i| tables.include[i].key.clone())
            .collect::<Vec<String>>();
        keys.sort();
        keys
    }
}
