use super::entry::Wish;
use super::entry::Wishlist;
use super::priority::Priority;
use crate::SubScore;
use crate::Weight;
use crate::catalog::index::Catalog;
use crate::catalog::stacking::Stacking;
use crate::store::inventory::Inventory;
use crate::store::relic::EffectRef;
use std::collections::HashMap;

/// one key bound into a weight table
#[derive(Debug, Clone)]
pub struct Binding {
    pub key: String,
    pub priority: Priority,
    pub weight: Weight,
    pub rank: i64,
    pub sub_rank: SubScore,
    pub stacking: Stacking,
}

/// the resolved specification: two parallel integer-indexed weight
/// tables. the wish list is dynamic (keys mixed with name substrings)
/// so we resolve it once into contiguous indices; all hot-path scoring
/// runs over small count vectors, never over string keys.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub include: Vec<Binding>,
    pub exclude: Vec<Binding>,
    pub required: Vec<u16>,
    include_keys: HashMap<String, u16>,
    exclude_keys: HashMap<String, u16>,
}

impl Tables {
    pub fn resolve(
        wishes: &Wishlist,
        inventory: &Inventory,
        catalog: &Catalog,
    ) -> anyhow::Result<Self> {
        let mut this = Self::default();
        for wish in &wishes.effects {
            for key in selected(wish, inventory, catalog) {
                this.bind(key, wish, catalog);
            }
        }
        subranks(&mut this.include)?;
        subranks(&mut this.exclude)?;
        this.required = this
            .include
            .iter()
            .enumerate()
            .filter(|(_, b)| b.priority == Priority::Required)
            .map(|(i, _)| i as u16)
            .collect();
        log::info!(
            "resolved {} include and {} exclude effects",
            this.include.len(),
            this.exclude.len(),
        );
        Ok(this)
    }

    pub fn include_of(&self, key: &str) -> Option<u16> {
        self.include_keys.get(key).copied()
    }

    pub fn exclude_of(&self, key: &str) -> Option<u16> {
        self.exclude_keys.get(key).copied()
    }

    /// first binding wins; later wishes never rebind a key
    fn bind(&mut self, key: String, wish: &Wish, catalog: &Catalog) {
        let (table, keys) = match wish.exclude {
            true => (&mut self.exclude, &mut self.exclude_keys),
            false => (&mut self.include, &mut self.include_keys),
        };
        if keys.contains_key(&key) {
            return;
        }
        keys.insert(key.clone(), table.len() as u16);
        table.push(Binding {
            stacking: catalog.stacking(&key),
            weight: wish.priority.weight(),
            priority: wish.priority,
            rank: wish.rank,
            sub_rank: 0,
            key,
        });
    }
}

/// keys selected by one wish: the explicit key when given, otherwise
/// every distinct inventory effect whose localized name matches.
/// unmatched selectors warn and stay inert.
fn selected(wish: &Wish, inventory: &Inventory, catalog: &Catalog) -> Vec<String> {
    if let Some(key) = &wish.key {
        if catalog.knows_effect(key) {
            vec![key.clone()]
        } else {
            log::warn!("unknown effect key {:?}, ignoring", key);
            vec![]
        }
    } else {
        let mut keys = Vec::new();
        for effect in inventory
            .relics
            .iter()
            .flat_map(|r| r.effects.iter().flatten())
        {
            if matches(effect, wish) && !keys.contains(&effect.key) {
                keys.push(effect.key.clone());
            }
        }
        if keys.is_empty() {
            log::warn!(
                "no effects match {:?} / {:?}, ignoring",
                wish.name_en,
                wish.name_ja,
            );
        }
        keys
    }
}

/// english matching is case-insensitive, japanese is an exact substring
fn matches(effect: &EffectRef, wish: &Wish) -> bool {
    let en = wish
        .name_en
        .as_deref()
        .is_some_and(|sub| effect.name_en.to_lowercase().contains(&sub.to_lowercase()));
    let ja = wish
        .name_ja
        .as_deref()
        .is_some_and(|sub| effect.name_ja.contains(sub));
    en || ja
}

/// second pass over a finished table: within each tier of size G, an
/// entry ranked r gets sub_rank (G - r) * multiplier. tiers that
/// overflow the multiplier spacing would break tier dominance, so the
/// wish list is rejected outright.
fn subranks(bindings: &mut [Binding]) -> anyhow::Result<()> {
    for priority in [
        Priority::Required,
        Priority::Preferred,
        Priority::NiceToHave,
    ] {
        let size = bindings.iter().filter(|b| b.priority == priority).count();
        if size > crate::TIER_CAPACITY {
            anyhow::bail!(
                "{} {} entries exceed the tier capacity of {}",
                size,
                priority,
                crate::TIER_CAPACITY,
            );
        }
        for binding in bindings.iter_mut().filter(|b| b.priority == priority) {
            binding.sub_rank = (size as SubScore - binding.rank) * priority.multiplier();
        }
    }
    Ok(())
}
