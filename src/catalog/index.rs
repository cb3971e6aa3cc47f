use super::effect::Effect;
use super::item::Item;
use super::stacking::Stacking;
use super::vessel::Character;
use super::vessel::Vessel;
use crate::EffectId;
use crate::ItemId;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;

/// the immutable reference index: effects, items and vessels loaded
/// once up front and read by every later phase
pub struct Catalog {
    effects: BTreeMap<EffectId, Effect>,
    items: BTreeMap<ItemId, Item>,
    characters: Vec<Character>,
    universal: Vec<Vessel>,
    stacking: HashMap<String, Stacking>,
    effect_keys: HashMap<String, EffectId>,
    item_keys: HashMap<String, ItemId>,
}

#[derive(Deserialize)]
struct EffectsDoc {
    effects: BTreeMap<String, Effect>,
}

#[derive(Deserialize)]
struct ItemsDoc {
    items: BTreeMap<String, Item>,
}

#[derive(Deserialize)]
struct VesselsDoc {
    #[serde(default)]
    characters: Vec<Character>,
    #[serde(default)]
    universal: Vec<Vessel>,
}

impl Catalog {
    pub fn load(effects: &Path, items: &Path, vessels: &Path) -> anyhow::Result<Self> {
        let effects = keyed(read::<EffectsDoc>(effects)?.effects, "effect")?;
        let items = keyed(read::<ItemsDoc>(items)?.items, "item")?;
        let vessels = read::<VesselsDoc>(vessels)?;
        log::info!(
            "loaded {} effects, {} items, {} characters, {} universal vessels",
            effects.len(),
            items.len(),
            vessels.characters.len(),
            vessels.universal.len(),
        );
        Ok(Self::from((
            effects,
            items,
            vessels.characters,
            vessels.universal,
        )))
    }

    pub fn effect(&self, id: EffectId) -> Option<&Effect> {
        self.effects.get(&id)
    }

    pub fn effect_by_key(&self, key: &str) -> Option<EffectId> {
        self.effect_keys.get(key).copied()
    }

    pub fn knows_effect(&self, key: &str) -> bool {
        self.effect_keys.contains_key(key)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn item_by_key(&self, key: &str) -> Option<&Item> {
        self.item_keys.get(key).and_then(|id| self.items.get(id))
    }

    /// merged stacking flag for a key; unknown keys stack linearly
    pub fn stacking(&self, key: &str) -> Stacking {
        self.stacking
            .get(key)
            .copied()
            .unwrap_or(Stacking::Stackable)
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.answers_to(name))
    }

    /// the character's vessels with the universal vessels appended
    pub fn vessels<'a>(&'a self, character: &'a Character) -> Vec<&'a Vessel> {
        character
            .vessels
            .iter()
            .chain(self.universal.iter())
            .collect()
    }
}

/// key -> id bindings take the first sighting; the stacking flag keeps
/// merging across sightings so any stackable duplicate wins
impl
    From<(
        BTreeMap<EffectId, Effect>,
        BTreeMap<ItemId, Item>,
        Vec<Character>,
        Vec<Vessel>,
    )> for Catalog
{
    fn from(
        (effects, items, characters, universal): (
            BTreeMap<EffectId, Effect>,
            BTreeMap<ItemId, Item>,
            Vec<Character>,
            Vec<Vessel>,
        ),
    ) -> Self {
        let mut stacking = HashMap::new();
        let mut effect_keys = HashMap::new();
        for (&id, effect) in &effects {
            effect_keys.entry(effect.key.clone()).or_insert(id);
            stacking
                .entry(effect.key.clone())
                .and_modify(|s: &mut Stacking| *s = s.merge(effect.stacking))
                .or_insert(effect.stacking);
        }
        let mut item_keys = HashMap::new();
        for (&id, item) in &items {
            item_keys.entry(item.key.clone()).or_insert(id);
        }
        Self {
            effects,
            items,
            characters,
            universal,
            stacking,
            effect_keys,
            item_keys,
        }
    }
}

fn read<T>(path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

fn keyed<V>(raw: BTreeMap<String, V>, what: &str) -> anyhow::Result<BTreeMap<u32, V>> {
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u32>()
                .map(|id| (id, v))
                .with_context(|| format!("invalid {} id: {:?}", what, k))
        })
        .collect()
}
