use crate::Score;
use crate::Weight;
use crate::wishlist::priority::Priority;
use crate::wishlist::tables::Tables;
use crate::store::relic::Relic;

/// a relic's resolved contribution to any combination that contains
/// it: the include/exclude table indices hit by its effects (sub
/// effects included), the per-relic additive constants, and the
/// standalone score used to order candidate lists.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub includes: Vec<u16>,
    pub excludes: Vec<u16>,
    pub concentration: Score,
    pub exclude_weight: Weight,
    pub exclude_required: bool,
    pub score: Score,
}

impl From<(&Relic, &Tables)> for Profile {
    fn from((relic, tables): (&Relic, &Tables)) -> Self {
        let effects = || relic.effects.iter().flatten();
        let includes = effects()
            .filter_map(|e| tables.include_of(&e.key))
            .collect::<Vec<u16>>();
        let excludes = effects()
            .filter_map(|e| tables.exclude_of(&e.key))
            .collect::<Vec<u16>>();
        let k = includes.len() as Score;
        let concentration = crate::CONCENTRATION_BONUS * k * (k - 1) / 2;
        let exclude_weight = excludes
            .iter()
            .map(|&j| tables.exclude[j as usize].weight)
            .sum::<Weight>();
        let exclude_required = excludes
            .iter()
            .any(|&j| tables.exclude[j as usize].priority == Priority::Required);
        let score = includes
            .iter()
            .map(|&i| tables.include[i as usize].weight)
            .sum::<Weight>()
            + concentration
            - exclude_weight;
        Self {
            includes,
            excludes,
            concentration,
            exclude_weight,
            exclude_required,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::color::Color;
    use crate::catalog::item::ItemKind;
    use crate::catalog::index::Catalog;
    use crate::catalog::stacking::Stacking;
    use crate::catalog::effect::Effect;
    use crate::store::inventory::Inventory;
    use crate::store::relic::EffectRef;
    use crate::wishlist::entry::Wish;
    use crate::wishlist::entry::Wishlist;
    use std::collections::BTreeMap;

    fn relic(keys: &[&str]) -> Relic {
        Relic {
            id: 1,
            item_key: "BeastBone".to_string(),
            item_color: Color::Red,
            item_type: ItemKind::Relic,
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

    fn tables(include: &[(&str, Priority)], exclude: &[(&str, Priority)]) -> Tables {
        let keys = include
            .iter()
            .chain(exclude)
            .enumerate()
            .map(|(id, (key, _))| {
                (
                    id as crate::EffectId,
                    Effect {
                        key: key.to_string(),
                        name_en: None,
                        name_ja: None,
                        stacking: Stacking::Stackable,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();
        let catalog = Catalog::from((keys, BTreeMap::new(), vec![], vec![]));
        let wishes = Wishlist {
            effects: include
                .iter()
                .map(|(key, priority)| (key, priority, false))
                .chain(exclude.iter().map(|(key, priority)| (key, priority, true)))
                .map(|(key, priority, exclude)| Wish {
                    key: Some(key.to_string()),
                    name_en: None,
                    name_ja: None,
                    priority: *priority,
                    rank: 0,
                    exclude,
                })
                .collect(),
        };
        Tables::resolve(&wishes, &Inventory::default(), &catalog).unwrap()
    }

    #[test]
    fn concentration_rewards_packing() {
        let tables = tables(
            &[
                ("A", Priority::Preferred),
                ("B", Priority::Preferred),
                ("C", Priority::Preferred),
            ],
            &[],
        );
        // k = 3 include hits: bonus 5 * 3 * 2 / 2 = 15
        let profile = Profile::from((&relic(&["A", "B", "C"]), &tables));
        assert_eq!(profile.concentration, 15);
        assert_eq!(profile.score, 30 + 15);
        // k = 1: no bonus
        let profile = Profile::from((&relic(&["A"]), &tables));
        assert_eq!(profile.concentration, 0);
        assert_eq!(profile.score, 10);
    }

    #[test]
    fn excludes_penalize_with_identical_weights() {
        let tables = tables(
            &[("A", Priority::Preferred)],
            &[("B", Priority::Preferred)],
        );
        let profile = Profile::from((&relic(&["A", "B"]), &tables));
        assert_eq!(profile.score, 0);
        assert!(!profile.exclude_required);
    }

    #[test]
    fn required_exclude_is_flagged() {
        let tables = tables(&[], &[("B", Priority::Required)]);
        let profile = Profile::from((&relic(&["B"]), &tables));
        assert!(profile.exclude_required);
        assert_eq!(profile.score, -100);
    }

    #[test]
    fn sub_effects_count() {
        let tables = tables(&[], &[("DefenseDown", Priority::Preferred)]);
        let mut relic = relic(&["StaminaUp"]);
        relic.effects[0].push(EffectRef {
            key: "DefenseDown".to_string(),
            name_en: String::new(),
            name_ja: String::new(),
        });
        let profile = Profile::from((&relic, &tables));
        assert_eq!(profile.excludes.len(), 1);
        assert_eq!(profile.score, -10);
    }
}
