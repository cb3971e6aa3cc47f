use crate::RelicId;
use crate::Score;
use crate::SubScore;
use crate::catalog::color::Color;
use crate::catalog::index::Catalog;
use crate::scoring::combo::Counts;
use crate::scoring::scorer::Scorer;
use crate::store::relic::EffectRef;
use crate::store::relic::Relic;
use crate::wishlist::priority::Priority;
use crate::wishlist::tables::Tables;
use serde::Serialize;

/// the run parameters a result block was produced under
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// one effect on one relic of a ranked entry, annotated against the
/// resolved wish tables
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectOut {
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name_en: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name_ja: String,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_priority: Option<Priority>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelicOut {
    pub id: RelicId,
    pub item_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name_ja: Option<String>,
    pub item_color: Color,
    pub effects: Vec<EffectOut>,
}

/// one ranked assignment. single-side and color entries carry
/// `relics`; combined entries carry `normal_relics` + `deep_relics`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranked {
    pub rank: usize,
    pub score: Score,
    pub sub_score: SubScore,
    pub required_met: bool,
    pub matched_effects: Vec<String>,
    pub missing_required: Vec<String>,
    pub excluded_present: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relics: Option<Vec<RelicOut>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_relics: Option<Vec<RelicOut>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_relics: Option<Vec<RelicOut>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub parameters: Parameters,
    pub results: Vec<Ranked>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Best {
    pub parameters: Parameters,
    pub result: Ranked,
}

/// the result document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_result: Option<Best>,
    pub all_results: Vec<Block>,
}

/// builds full result objects from compact bookkeeping. only entries
/// that survived ranking are ever assembled; inside the pairing loop
/// the allocation would otherwise dominate.
pub struct Assembler<'a> {
    pub relics: &'a [Relic],
    pub scorer: &'a Scorer,
    pub tables: &'a Tables,
    pub catalog: &'a Catalog,
}

impl Assembler<'_> {
    pub fn single(
        &self,
        slots: &[usize; 3],
        score: Score,
        sub: SubScore,
        required: bool,
    ) -> Ranked {
        let mut ranked = self.entry(slots, score, sub, required);
        ranked.relics = Some(slots.iter().map(|&n| self.relic(n)).collect());
        ranked
    }

    pub fn combined(
        &self,
        normal: &[usize; 3],
        deep: &[usize; 3],
        score: Score,
        sub: SubScore,
        required: bool,
    ) -> Ranked {
        let all = normal
            .iter()
            .chain(deep.iter())
            .copied()
            .collect::<Vec<usize>>();
        let mut ranked = self.entry(&all, score, sub, required);
        ranked.normal_relics = Some(normal.iter().map(|&n| self.relic(n)).collect());
        ranked.deep_relics = Some(deep.iter().map(|&n| self.relic(n)).collect());
        ranked
    }

    fn entry(&self, all: &[usize], score: Score, sub: SubScore, required: bool) -> Ranked {
        let mut counts = Counts::empty(self.tables.include.len());
        let mut excluded = Vec::<String>::new();
        for &n in all {
            let profile = self.scorer.profile(n);
            counts.absorb(profile);
            for &j in &profile.excludes {
                let key = &self.tables.exclude[j as usize].key;
                if !excluded.contains(key) {
                    excluded.push(key.clone());
                }
            }
        }
        excluded.sort();
        Ranked {
            rank: 0,
            score,
            sub_score: sub,
            required_met: required,
            matched_effects: counts.matched(self.tables),
            missing_required: counts.missing(self.tables),
            excluded_present: excluded,
            relics: None,
            normal_relics: None,
            deep_relics: None,
        }
    }

    fn relic(&self, n: usize) -> RelicOut {
        let relic = &self.relics[n];
        let item = self.catalog.item_by_key(&relic.item_key);
        RelicOut {
            id: relic.id,
            item_key: relic.item_key.clone(),
            item_name_en: item.and_then(|i| i.name_en.clone()),
            item_name_ja: item.and_then(|i| i.name_ja.clone()),
            item_color: relic.item_color,
            effects: relic
                .effects
                .iter()
                .flatten()
                .map(|e| self.effect(e))
                .collect(),
        }
    }

    fn effect(&self, effect: &EffectRef) -> EffectOut {
        let include = self
            .tables
            .include_of(&effect.key)
            .map(|i| &self.tables.include[i as usize]);
        let exclude = self
            .tables
            .exclude_of(&effect.key)
            .map(|j| &self.tables.exclude[j as usize]);
        EffectOut {
            key: effect.key.clone(),
            name_en: effect.name_en.clone(),
            name_ja: effect.name_ja.clone(),
            matched: include.is_some(),
            priority: include.map(|b| b.priority),
            excluded: exclude.is_some(),
            exclude_priority: exclude.map(|b| b.priority),
        }
    }
}
