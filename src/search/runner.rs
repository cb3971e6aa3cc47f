use super::candidates::Candidates;
use super::pairing;
use super::triples;
use super::triples::Triple;
use crate::catalog::index::Catalog;
use crate::catalog::item::ItemKind;
use crate::catalog::vessel::Pattern;
use crate::catalog::vessel::Vessel;
use crate::dto::response::Assembler;
use crate::dto::response::Block;
use crate::dto::response::Parameters;
use crate::dto::response::Ranked;
use crate::scoring::scorer::Scorer;
use crate::store::relic::Relic;
use crate::wishlist::tables::Tables;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::HashSet;

/// which vessel face(s) a run fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ordinary,
    Deep,
    Combined,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::Deep => "deep",
            Self::Combined => "combined",
        }
    }

    fn sides(&self) -> &'static [bool] {
        match self {
            Self::Ordinary => &[false],
            Self::Deep => &[true],
            Self::Combined => &[false, true],
        }
    }
}

/// everything a vessel run reads, immutable once constructed
pub struct Context<'a> {
    pub relics: &'a [Relic],
    pub scorer: &'a Scorer,
    pub tables: &'a Tables,
    pub catalog: &'a Catalog,
    pub types: &'a [ItemKind],
    pub character: Option<String>,
    pub top: usize,
    pub cap: usize,
}

impl Context<'_> {
    /// the ordinary side draws from the allowed non-deep types; the
    /// deep side is always exactly the deep relics
    pub fn pool(&self, deep: bool) -> Vec<usize> {
        (0..self.relics.len())
            .filter(|&n| match deep {
                true => self.relics[n].item_type.deep(),
                false => {
                    !self.relics[n].item_type.deep()
                        && self.types.contains(&self.relics[n].item_type)
                }
            })
            .collect()
    }

    pub fn assembler(&self) -> Assembler<'_> {
        Assembler {
            relics: self.relics,
            scorer: self.scorer,
            tables: self.tables,
            catalog: self.catalog,
        }
    }
}

/// triples memoized by canonical slot pattern. many vessels share a
/// pattern, so each side's enumeration cost is paid once per distinct
/// pattern rather than once per vessel. filled before the per-vessel
/// fan-out and read immutably from then on.
pub type TripleCache = HashMap<(bool, Pattern), Vec<Triple>>;

pub fn warm(ctx: &Context, vessels: &[&Vessel], mode: Mode) -> TripleCache {
    let mut wanted = HashSet::new();
    for vessel in vessels {
        for &deep in mode.sides() {
            wanted.insert((deep, face(vessel, deep).sorted()));
        }
    }
    wanted
        .into_par_iter()
        .map(|(deep, pattern)| {
            let pool = ctx.pool(deep);
            let candidates = Candidates::build(&pattern, &pool, ctx.relics, ctx.scorer, ctx.cap);
            let mut triples = triples::enumerate(&pattern, &candidates, ctx.scorer, ctx.tables);
            triples.sort_by_key(|t| Reverse(t.score));
            ((deep, pattern), triples)
        })
        .collect()
}

fn face(vessel: &Vessel, deep: bool) -> Pattern {
    match deep {
        true => vessel.deep_slots,
        false => vessel.slots,
    }
}

/// one vessel's ranked block
pub fn block(ctx: &Context, vessel: &Vessel, mode: Mode, cache: &TripleCache) -> Block {
    let results = match mode {
        Mode::Combined => combined(ctx, vessel, cache),
        _ => single(ctx, vessel, mode == Mode::Deep, cache),
    };
    Block {
        parameters: Parameters {
            mode: mode.label().to_string(),
            character: ctx.character.clone(),
            vessel: Some(vessel.key.clone()),
            vessel_name: vessel.name_en.clone(),
            color: None,
        },
        results,
    }
}

/// order triples by the full comparison key, then build result objects
/// for the survivors only
pub fn rank(ctx: &Context, triples: &[Triple]) -> Vec<Ranked> {
    let mut keyed = triples
        .iter()
        .map(|t| (t.required_met(ctx.tables), t.score, t.sub_score(ctx.tables)))
        .enumerate()
        .collect::<Vec<(usize, (bool, crate::Score, crate::SubScore))>>();
    keyed.sort_by(|(i, a), (j, b)| b.cmp(a).then(i.cmp(j)));
    keyed
        .into_iter()
        .take(ctx.top)
        .enumerate()
        .map(|(nth, (i, (required, score, sub)))| {
            let mut ranked = ctx
                .assembler()
                .single(&triples[i].relics, score, sub, required);
            ranked.rank = nth + 1;
            ranked
        })
        .collect()
}

fn single(ctx: &Context, vessel: &Vessel, deep: bool, cache: &TripleCache) -> Vec<Ranked> {
    let empty = Vec::new();
    let triples = cache
        .get(&(deep, face(vessel, deep).sorted()))
        .unwrap_or(&empty);
    rank(ctx, triples)
}

fn combined(ctx: &Context, vessel: &Vessel, cache: &TripleCache) -> Vec<Ranked> {
    let empty = Vec::new();
    let normal = cache
        .get(&(false, vessel.slots.sorted()))
        .unwrap_or(&empty);
    let deep = cache
        .get(&(true, vessel.deep_slots.sorted()))
        .unwrap_or(&empty);
    let normal = &normal[..normal.len().min(crate::MAX_PAIRS)];
    let deep = &deep[..deep.len().min(crate::MAX_PAIRS)];
    pairing::pair(normal, deep, ctx.tables, ctx.top)
        .into_iter()
        .enumerate()
        .map(|(nth, paired)| {
            let mut ranked = ctx.assembler().combined(
                &normal[paired.normal].relics,
                &deep[paired.deep].relics,
                paired.score,
                paired.sub,
                paired.required,
            );
            ranked.rank = nth + 1;
            ranked
        })
        .collect()
}
