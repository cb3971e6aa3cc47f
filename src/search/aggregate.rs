use super::runner;
use super::runner::Context;
use super::runner::Mode;
use super::triples;
use crate::catalog::color::Color;
use crate::catalog::index::Catalog;
use crate::catalog::item::ItemKind;
use crate::catalog::vessel::Pattern;
use crate::dto::response::Best;
use crate::dto::response::Block;
use crate::dto::response::Document;
use crate::dto::response::Parameters;
use crate::scoring::scorer::Scorer;
use crate::search::candidates::Candidates;
use crate::store::inventory::Inventory;
use crate::wishlist::entry::Wishlist;
use crate::wishlist::tables::Tables;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// one optimization run's knobs, as resolved from the command line
pub struct Options {
    pub character: Option<String>,
    pub vessels: Option<Vec<String>>,
    pub color: Option<Color>,
    pub mode: Mode,
    pub types: Vec<ItemKind>,
    pub top: usize,
    pub candidates: Option<usize>,
}

impl Options {
    /// per-slot candidate cap for the selected mode
    fn cap(&self) -> usize {
        self.candidates.unwrap_or(match self {
            _ if self.character.is_none() => crate::COLOR_CANDIDATES,
            _ if self.mode == Mode::Combined => crate::COMBINED_CANDIDATES,
            _ => crate::SINGLE_CANDIDATES,
        })
    }
}

/// run the engine end to end: resolve the wish list against the
/// inventory, memoize per-relic scores, enumerate per vessel (or per
/// color in legacy mode), and merge the blocks into a global best.
pub fn optimize(
    catalog: &Catalog,
    inventory: &Inventory,
    wishes: &Wishlist,
    options: &Options,
) -> anyhow::Result<Document> {
    let tables = Tables::resolve(wishes, inventory, catalog)?;
    let scorer = Scorer::from((inventory, &tables));
    let mut ctx = Context {
        relics: &inventory.relics,
        scorer: &scorer,
        tables: &tables,
        catalog,
        types: &options.types,
        character: None,
        top: options.top,
        cap: options.cap(),
    };
    let blocks = match &options.character {
        Some(name) => {
            let character = catalog
                .character(name)
                .ok_or_else(|| anyhow::anyhow!("no vessel configurations match {:?}", name))?;
            ctx.character = Some(character.name_en.clone());
            vessels(catalog, &ctx, name, options)?
        }
        None => colors(&ctx, options),
    };
    Ok(document(blocks, options.top))
}

fn vessels(
    catalog: &Catalog,
    ctx: &Context,
    name: &str,
    options: &Options,
) -> anyhow::Result<Vec<Block>> {
    let character = catalog.character(name).expect("character resolved upstream");
    let mut vessels = catalog.vessels(character);
    if let Some(keys) = &options.vessels {
        vessels.retain(|v| keys.iter().any(|k| *k == v.key));
    }
    if vessels.is_empty() {
        anyhow::bail!("no vessel configurations match {:?}", name);
    }
    log::info!("optimizing {} vessels for {}", vessels.len(), character.name_en);
    let cache = runner::warm(ctx, &vessels, options.mode);
    let done = AtomicUsize::new(0);
    Ok(vessels
        .par_iter()
        .map(|vessel| {
            let block = runner::block(ctx, vessel, options.mode, &cache);
            crate::progress(done.fetch_add(1, Ordering::Relaxed) + 1, vessels.len());
            block
        })
        .collect())
}

fn colors(ctx: &Context, options: &Options) -> Vec<Block> {
    let colors = match options.color {
        Some(color) => vec![color],
        None => Color::ALL.to_vec(),
    };
    let done = AtomicUsize::new(0);
    colors
        .par_iter()
        .map(|&color| {
            let block = swatch(ctx, color);
            crate::progress(done.fetch_add(1, Ordering::Relaxed) + 1, colors.len());
            block
        })
        .collect()
}

/// legacy color-only mode: no slot constraint, just the best k relics
/// of one color enumerated C(k, 3)
fn swatch(ctx: &Context, color: Color) -> Block {
    let mut pool = (0..ctx.relics.len())
        .filter(|&n| ctx.types.contains(&ctx.relics[n].item_type))
        .filter(|&n| ctx.relics[n].item_color == color)
        .collect::<Vec<usize>>();
    pool.sort_by_key(|&n| (Reverse(ctx.scorer.score(n)), n));
    pool.truncate(ctx.cap);
    let pattern = Pattern([color.into(); 3]);
    let candidates = Candidates(std::array::from_fn(|_| pool.clone()));
    let triples = triples::enumerate(&pattern, &candidates, ctx.scorer, ctx.tables);
    Block {
        parameters: Parameters {
            mode: "color".to_string(),
            character: None,
            vessel: None,
            vessel_name: None,
            color: Some(color),
        },
        results: runner::rank(ctx, &triples),
    }
}

/// flatten the per-block rankings into one global ordering and surface
/// the overall best entry with the parameters it came from
fn document(blocks: Vec<Block>, top: usize) -> Document {
    let mut global = blocks
        .iter()
        .enumerate()
        .flat_map(|(b, block)| (0..block.results.len()).map(move |r| (b, r)))
        .collect::<Vec<(usize, usize)>>();
    global.sort_by(|&(ab, ar), &(bb, br)| {
        let a = &blocks[ab].results[ar];
        let b = &blocks[bb].results[br];
        (b.required_met, b.score, b.sub_score)
            .cmp(&(a.required_met, a.score, a.sub_score))
            .then((ab, ar).cmp(&(bb, br)))
    });
    global.truncate(top);
    let best = global.first().map(|&(b, r)| {
        let mut result = blocks[b].results[r].clone();
        result.rank = 1;
        Best {
            parameters: blocks[b].parameters.clone(),
            result,
        }
    });
    Document {
        best_result: best,
        all_results: blocks,
    }
}
