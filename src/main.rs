use anyhow::Context;
use clap::Parser;
use relicforge::catalog::color::Color;
use relicforge::catalog::index::Catalog;
use relicforge::catalog::item::ItemKind;
use relicforge::search::aggregate;
use relicforge::search::aggregate::Options;
use relicforge::search::runner::Mode;
use relicforge::store::inventory::Inventory;
use relicforge::wishlist::entry::Wishlist;
use std::path::PathBuf;

/// rank relic loadouts for a character's vessels
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// relic inventory document produced by the save-file reader
    #[arg(long)]
    input: PathBuf,
    /// result document path
    #[arg(long, default_value = "combinations.json")]
    output: PathBuf,
    /// character key or localized name, e.g. "Wylder" or 追跡者
    #[arg(long, conflicts_with = "color")]
    character: Option<String>,
    /// comma-separated vessel keys to restrict to, e.g. urn,chalice
    #[arg(long, value_delimiter = ',')]
    vessel: Option<Vec<String>>,
    /// rank the deep face instead of the ordinary face
    #[arg(long, conflicts_with = "combined")]
    deep: bool,
    /// six-slot mode: an ordinary triple plus a deep triple
    #[arg(long)]
    combined: bool,
    /// color-only legacy mode, restricted to one color
    #[arg(long)]
    color: Option<String>,
    /// comma-separated allowed item types
    #[arg(long, value_delimiter = ',', default_value = "Relic")]
    types: Vec<String>,
    /// wish list document
    #[arg(long)]
    effects: Option<PathBuf>,
    /// vessels catalog override
    #[arg(long, default_value = "resources/vessels_data.json")]
    vessels_data: PathBuf,
    /// effects catalog override
    #[arg(long, default_value = "resources/effects_data.json")]
    effects_data: PathBuf,
    /// items catalog override
    #[arg(long, default_value = "resources/items_data.json")]
    items_data: PathBuf,
    /// how many results to keep, per vessel and globally
    #[arg(long, default_value_t = relicforge::DEFAULT_TOP_N)]
    top: usize,
    /// per-slot candidate cap (default 30, combined 15, color 50)
    #[arg(long)]
    candidates: Option<usize>,
}

impl Args {
    fn options(&self) -> anyhow::Result<Options> {
        let color = self.color.as_deref().map(Color::try_from).transpose()?;
        let types = self
            .types
            .iter()
            .map(|t| ItemKind::try_from(t.as_str()))
            .collect::<anyhow::Result<Vec<ItemKind>>>()?;
        let mode = match (self.combined, self.deep) {
            (true, _) => Mode::Combined,
            (false, true) => Mode::Deep,
            (false, false) => Mode::Ordinary,
        };
        Ok(Options {
            character: self.character.clone(),
            vessels: self.vessel.clone(),
            color,
            mode,
            types,
            top: self.top,
            candidates: self.candidates,
        })
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = args.options()?;
    let catalog = Catalog::load(&args.effects_data, &args.items_data, &args.vessels_data)?;
    let inventory = Inventory::load(&args.input)?;
    let wishes = match &args.effects {
        Some(path) => Wishlist::load(path)?,
        None => Wishlist::default(),
    };
    let document = aggregate::optimize(&catalog, &inventory, &wishes, &options)?;
    let file = std::fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &document)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn main() {
    relicforge::init();
    if let Err(e) = run(&Args::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
