use super::relic::Relic;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// the save-file reader's output document: the loaded relic inventory.
/// read once per invocation and immutable afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default)]
    pub character_name: String,
    pub relics: Vec<Relic>,
}

impl Inventory {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file =
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let inventory: Self = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!(
            "loaded {} relics for {:?}",
            inventory.relics.len(),
            inventory.character_name,
        );
        Ok(inventory)
    }
}
