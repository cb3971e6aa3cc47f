use super::priority::Priority;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// one row of the user's wish list. an explicit key binds directly;
/// otherwise the localized-name substrings are expanded against the
/// inventory at resolution time. `rank` orders entries within a tier
/// for tiebreaking and `exclude` flips the row into the penalty table.
#[derive(Debug, Clone, Deserialize)]
pub struct Wish {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ja: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub exclude: bool,
}

/// the wish list document. absent or empty is valid and produces a
/// pure concentration-bonus ranking.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wishlist {
    #[serde(default)]
    pub effects: Vec<Wish>,
}

impl Wishlist {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file =
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))
    }
}
