use super::color::Color;
use serde::Deserialize;
use serde::Serialize;

/// the three broad item families. the ordinary face of a vessel takes
/// Relic and UniqueRelic, the deep face takes DeepRelic only.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Relic,
    UniqueRelic,
    DeepRelic,
}

impl ItemKind {
    pub fn deep(&self) -> bool {
        matches!(self, Self::DeepRelic)
    }
}

impl TryFrom<&str> for ItemKind {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Relic" => Ok(Self::Relic),
            "UniqueRelic" => Ok(Self::UniqueRelic),
            "DeepRelic" => Ok(Self::DeepRelic),
            _ => Err(anyhow::anyhow!("invalid item type: {}", s)),
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Relic => write!(f, "Relic"),
            Self::UniqueRelic => write!(f, "UniqueRelic"),
            Self::DeepRelic => write!(f, "DeepRelic"),
        }
    }
}

/// one row of the items catalog, the template shared by relic instances
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub key: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ja: Option<String>,
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}
