use crate::RelicId;
use crate::catalog::color::Color;
use crate::catalog::item::ItemKind;
use serde::Deserialize;
use serde::Serialize;

/// one effect as listed on a relic. localized names ride along inline
/// so the inventory document is self-contained for display and for
/// name-substring wish resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectRef {
    pub key: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ja: String,
}

/// a player-owned relic instance. effect groups hold a primary effect
/// plus optional tag-along sub-effects (typically a debuff paired with
/// a buff); every listed effect counts for matching and penalties.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relic {
    pub id: RelicId,
    pub item_key: String,
    pub item_color: Color,
    pub item_type: ItemKind,
    pub effects: Vec<Vec<EffectRef>>,
}
