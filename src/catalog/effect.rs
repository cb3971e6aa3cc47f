use super::stacking::Stacking;
use serde::Deserialize;

/// one row of the effects catalog. ids are stable integers from the
/// game data, keys are stable strings; a trailing PlusN token in the
/// key marks a level variant, which is a distinct effect for stacking.
#[derive(Debug, Clone, Deserialize)]
pub struct Effect {
    pub key: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ja: Option<String>,
    #[serde(rename = "stackable")]
    pub stacking: Stacking,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_annotation_fields() {
        let effect: Effect = serde_json::from_str(
            r#"{ "key": "AttackUpPlus2", "name_en": "Attack Up +2",
                 "stackable": "conditional", "stackNotes": "同系統は重複しない" }"#,
        )
        .unwrap();
        assert_eq!(effect.key, "AttackUpPlus2");
        assert_eq!(effect.stacking, Stacking::Conditional);
        assert_eq!(effect.name_ja, None);
    }
}
