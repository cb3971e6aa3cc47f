use super::color::Slot;
use serde::Deserialize;

/// a length-3 socket color pattern, one face of a vessel
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pattern(pub [Slot; 3]);

impl Pattern {
    /// canonical form. triples are order-free sets, so vessels whose
    /// patterns differ only in socket order share enumeration work.
    pub fn sorted(&self) -> Self {
        let mut slots = self.0;
        slots.sort();
        Self(slots)
    }
}

impl From<[Slot; 3]> for Pattern {
    fn from(slots: [Slot; 3]) -> Self {
        Self(slots)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.0[0], self.0[1], self.0[2])
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slots = Vec::<Slot>::deserialize(deserializer)?;
        let n = slots.len();
        <[Slot; 3]>::try_from(slots)
            .map(Self)
            .map_err(|_| serde::de::Error::custom(format!("expected 3 slots, got {}", n)))
    }
}

/// one vessel: a key, localized names, and the two slot patterns.
/// ordinary relics fill `slots`, deep relics fill `deep_slots`.
#[derive(Debug, Clone, Deserialize)]
pub struct Vessel {
    pub key: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ja: Option<String>,
    pub slots: Pattern,
    #[serde(rename = "deepSlots")]
    pub deep_slots: Pattern,
}

/// a character block in the vessels catalog
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub key: String,
    pub name_en: String,
    #[serde(default)]
    pub name_ja: Option<String>,
    pub vessels: Vec<Vessel>,
}

impl Character {
    /// --character accepts the key, the english name (case-insensitive),
    /// or the japanese name (exact)
    pub fn answers_to(&self, name: &str) -> bool {
        self.key.eq_ignore_ascii_case(name)
            || self.name_en.eq_ignore_ascii_case(name)
            || self.name_ja.as_deref() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::color::Color;

    #[test]
    fn sorted_pattern_is_canonical() {
        let a = Pattern([Slot::Any, Color::Red.into(), Color::Blue.into()]);
        let b = Pattern([Color::Blue.into(), Slot::Any, Color::Red.into()]);
        assert_eq!(a.sorted(), b.sorted());
    }

    #[test]
    fn rejects_short_patterns() {
        assert!(serde_json::from_str::<Pattern>(r#"["Red","Blue"]"#).is_err());
        assert!(serde_json::from_str::<Pattern>(r#"["Red","Blue","Any"]"#).is_ok());
    }

    #[test]
    fn character_answers_to_localized_names() {
        let wylder: Character = serde_json::from_str(
            r#"{ "key": "wylder", "name_en": "Wylder", "name_ja": "追跡者", "vessels": [] }"#,
        )
        .unwrap();
        assert!(wylder.answers_to("wylder"));
        assert!(wylder.answers_to("WYLDER"));
        assert!(wylder.answers_to("追跡者"));
        assert!(!wylder.answers_to("guardian"));
    }
}
