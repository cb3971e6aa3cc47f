use crate::Weight;
use serde::Deserialize;

/// per-effect rule for how duplicate keys contribute to one combination.
/// level variants (FooPlus2) are distinct keys and never collapse, so
/// Conditional only ever discounts same-level copies.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stacking {
    NonStackable = 0,
    Conditional = 1,
    Stackable = 2,
}

impl Stacking {
    /// any stackable sighting wins when one key appears under many ids
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// discount applied to each duplicate copy beyond the first
    pub fn penalty(&self, weight: Weight) -> Weight {
        match self {
            Self::Stackable => 0,
            Self::Conditional => weight * 3 / 10,
            Self::NonStackable => weight / 2,
        }
    }
}

/// the catalog encodes the flag as true | false | "conditional"
impl<'de> Deserialize<'de> for Stacking {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Label(String),
        }
        match Flag::deserialize(deserializer)? {
            Flag::Bool(true) => Ok(Self::Stackable),
            Flag::Bool(false) => Ok(Self::NonStackable),
            Flag::Label(s) if s == "conditional" => Ok(Self::Conditional),
            Flag::Label(s) => Err(serde::de::Error::custom(format!(
                "invalid stacking flag: {:?}",
                s
            ))),
        }
    }
}
