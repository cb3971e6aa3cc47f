use crate::SubScore;
use crate::Weight;
use serde::Deserialize;

/// wish tiers. weights separate the tiers by an order of magnitude so
/// that no pile of lower-tier hits can outvote a higher-tier one
/// inside a single combination.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    NiceToHave = 0,
    Preferred = 1,
    Required = 2,
}

impl Priority {
    pub fn weight(&self) -> Weight {
        match self {
            Self::Required => crate::WEIGHT_REQUIRED,
            Self::Preferred => crate::WEIGHT_PREFERRED,
            Self::NiceToHave => crate::WEIGHT_NICE_TO_HAVE,
        }
    }

    /// tiebreaker multiplier; see TIER_CAPACITY for the dominance bound
    pub fn multiplier(&self) -> SubScore {
        match self {
            Self::Required => crate::SUBRANK_REQUIRED,
            Self::Preferred => crate::SUBRANK_PREFERRED,
            Self::NiceToHave => crate::SUBRANK_NICE_TO_HAVE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Preferred => "preferred",
            Self::NiceToHave => "nice_to_have",
        }
    }
}

/// unknown labels degrade to the bottom tier with a warning instead of
/// aborting the run
impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "required" => Self::Required,
            "preferred" => Self::Preferred,
            "nice_to_have" => Self::NiceToHave,
            _ => {
                log::warn!("unknown priority {:?}, treating as nice_to_have", s);
                Self::NiceToHave
            }
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl serde::Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_per_tier() {
        assert_eq!(Priority::Required.weight(), 100);
        assert_eq!(Priority::Preferred.weight(), 10);
        assert_eq!(Priority::NiceToHave.weight(), 1);
    }

    #[test]
    fn unknown_label_degrades() {
        assert_eq!(Priority::from("mandatory"), Priority::NiceToHave);
        assert_eq!(Priority::from("REQUIRED"), Priority::Required);
    }

    #[test]
    fn required_tiebreaker_dominates_preferred() {
        let most_preferred = crate::TIER_CAPACITY as SubScore * Priority::Preferred.multiplier();
        assert!(Priority::Required.multiplier() > most_preferred);
    }
}
