use serde::{Deserialize, Serialize};

use crate::emotion::EmotionCategory;

/// Rarity tier, fixed when a plant is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Growth ceiling granted by this tier.
    pub fn max_growth_stage(&self) -> u8 {
        match self {
            Rarity::Legendary => 6,
            Rarity::Rare => 5,
            Rarity::Uncommon => 4,
            Rarity::Common => 3,
        }
    }

    /// Badge color shown next to the plant.
    pub fn display_color(&self) -> &'static str {
        match self {
            Rarity::Common => "#6B7280",
            Rarity::Uncommon => "#10B981",
            Rarity::Rare => "#3B82F6",
            Rarity::Legendary => "#8B5CF6",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify a new plant from its emotion's category and intensity.
pub fn determine_rarity(category: EmotionCategory, intensity: u8) -> Rarity {
    if category == EmotionCategory::Special {
        return if intensity >= 4 {
            Rarity::Legendary
        } else {
            Rarity::Rare
        };
    }

    match intensity {
        5.. => Rarity::Rare,
        3..=4 => Rarity::Uncommon,
        _ => Rarity::Common,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_emotions() {
        assert_eq!(determine_rarity(EmotionCategory::Special, 5), Rarity::Legendary);
        assert_eq!(determine_rarity(EmotionCategory::Special, 4), Rarity::Legendary);
        assert_eq!(determine_rarity(EmotionCategory::Special, 3), Rarity::Rare);
        assert_eq!(determine_rarity(EmotionCategory::Special, 1), Rarity::Rare);
    }

    #[test]
    fn ordinary_emotions() {
        for category in [
            EmotionCategory::Positive,
            EmotionCategory::Negative,
            EmotionCategory::Neutral,
        ] {
            assert_eq!(determine_rarity(category, 5), Rarity::Rare);
            assert_eq!(determine_rarity(category, 4), Rarity::Uncommon);
            assert_eq!(determine_rarity(category, 3), Rarity::Uncommon);
            assert_eq!(determine_rarity(category, 2), Rarity::Common);
            assert_eq!(determine_rarity(category, 1), Rarity::Common);
        }
    }

    #[test]
    fn ceilings() {
        assert_eq!(Rarity::Legendary.max_growth_stage(), 6);
        assert_eq!(Rarity::Rare.max_growth_stage(), 5);
        assert_eq!(Rarity::Uncommon.max_growth_stage(), 4);
        assert_eq!(Rarity::Common.max_growth_stage(), 3);
    }
}
