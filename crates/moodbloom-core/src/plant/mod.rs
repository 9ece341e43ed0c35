//! Plant entities and the rules that create and grow them.
//!
//! - [`rarity`]: category/intensity to rarity tier and growth ceiling
//! - [`generator`]: first log of an emotion creates a plant
//! - [`growth`]: later logs advance stage and unlock features

pub mod generator;
pub mod growth;
pub mod rarity;

pub use generator::{plant_type_for, GardenBounds, PlantGenerator, PlantType, PotStyle};
pub use growth::{grow, GrowthPolicy};
pub use rarity::{determine_rarity, Rarity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// Position within the garden, in percent of width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// Pot shape, picked from the emotion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotType {
    Round,
    Square,
    Hexagon,
    Oval,
    Fancy,
}

/// One plant per distinct emotion the user has ever logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    /// Snapshot of the most recent log of this emotion.
    pub emotion: Emotion,
    pub planted_date: DateTime<Utc>,
    pub last_grown_date: DateTime<Utc>,
    pub growth_stage: u8,
    pub max_growth_stage: u8,
    pub consistency_streak: u32,
    pub watered_today: bool,
    pub last_watered_date: Option<DateTime<Utc>>,
    pub color: String,
    pub rarity: Rarity,
    /// Append-only.
    pub features: Vec<String>,
    pub position: Position,
    pub pot_type: PotType,
    pub pot_color: String,
}

impl Plant {
    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f == tag)
    }

    pub fn is_fully_grown(&self) -> bool {
        self.growth_stage >= self.max_growth_stage
    }

    /// Human-readable name of the current growth stage.
    pub fn stage_label(&self) -> &'static str {
        match self.growth_stage {
            0 => "Seed",
            1 => "Sprout",
            2 => "Growing",
            3 => "Budding",
            4 => "Bloomed",
            5 => "Magnificent",
            _ => "Transcendent",
        }
    }

    /// Mark the plant as watered by today's log.
    pub fn water(&mut self, now: DateTime<Utc>) {
        self.watered_today = true;
        self.last_watered_date = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion;
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    fn sample() -> Plant {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        PlantGenerator::default().generate_with_rng(&emotion::find("happy").unwrap(), now, &mut rng)
    }

    #[test]
    fn stage_labels() {
        let mut plant = sample();
        assert_eq!(plant.stage_label(), "Seed");
        plant.growth_stage = 4;
        assert_eq!(plant.stage_label(), "Bloomed");
        plant.growth_stage = 6;
        assert_eq!(plant.stage_label(), "Transcendent");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("maxGrowthStage").is_some());
        assert!(json.get("consistencyStreak").is_some());
        assert_eq!(json["type"], "Sunbloom");
        assert_eq!(json["potType"], "round");
        assert_eq!(json["rarity"], "uncommon");
    }

    #[test]
    fn fully_grown_at_ceiling() {
        let mut plant = sample();
        assert!(!plant.is_fully_grown());
        plant.growth_stage = plant.max_growth_stage;
        assert!(plant.is_fully_grown());
    }
}
