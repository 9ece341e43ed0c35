//! Plant creation on the first log of an emotion.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rarity::determine_rarity;
use super::{Plant, Position, PotType};
use crate::emotion::{Emotion, EmotionCategory};

/// Per-emotion plant species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantType {
    pub name: String,
    pub base_color: String,
    pub features: Vec<String>,
}

const MYSTERY_PLANT: &str = "Mystery Plant";

// id, type name, base color, starting features
const PLANT_TYPES: [(&str, &str, &str, [&str; 2]); 18] = [
    ("happy", "Sunbloom", "#FFD166", ["glowing", "vibrant"]),
    ("excited", "Sparkleaf", "#FF9F1C", ["sparkling", "energetic"]),
    ("peaceful", "Calmroot", "#A0CED9", ["flowing", "gentle"]),
    ("content", "Steadybloom", "#83C5BE", ["balanced", "soft"]),
    ("hopeful", "Wishpetal", "#ADE8F4", ["floating", "bright"]),
    ("sad", "Teardrop", "#6B88FE", ["drooping", "muted"]),
    ("anxious", "Trembleleaf", "#9381FF", ["quivering", "sharp"]),
    ("frustrated", "Thornbloom", "#F25F5C", ["spiky", "intense"]),
    ("tired", "Restleaf", "#8896AB", ["slow", "heavy"]),
    ("lonely", "Echovine", "#7D80DA", ["sparse", "reaching"]),
    ("curious", "Wonderbloom", "#C8E7FF", ["twisting", "changing"]),
    ("reflective", "Mirrorbud", "#D0D1FF", ["translucent", "layered"]),
    ("calm", "Stillflower", "#E0FBFC", ["symmetrical", "simple"]),
    ("focused", "Claritystem", "#CDEDF6", ["structured", "precise"]),
    ("grateful", "Heartbloom", "#FFCFD2", ["pulsing", "warm"]),
    ("inspired", "Ideablossom", "#FFC6FF", ["glowing", "complex"]),
    ("proud", "Achievevine", "#FDFFB6", ["tall", "golden"]),
    ("loved", "Soulflower", "#FFADAD", ["radiant", "embracing"]),
];

/// Species for an emotion; unknown ids get a mystery plant in the emotion's color.
pub fn plant_type_for(emotion: &Emotion) -> PlantType {
    match PLANT_TYPES.iter().find(|(id, ..)| *id == emotion.id) {
        Some((_, name, color, features)) => PlantType {
            name: name.to_string(),
            base_color: color.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        },
        None => PlantType {
            name: MYSTERY_PLANT.to_string(),
            base_color: emotion.color.clone(),
            features: vec!["unknown".to_string()],
        },
    }
}

/// Pot shape and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotStyle {
    pub pot_type: PotType,
    pub color: &'static str,
}

impl PotStyle {
    pub fn for_category(category: EmotionCategory) -> Self {
        let (pot_type, color) = match category {
            EmotionCategory::Positive => (PotType::Round, "#E9C46A"),
            EmotionCategory::Negative => (PotType::Square, "#264653"),
            EmotionCategory::Neutral => (PotType::Oval, "#E9ECEF"),
            EmotionCategory::Special => (PotType::Fancy, "#9D4EDD"),
        };
        Self { pot_type, color }
    }
}

impl Default for PotStyle {
    /// Earthy hexagon pot for plants with no category.
    fn default() -> Self {
        Self {
            pot_type: PotType::Hexagon,
            color: "#6B705C",
        }
    }
}

/// Placement area for new plants, in percent. Upper bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenBounds {
    #[serde(default = "default_x_min")]
    pub x_min: u8,
    #[serde(default = "default_x_max")]
    pub x_max: u8,
    #[serde(default = "default_y_min")]
    pub y_min: u8,
    #[serde(default = "default_y_max")]
    pub y_max: u8,
}

fn default_x_min() -> u8 {
    10
}
fn default_x_max() -> u8 {
    90
}
fn default_y_min() -> u8 {
    20
}
fn default_y_max() -> u8 {
    80
}

impl Default for GardenBounds {
    fn default() -> Self {
        Self {
            x_min: default_x_min(),
            x_max: default_x_max(),
            y_min: default_y_min(),
            y_max: default_y_max(),
        }
    }
}

impl GardenBounds {
    /// Uniform random spot inside the bounds. Degenerate ranges collapse to the minimum.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let x = pick(rng, self.x_min, self.x_max);
        let y = pick(rng, self.y_min, self.y_max);
        Position { x, y }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, min: u8, max: u8) -> u8 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Builds brand-new plants.
#[derive(Debug, Clone, Default)]
pub struct PlantGenerator {
    bounds: GardenBounds,
}

impl PlantGenerator {
    pub fn new(bounds: GardenBounds) -> Self {
        Self { bounds }
    }

    /// Create a plant for the first log of `emotion`, placed at random.
    pub fn generate(&self, emotion: &Emotion, now: DateTime<Utc>) -> Plant {
        self.generate_with_rng(emotion, now, &mut rand::thread_rng())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied RNG.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        emotion: &Emotion,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Plant {
        let rarity = determine_rarity(emotion.category, emotion.intensity);
        let plant_type = plant_type_for(emotion);
        let pot = PotStyle::for_category(emotion.category);

        debug!(
            emotion = %emotion.id,
            plant_type = %plant_type.name,
            %rarity,
            "generating plant"
        );

        Plant {
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("{} {}", emotion.name, plant_type.name),
            plant_type: plant_type.name,
            emotion: emotion.clone(),
            planted_date: now,
            last_grown_date: now,
            growth_stage: 0,
            max_growth_stage: rarity.max_growth_stage(),
            consistency_streak: 1,
            // The first log counts as watering.
            watered_today: true,
            last_watered_date: Some(now),
            color: plant_type.base_color,
            rarity,
            features: plant_type.features,
            position: self.bounds.random_position(rng),
            pot_type: pot.pot_type,
            pot_color: pot.color.to_string(),
        }
    }
}
