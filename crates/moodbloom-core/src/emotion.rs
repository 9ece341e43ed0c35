//! Emotion catalog.
//!
//! Emotions are immutable catalog entries. A log event carries a copy of one
//! of them, possibly with a user-adjusted intensity.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Lowest accepted intensity.
pub const MIN_INTENSITY: u8 = 1;
/// Highest accepted intensity.
pub const MAX_INTENSITY: u8 = 5;

/// Broad grouping of an emotion; drives rarity and pot style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Positive,
    Negative,
    Neutral,
    Special,
}

impl EmotionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Positive => "positive",
            EmotionCategory::Negative => "negative",
            EmotionCategory::Neutral => "neutral",
            EmotionCategory::Special => "special",
        }
    }
}

/// A feeling the user can log once per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emotion {
    pub id: String,
    pub name: String,
    pub color: String,
    /// 1-5 scale
    pub intensity: u8,
    pub category: EmotionCategory,
}

impl Emotion {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        intensity: u8,
        category: EmotionCategory,
    ) -> Result<Self> {
        validate_intensity(intensity)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            intensity,
            category,
        })
    }

    /// Copy of this emotion with a different intensity.
    ///
    /// # Errors
    /// Returns a validation error if `intensity` is outside 1..=5.
    pub fn with_intensity(&self, intensity: u8) -> Result<Self> {
        validate_intensity(intensity)?;
        Ok(Self {
            intensity,
            ..self.clone()
        })
    }
}

fn validate_intensity(intensity: u8) -> Result<()> {
    if (MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: "intensity".into(),
            message: format!("{intensity} is outside {MIN_INTENSITY}..={MAX_INTENSITY}"),
        }
        .into())
    }
}

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    color: &'static str,
    intensity: u8,
    category: EmotionCategory,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    color: &'static str,
    intensity: u8,
    category: EmotionCategory,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        color,
        intensity,
        category,
    }
}

use EmotionCategory::{Negative, Neutral, Positive, Special};

const CATALOG: [CatalogEntry; 18] = [
    entry("happy", "Happy", "#FFD166", 4, Positive),
    entry("excited", "Excited", "#FF9F1C", 5, Positive),
    entry("peaceful", "Peaceful", "#A0CED9", 3, Positive),
    entry("content", "Content", "#83C5BE", 3, Positive),
    entry("hopeful", "Hopeful", "#ADE8F4", 4, Positive),
    entry("sad", "Sad", "#6B88FE", 3, Negative),
    entry("anxious", "Anxious", "#9381FF", 4, Negative),
    entry("frustrated", "Frustrated", "#F25F5C", 4, Negative),
    entry("tired", "Tired", "#8896AB", 2, Negative),
    entry("lonely", "Lonely", "#7D80DA", 3, Negative),
    entry("curious", "Curious", "#C8E7FF", 3, Neutral),
    entry("reflective", "Reflective", "#D0D1FF", 2, Neutral),
    entry("calm", "Calm", "#E0FBFC", 2, Neutral),
    entry("focused", "Focused", "#CDEDF6", 3, Neutral),
    entry("grateful", "Grateful", "#FFCFD2", 4, Special),
    entry("inspired", "Inspired", "#FFC6FF", 5, Special),
    entry("proud", "Proud", "#FDFFB6", 5, Special),
    entry("loved", "Loved", "#FFADAD", 5, Special),
];

impl CatalogEntry {
    fn to_emotion(&self) -> Emotion {
        Emotion {
            id: self.id.to_string(),
            name: self.name.to_string(),
            color: self.color.to_string(),
            intensity: self.intensity,
            category: self.category,
        }
    }
}

/// All built-in emotions, in display order.
pub fn catalog() -> Vec<Emotion> {
    CATALOG.iter().map(CatalogEntry::to_emotion).collect()
}

/// Look up a built-in emotion by id.
pub fn find(id: &str) -> Option<Emotion> {
    CATALOG
        .iter()
        .find(|e| e.id == id)
        .map(CatalogEntry::to_emotion)
}

/// Like [`find`], but reports unknown ids as a validation error.
pub fn lookup(id: &str) -> Result<Emotion> {
    find(id).ok_or_else(|| ValidationError::UnknownEmotion(id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eighteen_unique_ids() {
        let all = catalog();
        assert_eq!(all.len(), 18);
        let ids: HashSet<_> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn catalog_intensities_in_range() {
        for e in catalog() {
            assert!((MIN_INTENSITY..=MAX_INTENSITY).contains(&e.intensity), "{}", e.id);
        }
    }

    #[test]
    fn find_known_and_unknown() {
        let loved = find("loved").unwrap();
        assert_eq!(loved.category, EmotionCategory::Special);
        assert_eq!(loved.intensity, 5);
        assert!(find("bored").is_none());
        assert!(lookup("bored").is_err());
    }

    #[test]
    fn with_intensity_rejects_out_of_range() {
        let happy = find("happy").unwrap();
        assert_eq!(happy.with_intensity(2).unwrap().intensity, 2);
        assert!(happy.with_intensity(0).is_err());
        assert!(happy.with_intensity(6).is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&EmotionCategory::Special).unwrap();
        assert_eq!(json, "\"special\"");
    }
}
