//! Garden seasons (northern hemisphere).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Ambient presentation hints for a season. Display data only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonEffects {
    pub particle_effect: &'static str,
    pub growth_bonus: f32,
}

impl Season {
    /// Season for a 1-based month. Months outside 1..=12 count as winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn effects(&self) -> SeasonEffects {
        let (particle_effect, growth_bonus) = match self {
            Season::Spring => ("petals", 1.2),
            Season::Summer => ("fireflies", 1.5),
            Season::Autumn => ("leaves", 0.8),
            Season::Winter => ("snow", 0.5),
        };
        SeasonEffects {
            particle_effect,
            growth_bonus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
