//! The garden state container and the log-event orchestrator.
//!
//! [`Garden`] owns the plant collection and the global streak state. All
//! mutation goes through its methods; nothing here touches storage, so the
//! whole transition logic can be exercised in memory.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::emotion::Emotion;
use crate::error::{CoreError, Result, ValidationError};
use crate::plant::{grow, GrowthPolicy, Plant, PlantGenerator};
use crate::season::Season;
use crate::storage::config::GardenConfig;
use crate::streak::StreakTracker;

/// Garden ornaments the user can add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Bench,
    Lantern,
    Bridge,
    Fountain,
    Statue,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 5] = [
        DecorationKind::Bench,
        DecorationKind::Lantern,
        DecorationKind::Bridge,
        DecorationKind::Fountain,
        DecorationKind::Statue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecorationKind::Bench => "bench",
            DecorationKind::Lantern => "lantern",
            DecorationKind::Bridge => "bridge",
            DecorationKind::Fountain => "fountain",
            DecorationKind::Statue => "statue",
        }
    }
}

impl FromStr for DecorationKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "decoration".into(),
                message: format!("unknown decoration '{s}'"),
            })
    }
}

impl std::fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Everything that is persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenState {
    pub plants: Vec<Plant>,
    pub last_emotion_id: Option<String>,
    pub last_emotion_date: Option<DateTime<Utc>>,
    /// Streak of whichever plant was touched last. Display only.
    pub emotion_streak: u32,
    pub decorations: Vec<DecorationKind>,
}

/// Result of logging an emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOutcome {
    pub is_new_plant: bool,
    pub plant: Plant,
}

/// In-memory garden with its growth rules.
#[derive(Debug, Clone, Default)]
pub struct Garden {
    state: GardenState,
    tracker: StreakTracker,
    generator: PlantGenerator,
    policy: GrowthPolicy,
}

impl Garden {
    pub fn new(state: GardenState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn with_config(state: GardenState, config: &GardenConfig) -> Self {
        Self {
            state,
            tracker: StreakTracker::from_offset_minutes(config.utc_offset_minutes),
            generator: PlantGenerator::new(config.bounds),
            policy: config.growth_policy,
        }
    }

    pub fn state(&self) -> &GardenState {
        &self.state
    }

    pub fn into_state(self) -> GardenState {
        self.state
    }

    pub fn tracker(&self) -> &StreakTracker {
        &self.tracker
    }

    pub fn plants(&self) -> &[Plant] {
        &self.state.plants
    }

    pub fn plant(&self, plant_id: &str) -> Option<&Plant> {
        self.state.plants.iter().find(|p| p.id == plant_id)
    }

    pub fn plant_for_emotion(&self, emotion_id: &str) -> Option<&Plant> {
        self.state.plants.iter().find(|p| p.emotion.id == emotion_id)
    }

    pub fn decorations(&self) -> &[DecorationKind] {
        &self.state.decorations
    }

    pub fn current_streak(&self) -> u32 {
        self.state.emotion_streak
    }

    pub fn last_emotion_id(&self) -> Option<&str> {
        self.state.last_emotion_id.as_deref()
    }

    pub fn last_emotion_date(&self) -> Option<DateTime<Utc>> {
        self.state.last_emotion_date
    }

    pub fn current_season(&self, now: DateTime<Utc>) -> Season {
        Season::for_date(self.tracker.day_of(now))
    }

    /// Whether today's log is still available.
    pub fn can_log_today(&self, now: DateTime<Utc>) -> bool {
        self.tracker.can_log_today(self.state.last_emotion_date, now)
    }

    /// Local calendar day of the last log, if any.
    pub fn last_log_day(&self) -> Option<NaiveDate> {
        self.state.last_emotion_date.map(|ts| self.tracker.day_of(ts))
    }

    /// Log `emotion` at `now`, creating or growing its plant.
    ///
    /// This does not check the once-per-day gate; callers either check
    /// [`can_log_today`](Self::can_log_today) first or use
    /// [`try_log_emotion`](Self::try_log_emotion).
    pub fn log_emotion(&mut self, emotion: &Emotion, now: DateTime<Utc>) -> LogOutcome {
        let outcome = match self.plant_for_emotion(&emotion.id) {
            Some(existing) => {
                let update = self.tracker.compute(
                    self.state.last_emotion_id.as_deref(),
                    self.state.last_emotion_date,
                    &emotion.id,
                    now,
                    existing.consistency_streak,
                );
                let mut plant = grow(existing, update.streak, now, self.policy);
                // Rarity stays frozen; only the snapshot follows the latest log.
                plant.emotion = emotion.clone();
                plant.water(now);
                LogOutcome {
                    is_new_plant: false,
                    plant,
                }
            }
            None => {
                let mut plant = self.generator.generate(emotion, now);
                plant.water(now);
                info!(
                    plant = %plant.name,
                    rarity = %plant.rarity,
                    "new plant sprouted"
                );
                LogOutcome {
                    is_new_plant: true,
                    plant,
                }
            }
        };

        self.state.last_emotion_id = Some(emotion.id.clone());
        self.state.last_emotion_date = Some(now);
        self.state.emotion_streak = outcome.plant.consistency_streak;
        self.upsert(outcome.plant.clone());

        outcome
    }

    /// [`log_emotion`](Self::log_emotion), refused when today's log is used up.
    ///
    /// # Errors
    /// Returns [`CoreError::AlreadyLogged`] if an emotion was already logged
    /// on the current calendar day.
    pub fn try_log_emotion(&mut self, emotion: &Emotion, now: DateTime<Utc>) -> Result<LogOutcome> {
        if !self.can_log_today(now) {
            return Err(CoreError::AlreadyLogged {
                day: self.tracker.day_of(now),
            });
        }
        Ok(self.log_emotion(emotion, now))
    }

    pub fn add_decoration(&mut self, kind: DecorationKind) {
        self.state.decorations.push(kind);
    }

    /// Clear the watered flag on plants last watered before today.
    /// Returns how many plants changed.
    pub fn reset_watered(&mut self, now: DateTime<Utc>) -> usize {
        let today = self.tracker.day_of(now);
        let tracker = self.tracker;
        let mut changed = 0;
        for plant in &mut self.state.plants {
            let stale = plant
                .last_watered_date
                .map_or(true, |ts| tracker.day_of(ts) != today);
            if plant.watered_today && stale {
                plant.watered_today = false;
                changed += 1;
            }
        }
        debug!(changed, "reset watered flags");
        changed
    }

    /// Remove every plant, decoration and streak record.
    pub fn reset(&mut self) {
        info!(plants = self.state.plants.len(), "garden reset");
        self.state = GardenState::default();
    }

    fn upsert(&mut self, plant: Plant) {
        match self.state.plants.iter_mut().find(|p| p.id == plant.id) {
            Some(slot) => *slot = plant,
            None => self.state.plants.push(plant),
        }
    }
}
