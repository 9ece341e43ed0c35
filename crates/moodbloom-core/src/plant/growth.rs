//! Growth-stage and feature progression for an existing plant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Plant;

/// Consecutive logs needed per growth stage.
const LOGS_PER_STAGE: u32 = 2;

/// Feature tags unlocked when growth reaches a stage.
const MILESTONES: [(u8, &str); 3] = [(3, "mature"), (4, "magnificent"), (5, "transcendent")];

/// How a shrinking streak affects the growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Stage always follows the current streak; a reset can shrink the plant.
    #[default]
    Recompute,
    /// Stage never goes below what the plant has already reached.
    KeepHighest,
}

/// Stage earned by a streak, before any ceiling.
pub fn stage_for_streak(streak: u32) -> u32 {
    streak / LOGS_PER_STAGE
}

/// Grow `plant` after a log that left it with `new_streak`.
///
/// Watering is left to the caller.
pub fn grow(plant: &Plant, new_streak: u32, today: DateTime<Utc>, policy: GrowthPolicy) -> Plant {
    let ceiling = plant.max_growth_stage;
    let computed = stage_for_streak(new_streak).min(u32::from(ceiling)) as u8;
    let new_stage = match policy {
        GrowthPolicy::Recompute => computed,
        GrowthPolicy::KeepHighest => computed.max(plant.growth_stage),
    };

    let mut features = plant.features.clone();
    if new_stage > plant.growth_stage {
        for (stage, tag) in MILESTONES {
            if new_stage >= stage && !features.iter().any(|f| f == tag) {
                features.push(tag.to_string());
            }
        }
    }

    if new_stage != plant.growth_stage {
        info!(
            plant = %plant.name,
            from = plant.growth_stage,
            to = new_stage,
            streak = new_streak,
            "growth stage changed"
        );
    }

    Plant {
        growth_stage: new_stage,
        last_grown_date: today,
        consistency_streak: new_streak,
        features,
        ..plant.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion;
    use crate::plant::PlantGenerator;
    use chrono::{Duration, TimeZone};

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::days(n)
    }

    fn plant(id: &str) -> Plant {
        PlantGenerator::default().generate(&emotion::find(id).unwrap(), day(0))
    }

    #[test]
    fn one_stage_per_two_logs() {
        let p = plant("loved");
        assert_eq!(grow(&p, 1, day(0), GrowthPolicy::Recompute).growth_stage, 0);
        assert_eq!(grow(&p, 2, day(1), GrowthPolicy::Recompute).growth_stage, 1);
        assert_eq!(grow(&p, 3, day(2), GrowthPolicy::Recompute).growth_stage, 1);
        assert_eq!(grow(&p, 8, day(7), GrowthPolicy::Recompute).growth_stage, 4);
    }

    #[test]
    fn capped_at_ceiling() {
        let p = plant("tired"); // common, ceiling 3
        let grown = grow(&p, 40, day(39), GrowthPolicy::Recompute);
        assert_eq!(grown.growth_stage, 3);
        assert_eq!(grown.max_growth_stage, 3);
    }

    #[test]
    fn updates_streak_and_date_but_not_watering() {
        let mut p = plant("happy");
        p.watered_today = false;
        p.last_watered_date = None;
        let grown = grow(&p, 2, day(1), GrowthPolicy::Recompute);
        assert_eq!(grown.consistency_streak, 2);
        assert_eq!(grown.last_grown_date, day(1));
        assert!(!grown.watered_today);
        assert_eq!(grown.last_watered_date, None);
        assert_eq!(grown.planted_date, p.planted_date);
        assert_eq!(grown.id, p.id);
    }

    #[test]
    fn milestone_features_unlock_once() {
        let p = plant("loved"); // legendary, ceiling 6
        let stage3 = grow(&p, 6, day(5), GrowthPolicy::Recompute);
        assert_eq!(stage3.growth_stage, 3);
        assert!(stage3.has_feature("mature"));
        assert!(!stage3.has_feature("magnificent"));

        let stage4 = grow(&stage3, 8, day(7), GrowthPolicy::Recompute);
        assert!(stage4.has_feature("magnificent"));

        let stage6 = grow(&stage4, 12, day(11), GrowthPolicy::Recompute);
        assert!(stage6.has_feature("transcendent"));
        let count = |tag: &str| stage6.features.iter().filter(|f| *f == tag).count();
        assert_eq!(count("mature"), 1);
        assert_eq!(count("magnificent"), 1);
        assert_eq!(count("transcendent"), 1);
    }

    #[test]
    fn skipping_stages_unlocks_all_passed_milestones() {
        let p = plant("loved");
        let grown = grow(&p, 10, day(9), GrowthPolicy::Recompute);
        assert_eq!(grown.growth_stage, 5);
        for tag in ["mature", "magnificent", "transcendent"] {
            assert!(grown.has_feature(tag), "{tag}");
        }
    }

    #[test]
    fn recompute_can_shrink_but_keeps_features() {
        let p = plant("loved");
        let tall = grow(&p, 6, day(5), GrowthPolicy::Recompute);
        let reset = grow(&tall, 1, day(8), GrowthPolicy::Recompute);
        assert_eq!(reset.growth_stage, 0);
        assert!(reset.has_feature("mature"));
        assert_eq!(reset.consistency_streak, 1);
    }

    #[test]
    fn keep_highest_never_shrinks() {
        let p = plant("loved");
        let tall = grow(&p, 6, day(5), GrowthPolicy::KeepHighest);
        let reset = grow(&tall, 1, day(8), GrowthPolicy::KeepHighest);
        assert_eq!(reset.growth_stage, 3);
        assert_eq!(reset.consistency_streak, 1);
    }

    #[test]
    fn regrowth_after_reset_does_not_duplicate_features() {
        let p = plant("loved");
        let tall = grow(&p, 6, day(5), GrowthPolicy::Recompute);
        let reset = grow(&tall, 1, day(8), GrowthPolicy::Recompute);
        let again = grow(&reset, 6, day(13), GrowthPolicy::Recompute);
        assert_eq!(again.features.iter().filter(|f| *f == "mature").count(), 1);
    }
}
