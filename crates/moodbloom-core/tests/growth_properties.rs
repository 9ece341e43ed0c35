//! Property tests for the growth engine invariants.

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use moodbloom_core::{emotion, grow, Emotion, Garden, GrowthPolicy, PlantGenerator};
use proptest::prelude::*;

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::days(n)
}

fn catalog_emotion() -> impl Strategy<Value = Emotion> {
    let all = emotion::catalog();
    (0..all.len()).prop_map(move |i| all[i].clone())
}

/// A log event: which emotion, its intensity, and how many days after the
/// previous event it happens (0 = same day, ignoring the gate).
fn log_event() -> impl Strategy<Value = (Emotion, u8, i64)> {
    (catalog_emotion(), 1u8..=5, 0i64..=3)
}

proptest! {
    #[test]
    fn one_plant_per_emotion(events in prop::collection::vec(log_event(), 1..40)) {
        let mut garden = Garden::default();
        let mut offset = 0;
        let mut seen = HashSet::new();
        for (emotion, intensity, gap) in events {
            offset += gap;
            let emotion = emotion.with_intensity(intensity).unwrap();
            seen.insert(emotion.id.clone());
            garden.log_emotion(&emotion, day(offset));
        }
        let ids: HashSet<_> = garden.plants().iter().map(|p| p.emotion.id.clone()).collect();
        prop_assert_eq!(ids.len(), garden.plants().len());
        prop_assert_eq!(ids, seen);
    }

    #[test]
    fn frozen_fields_and_append_only_features(
        events in prop::collection::vec(log_event(), 1..40),
    ) {
        let mut garden = Garden::default();
        let mut offset = 0;
        for (emotion, intensity, gap) in events {
            offset += gap;
            let emotion = emotion.with_intensity(intensity).unwrap();
            let before = garden.plant_for_emotion(&emotion.id).cloned();
            let after = garden.log_emotion(&emotion, day(offset)).plant;

            prop_assert!(after.growth_stage <= after.max_growth_stage);
            if let Some(before) = before {
                prop_assert_eq!(before.rarity, after.rarity);
                prop_assert_eq!(before.max_growth_stage, after.max_growth_stage);
                prop_assert_eq!(&before.id, &after.id);
                prop_assert!(after.features.starts_with(&before.features));
            }
        }
    }

    #[test]
    fn consecutive_run_grows_by_formula(emotion in catalog_emotion(), days in 1i64..30) {
        let mut garden = Garden::default();
        let mut plant = None;
        for n in 0..days {
            plant = Some(garden.log_emotion(&emotion, day(n)).plant);
        }
        let plant = plant.unwrap();
        let streak = days as u32;
        prop_assert_eq!(plant.consistency_streak, streak);
        prop_assert_eq!(
            u32::from(plant.growth_stage),
            (streak / 2).min(u32::from(plant.max_growth_stage))
        );
    }

    #[test]
    fn grow_never_removes_features(
        emotion in catalog_emotion(),
        streaks in prop::collection::vec(1u32..20, 1..20),
        keep_highest in any::<bool>(),
    ) {
        let policy = if keep_highest { GrowthPolicy::KeepHighest } else { GrowthPolicy::Recompute };
        let mut plant = PlantGenerator::default().generate(&emotion, day(0));
        for (i, streak) in streaks.into_iter().enumerate() {
            let next = grow(&plant, streak, day(i as i64 + 1), policy);
            let before: HashSet<_> = plant.features.iter().collect();
            let after: HashSet<_> = next.features.iter().collect();
            prop_assert!(after.is_superset(&before));
            prop_assert_eq!(after.len(), next.features.len());
            if keep_highest {
                prop_assert!(next.growth_stage >= plant.growth_stage);
            }
            plant = next;
        }
    }
}
