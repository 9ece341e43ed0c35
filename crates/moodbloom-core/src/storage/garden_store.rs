//! Mapping between [`GardenState`] and the key-value layout.
//!
//! | key | value |
//! |---|---|
//! | `plants` | JSON array of plants |
//! | `lastEmotionDate` | RFC 3339 timestamp, absent if never logged |
//! | `lastEmotionId` | emotion id, absent if never logged |
//! | `emotionStreak` | decimal integer |
//! | `decorations` | JSON array of decoration names |

use chrono::{DateTime, Utc};
use tracing::warn;

use super::{KvOp, KvStore};
use crate::error::{CoreError, Result};
use crate::garden::{DecorationKind, GardenState};
use crate::plant::Plant;

pub const PLANTS_KEY: &str = "plants";
pub const LAST_EMOTION_DATE_KEY: &str = "lastEmotionDate";
pub const LAST_EMOTION_ID_KEY: &str = "lastEmotionId";
pub const EMOTION_STREAK_KEY: &str = "emotionStreak";
pub const DECORATIONS_KEY: &str = "decorations";

/// Read the garden from `store`. Missing keys load as empty.
///
/// # Errors
/// Returns an error if the store fails or a present value is malformed.
/// Unknown decoration names are skipped with a warning rather than failing.
pub fn load_state(store: &dyn KvStore) -> Result<GardenState> {
    let plants: Vec<Plant> = match store.get(PLANTS_KEY)? {
        Some(json) => serde_json::from_str(&json)?,
        None => Vec::new(),
    };

    let last_emotion_date = store
        .get(LAST_EMOTION_DATE_KEY)?
        .map(|raw| {
            DateTime::parse_from_rfc3339(&raw)
                .map(|ts| ts.with_timezone(&Utc))
                .map_err(|e| CoreError::Custom(format!("invalid {LAST_EMOTION_DATE_KEY} '{raw}': {e}")))
        })
        .transpose()?;

    let last_emotion_id = store.get(LAST_EMOTION_ID_KEY)?;

    let emotion_streak = match store.get(EMOTION_STREAK_KEY)? {
        Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
            CoreError::Custom(format!("invalid {EMOTION_STREAK_KEY} '{raw}': {e}"))
        })?,
        None => 0,
    };

    let decorations = match store.get(DECORATIONS_KEY)? {
        Some(json) => {
            let names: Vec<String> = serde_json::from_str(&json)?;
            names
                .iter()
                .filter_map(|name| match name.parse::<DecorationKind>() {
                    Ok(kind) => Some(kind),
                    Err(e) => {
                        warn!(decoration = %name, error = %e, "skipping unknown decoration");
                        None
                    }
                })
                .collect()
        }
        None => Vec::new(),
    };

    Ok(GardenState {
        plants,
        last_emotion_id,
        last_emotion_date,
        emotion_streak,
        decorations,
    })
}

/// Write the whole garden to `store` as a single batch.
///
/// # Errors
/// Returns the serialization or store failure; on failure the store keeps
/// its previous contents.
pub fn save_state(store: &dyn KvStore, state: &GardenState) -> Result<()> {
    let ops = [
        KvOp::set(PLANTS_KEY, serde_json::to_string(&state.plants)?),
        match state.last_emotion_date {
            Some(ts) => KvOp::set(LAST_EMOTION_DATE_KEY, ts.to_rfc3339()),
            None => KvOp::remove(LAST_EMOTION_DATE_KEY),
        },
        match &state.last_emotion_id {
            Some(id) => KvOp::set(LAST_EMOTION_ID_KEY, id.as_str()),
            None => KvOp::remove(LAST_EMOTION_ID_KEY),
        },
        KvOp::set(EMOTION_STREAK_KEY, state.emotion_streak.to_string()),
        KvOp::set(DECORATIONS_KEY, serde_json::to_string(&state.decorations)?),
    ];
    store.apply(&ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion;
    use crate::garden::Garden;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    #[test]
    fn empty_store_loads_empty_garden() {
        let store = MemoryStore::new();
        assert_eq!(load_state(&store).unwrap(), GardenState::default());
    }

    #[test]
    fn save_then_load_preserves_state() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut garden = Garden::default();
        garden.log_emotion(&emotion::find("grateful").unwrap(), now);
        garden.add_decoration(DecorationKind::Bridge);

        let store = MemoryStore::new();
        save_state(&store, garden.state()).unwrap();

        assert_eq!(store.get(LAST_EMOTION_ID_KEY).unwrap().as_deref(), Some("grateful"));
        assert_eq!(store.get(EMOTION_STREAK_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(store.get(DECORATIONS_KEY).unwrap().as_deref(), Some("[\"bridge\"]"));
        assert_eq!(&load_state(&store).unwrap(), garden.state());
    }

    #[test]
    fn cleared_state_removes_optional_keys() {
        let store = MemoryStore::new();
        store.set(LAST_EMOTION_ID_KEY, "happy").unwrap();
        store.set(LAST_EMOTION_DATE_KEY, "2024-05-01T09:00:00+00:00").unwrap();
        save_state(&store, &GardenState::default()).unwrap();
        assert!(store.get(LAST_EMOTION_ID_KEY).unwrap().is_none());
        assert!(store.get(LAST_EMOTION_DATE_KEY).unwrap().is_none());
    }

    #[test]
    fn unknown_decorations_are_skipped() {
        let store = MemoryStore::new();
        store.set(DECORATIONS_KEY, "[\"bench\",\"gnome\",\"statue\"]").unwrap();
        let state = load_state(&store).unwrap();
        assert_eq!(state.decorations, vec![DecorationKind::Bench, DecorationKind::Statue]);
    }

    #[test]
    fn malformed_values_are_errors() {
        let store = MemoryStore::new();
        store.set(EMOTION_STREAK_KEY, "lots").unwrap();
        assert!(load_state(&store).is_err());

        let store = MemoryStore::new();
        store.set(LAST_EMOTION_DATE_KEY, "yesterday").unwrap();
        assert!(load_state(&store).is_err());

        let store = MemoryStore::new();
        store.set(PLANTS_KEY, "{not json").unwrap();
        assert!(load_state(&store).is_err());
    }
}
