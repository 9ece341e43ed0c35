//! A garden bound to a key-value store.
//!
//! State is read once when the session opens and written after each
//! mutation. Writes are best-effort: a failed save is logged and reported
//! alongside the result, but the in-memory change stands.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::emotion::Emotion;
use crate::error::Result;
use crate::garden::{DecorationKind, Garden, GardenState, LogOutcome};
use crate::storage::{load_state, save_state, GardenConfig, KvStore};

/// Outcome of a mutating call, plus any non-fatal persistence problem.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub persist_warning: Option<String>,
}

impl<T> Persisted<T> {
    pub fn is_saved(&self) -> bool {
        self.persist_warning.is_none()
    }
}

pub struct GardenSession<S: KvStore> {
    store: S,
    garden: Garden,
}

impl<S: KvStore> GardenSession<S> {
    /// Load the garden from `store`. A store that cannot be read yields an
    /// empty garden rather than an error.
    pub fn open(store: S, config: &GardenConfig) -> Self {
        let state = load_state(&store).unwrap_or_else(|e| {
            warn!(error = %e, "could not load garden, starting empty");
            GardenState::default()
        });
        Self {
            store,
            garden: Garden::with_config(state, config),
        }
    }

    /// Like [`open`](Self::open), but surfaces load failures.
    ///
    /// # Errors
    /// Returns the store or decoding error.
    pub fn open_strict(store: S, config: &GardenConfig) -> Result<Self> {
        let state = load_state(&store)?;
        Ok(Self {
            store,
            garden: Garden::with_config(state, config),
        })
    }

    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn can_log_today(&self, now: DateTime<Utc>) -> bool {
        self.garden.can_log_today(now)
    }

    pub fn log_emotion(&mut self, emotion: &Emotion, now: DateTime<Utc>) -> Persisted<LogOutcome> {
        let outcome = self.garden.log_emotion(emotion, now);
        self.persist(outcome)
    }

    /// # Errors
    /// Returns [`CoreError::AlreadyLogged`](crate::CoreError::AlreadyLogged)
    /// when today's log is used up; nothing is saved in that case.
    pub fn try_log_emotion(
        &mut self,
        emotion: &Emotion,
        now: DateTime<Utc>,
    ) -> Result<Persisted<LogOutcome>> {
        let outcome = self.garden.try_log_emotion(emotion, now)?;
        Ok(self.persist(outcome))
    }

    pub fn add_decoration(&mut self, kind: DecorationKind) -> Persisted<()> {
        self.garden.add_decoration(kind);
        self.persist(())
    }

    pub fn reset_watered(&mut self, now: DateTime<Utc>) -> Persisted<usize> {
        let changed = self.garden.reset_watered(now);
        self.persist(changed)
    }

    pub fn reset(&mut self) -> Persisted<()> {
        self.garden.reset();
        self.persist(())
    }

    /// Write the current state now.
    ///
    /// # Errors
    /// Returns the store error.
    pub fn save(&self) -> Result<()> {
        save_state(&self.store, self.garden.state())
    }

    fn persist<T>(&self, value: T) -> Persisted<T> {
        let persist_warning = match self.save() {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "failed to save garden");
                Some(e.to_string())
            }
        };
        Persisted {
            value,
            persist_warning,
        }
    }
}
