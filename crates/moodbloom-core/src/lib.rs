//! # Mood Bloom Core Library
//!
//! The plant-growth engine behind Mood Bloom, a garden that grows from one
//! logged emotion per day. Each distinct emotion owns a single plant; logging
//! the same emotion on consecutive days grows it, breaking the chain resets
//! its streak.
//!
//! ## Architecture
//!
//! - **Catalog**: the fixed set of emotions a user can pick from
//! - **Plants**: rarity, creation and growth rules, all pure functions
//! - **Streaks**: the once-per-day gate and consecutive-day tracking
//! - **Garden**: the state container and the single log-event entry point
//! - **Storage**: SQLite key-value persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`Garden`]: in-memory state container, independent of storage
//! - [`GardenSession`]: a garden loaded from and saved to a [`KvStore`]
//! - [`PlantGenerator`] and [`grow`]: plant creation and growth
//! - [`StreakTracker`]: daily gate and streak computation
//! - [`Config`]: application configuration management

pub mod emotion;
pub mod error;
pub mod garden;
pub mod plant;
pub mod season;
pub mod session;
pub mod storage;
pub mod streak;

pub use emotion::{Emotion, EmotionCategory};
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use garden::{DecorationKind, Garden, GardenState, LogOutcome};
pub use plant::{
    determine_rarity, grow, GardenBounds, GrowthPolicy, Plant, PlantGenerator, Position, PotType,
    Rarity,
};
pub use season::Season;
pub use session::{GardenSession, Persisted};
pub use storage::{Config, Database, GardenConfig, KvOp, KvStore, MemoryStore};
pub use streak::{StreakTracker, StreakUpdate};
