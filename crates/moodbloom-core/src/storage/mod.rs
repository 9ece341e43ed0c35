pub mod config;
pub mod database;
pub mod garden_store;

pub use config::{Config, GardenConfig};
pub use database::Database;
pub use garden_store::{load_state, save_state};

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Result;

/// One write in a [`KvStore::apply`] batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvOp {
    Set { key: String, value: String },
    Remove { key: String },
}

impl KvOp {
    pub fn set(key: &str, value: impl Into<String>) -> Self {
        KvOp::Set {
            key: key.to_string(),
            value: value.into(),
        }
    }

    pub fn remove(key: &str) -> Self {
        KvOp::Remove {
            key: key.to_string(),
        }
    }
}

/// Opaque string key-value store the garden is persisted into.
pub trait KvStore {
    /// Get a value, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Apply every write in `ops`, or none of them.
    fn apply(&self, ops: &[KvOp]) -> Result<()>;
}

/// Process-local store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn apply(&self, ops: &[KvOp]) -> Result<()> {
        let mut entries = self.entries.borrow_mut();
        for op in ops {
            match op {
                KvOp::Set { key, value } => {
                    entries.insert(key.clone(), value.clone());
                }
                KvOp::Remove { key } => {
                    entries.remove(key);
                }
            }
        }
        Ok(())
    }
}

/// Returns the data directory, creating it if needed.
///
/// `MOODBLOOM_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/moodbloom[-dev]/`, with `MOODBLOOM_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("MOODBLOOM_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("MOODBLOOM_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("moodbloom-dev")
            } else {
                base_dir.join("moodbloom")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
