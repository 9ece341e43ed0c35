//! TOML-based application configuration.
//!
//! Stores garden behavior settings:
//! - Local day boundary (UTC offset) used for the daily gate and streaks
//! - Growth policy after a broken streak
//! - Whether a second log on the same day is refused
//! - Placement bounds for new plants
//!
//! Configuration is stored at `<data dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::plant::{GardenBounds, GrowthPolicy};

/// Largest offset accepted, in minutes (UTC-14:00 to UTC+14:00).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Garden behavior configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenConfig {
    /// Minutes east of UTC where the local calendar day is measured.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub growth_policy: GrowthPolicy,
    #[serde(default = "default_true")]
    pub enforce_daily_limit: bool,
    #[serde(default)]
    pub bounds: GardenBounds,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub garden: GardenConfig,
}

fn default_true() -> bool {
    true
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            growth_policy: GrowthPolicy::default(),
            enforce_daily_limit: true,
            bounds: GardenBounds::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".to_string(),
        };
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<i64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Check ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns an error naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let offset = self.garden.utc_offset_minutes;
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset) {
            return Err(ConfigError::InvalidValue {
                key: "garden.utc_offset_minutes".into(),
                message: format!("{offset} is outside ±{MAX_OFFSET_MINUTES}"),
            });
        }
        let b = &self.garden.bounds;
        if b.x_max > 100 || b.y_max > 100 {
            return Err(ConfigError::InvalidValue {
                key: "garden.bounds".into(),
                message: "bounds are percentages and must not exceed 100".into(),
            });
        }
        if b.x_min >= b.x_max || b.y_min >= b.y_max {
            return Err(ConfigError::InvalidValue {
                key: "garden.bounds".into(),
                message: "each minimum must be below its maximum".into(),
            });
        }
        Ok(())
    }

    /// Load from disk, writing the default config if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(load_failed(e.to_string()).into()),
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory, without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the field's type or range.
    pub fn update(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.update(key, value)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert!(parsed.garden.enforce_daily_limit);
        assert_eq!(parsed.garden.growth_policy, GrowthPolicy::Recompute);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str(
            "[garden]\ngrowth_policy = \"keep_highest\"\n[garden.bounds]\nx_min = 5\n",
        )
        .unwrap();
        assert_eq!(parsed.garden.growth_policy, GrowthPolicy::KeepHighest);
        assert_eq!(parsed.garden.bounds.x_min, 5);
        assert_eq!(parsed.garden.bounds.x_max, 90);
        assert_eq!(parsed.garden.utc_offset_minutes, 0);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("garden.enforce_daily_limit").as_deref(), Some("true"));
        assert_eq!(cfg.get("garden.bounds.y_max").as_deref(), Some("80"));
        assert_eq!(cfg.get("garden.growth_policy").as_deref(), Some("recompute"));
        assert!(cfg.get("garden.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn update_nested_values() {
        let mut cfg = Config::default();
        cfg.update("garden.utc_offset_minutes", "-300").unwrap();
        cfg.update("garden.growth_policy", "keep_highest").unwrap();
        cfg.update("garden.enforce_daily_limit", "false").unwrap();
        assert_eq!(cfg.garden.utc_offset_minutes, -300);
        assert_eq!(cfg.garden.growth_policy, GrowthPolicy::KeepHighest);
        assert!(!cfg.garden.enforce_daily_limit);
    }

    #[test]
    fn update_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(cfg.update("garden.nonexistent", "1").is_err());
        assert!(cfg.update("", "1").is_err());
    }

    #[test]
    fn update_rejects_invalid_values() {
        let mut cfg = Config::default();
        assert!(cfg.update("garden.enforce_daily_limit", "maybe").is_err());
        assert!(cfg.update("garden.growth_policy", "shrink").is_err());
        assert!(cfg.update("garden.utc_offset_minutes", "2000").is_err());
        assert!(cfg.update("garden.bounds.x_min", "95").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn missing_file_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn unreadable_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let original = b"[garden]\nutc_offset_minutes = 540\n# caf\xE9\n".to_vec();
        std::fs::write(&path, &original).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            crate::CoreError::Config(ConfigError::LoadFailed { .. })
        ));
        assert_eq!(std::fs::read(&path).unwrap(), original);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.update("garden.utc_offset_minutes", "540").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().garden.utc_offset_minutes, 540);
    }
}
