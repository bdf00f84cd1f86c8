//! TOML-based application configuration.
//!
//! Stores:
//! - Default session length and event cadence
//! - An optional RNG seed for reproducible adventures
//! - The real-time driver's tick period
//!
//! Configuration is stored at `~/.config/focusquest/config.toml`, or under
//! `$FOCUSQUEST_HOME` when that is set.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, ValidationError};
use crate::session::validate_duration;

/// Returns the configuration directory, creating it if needed.
///
/// `FOCUSQUEST_HOME` wins when set. Otherwise `~/.config/focusquest[-dev]/`,
/// with `FOCUSQUEST_ENV=dev` selecting the development directory.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("FOCUSQUEST_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FOCUSQUEST_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("focusquest-dev")
            } else {
                base_dir.join("focusquest")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Per-session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Length a fresh or reset session starts with.
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    /// Clock ticks between adventure events.
    #[serde(default = "default_event_cadence_ticks")]
    pub event_cadence_ticks: u32,
    /// Fixed RNG seed. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Real-time driver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusquest/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub driver: DriverConfig,
}

fn default_duration_minutes() -> u32 {
    30
}
fn default_event_cadence_ticks() -> u32 {
    3
}
fn default_tick_millis() -> u64 {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration_minutes(),
            event_cadence_ticks: default_event_cadence_ticks(),
            seed: None,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

impl SessionConfig {
    pub fn duration_secs(&self) -> u64 {
        u64::from(self.duration_minutes) * 60
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_duration(self.duration_minutes)?;
        if self.event_cadence_ticks == 0 {
            return Err(ValidationError::InvalidValue {
                field: "session.event_cadence_ticks".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
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

    fn parse_leaf(key: &str, existing: &serde_json::Value, value: &str) -> Result<serde_json::Value> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let parsed = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => match value {
                "none" | "null" => serde_json::Value::Null,
                _ => serde_json::Value::Number(
                    value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                        .into(),
                ),
            },
            // Optional fields serialize as null; "none" clears them again.
            serde_json::Value::Null => match value {
                "" | "none" | "null" => serde_json::Value::Null,
                _ => match value.parse::<u64>() {
                    Ok(n) => serde_json::Value::Number(n.into()),
                    Err(_) => serde_json::Value::String(value.into()),
                },
            },
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(value)?
            }
            serde_json::Value::String(_) => serde_json::Value::String(value.into()),
        };
        Ok(parsed)
    }

    fn set_json_value_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<()> {
        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()).into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let new_value = Self::parse_leaf(key, existing, value)?;
                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()).into())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if no file exists.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.session.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default configuration");
            Self::default()
        })
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

    /// Update a value by dot-separated key without persisting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result fails validation. `self` is unchanged on error.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.session.validate()?;
        *self = updated;
        Ok(())
    }

    /// Update a value and save to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }
}
