//! TOML-based CLI configuration.
//!
//! Stores the defaults commands fall back to:
//! - Location of the entries file
//! - Report window counts (weeks, months)
//! - Consistency score weights
//!
//! Configuration is stored at `~/.config/habitdash/config.toml`
//! (`habitdash-dev` when `HABITDASH_ENV=development`).

use std::path::PathBuf;

use habitdash_core::ScoreWeights;
use serde::{Deserialize, Serialize};

/// Data location configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Entries file read when no `--file` flag is given.
    /// When unset, `<data_dir>/entries.json` is used.
    #[serde(default)]
    pub entries_file: Option<String>,
}

/// Report window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    #[serde(default = "default_months")]
    pub months: u32,
}

/// Consistency score weight configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_completion_rate")]
    pub completion_rate: f64,
    #[serde(default = "default_streak_consistency")]
    pub streak_consistency: f64,
    #[serde(default = "default_recent_activity")]
    pub recent_activity: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitdash/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub weights: WeightsConfig,
}

// Default functions
fn default_weeks() -> u32 {
    4
}
fn default_months() -> u32 {
    3
}
fn default_completion_rate() -> f64 {
    0.4
}
fn default_streak_consistency() -> f64 {
    0.3
}
fn default_recent_activity() -> f64 {
    0.3
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { entries_file: None }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            weeks: default_weeks(),
            months: default_months(),
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            completion_rate: 0.4,
            streak_consistency: 0.3,
            recent_activity: 0.3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            report: ReportConfig::default(),
            weights: WeightsConfig::default(),
        }
    }
}

/// Directory holding the config file and the default entries file.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let env = std::env::var("HABITDASH_ENV").unwrap_or_default();
    let dir_name = if env == "development" {
        "habitdash-dev"
    } else {
        "habitdash"
    };
    let home = dirs::home_dir().ok_or("cannot determine home directory")?;
    let dir = home.join(".config").join(dir_name);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
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
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| format!("cannot parse '{value}' as number"))?
                        } else {
                            return Err(format!("cannot parse '{value}' as number").into());
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
        }

        Err(format!("unknown config key: {key}").into())
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
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

    /// Set a config value by key. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Score weights commands should blend with.
    pub fn score_weights(&self) -> ScoreWeights {
        ScoreWeights {
            completion_rate: self.weights.completion_rate,
            streak_consistency: self.weights.streak_consistency,
            recent_activity: self.weights.recent_activity,
        }
    }

    /// Entries file commands fall back to when no `--file` flag is given.
    pub fn entries_file(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match &self.data.entries_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(data_dir()?.join("entries.json")),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
