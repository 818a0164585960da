// src/config.rs
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Timing and asset settings for the player. Every field has a default, so a
/// partial JSON file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Scheduler tick period.
    pub tick_interval_ms: u64,
    /// How long one renderer initialization attempt may take.
    pub attempt_timeout_ms: u64,
    /// Ceiling across all initialization attempts.
    pub overall_timeout_ms: u64,
    /// Pause between initialization attempts.
    pub retry_delay_ms: u64,
    pub max_retries: u32,
    /// Delay between renderer readiness and the preload probe.
    pub warmup_delay_ms: u64,
    pub sentinel_gesture: String,
    pub asset_dir: String,
    pub asset_extension: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            attempt_timeout_ms: 5000,
            overall_timeout_ms: 30_000,
            retry_delay_ms: 1000,
            max_retries: 2,
            warmup_delay_ms: 2000,
            sentinel_gesture: "hello".to_string(),
            asset_dir: "SignFiles".to_string(),
            asset_extension: "sigml".to_string(),
        }
    }
}

impl PlayerConfig {
    /// Reads the config at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }

    pub fn overall_timeout(&self) -> Duration {
        Duration::from_millis(self.overall_timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn warmup_delay(&self) -> Duration {
        Duration::from_millis(self.warmup_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tick_interval_ms": 250, "asset_dir": "assets"}}"#).unwrap();
        let config = PlayerConfig::load(file.path()).unwrap();
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.asset_dir, "assets");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.sentinel_gesture, "hello");
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlayerConfig::load(&dir.path().join("player.json")).unwrap();
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn bad_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ tick_interval_ms: }}").unwrap();
        assert!(matches!(PlayerConfig::load(file.path()), Err(ConfigError::Parse(_))));
    }
}
