//! Daemon configuration
//!
//! TOML-based configuration with sensible defaults when no file is
//! present.

use remos_hal::BatteryPaths;
use remos_monitor::WatcherConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Standard configuration paths
pub const CONFIG_DIR: &str = "/etc/remos";

/// Battery daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatterydConfig {
    #[serde(default)]
    pub watcher: WatcherConfig,

    #[serde(default)]
    pub battery: BatteryPaths,

    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

/// Warning thresholds for a discharging battery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_low_threshold")]
    pub low_battery: u8,

    #[serde(default = "default_critical_threshold")]
    pub critical_battery: u8,
}

fn default_low_threshold() -> u8 {
    20
}

fn default_critical_threshold() -> u8 {
    5
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            low_battery: default_low_threshold(),
            critical_battery: default_critical_threshold(),
        }
    }
}

impl BatterydConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load_default() -> Result<Self, ConfigError> {
        let system_config = PathBuf::from(CONFIG_DIR).join("batteryd.toml");
        if system_config.exists() {
            return Self::load(&system_config);
        }

        tracing::warn!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BatterydConfig::default();
        assert_eq!(config.watcher.poll_interval_ms, 1000);
        assert_eq!(config.thresholds.low_battery, 20);
        assert_eq!(config.thresholds.critical_battery, 5);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: BatterydConfig = toml::from_str(
            r#"
            [watcher]
            poll_interval_ms = 250

            [thresholds]
            low_battery = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.watcher.poll_interval_ms, 250);
        assert_eq!(config.thresholds.low_battery, 15);
        assert_eq!(config.thresholds.critical_battery, 5);
    }

    #[test]
    fn test_parse_battery_paths() {
        let config: BatterydConfig = toml::from_str(
            r#"
            [battery]
            battery_path = "/sys/class/power_supply/bq27546"
            charger_path = "/sys/class/power_supply/usb-c"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.battery.battery_path,
            PathBuf::from("/sys/class/power_supply/bq27546")
        );
    }
}
