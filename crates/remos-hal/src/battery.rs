//! Battery telemetry
//!
//! Defines the battery status value type, the battery source capability
//! consumed by the HAL core, and a sysfs-backed source for Linux-based
//! remote hardware.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A point-in-time battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryStatus {
    /// Percent of battery remaining (0-100)
    pub percentage: u8,
    /// True while the battery is being charged
    pub is_charging: bool,
}

/// A battery sensing capability.
///
/// Both reads are expected to be cheap, synchronous, and infallible; a
/// concrete source substitutes a safe default when the underlying read
/// fails rather than surfacing an error.
pub trait BatterySource: Send + Sync {
    /// Percent of battery remaining (0-100)
    fn percentage(&self) -> u8;

    /// Whether the battery is currently charging
    fn is_charging(&self) -> bool;
}

/// Sysfs locations for the battery and charger power supplies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryPaths {
    pub battery_path: PathBuf,
    pub charger_path: PathBuf,
}

impl Default for BatteryPaths {
    fn default() -> Self {
        Self {
            battery_path: PathBuf::from("/sys/class/power_supply/battery"),
            charger_path: PathBuf::from("/sys/class/power_supply/usb"),
        }
    }
}

/// Battery source reading Linux `/sys/class/power_supply`.
pub struct SysfsBattery {
    battery_path: PathBuf,
    charger_path: PathBuf,
}

impl SysfsBattery {
    /// Create with the default sysfs paths.
    pub fn new() -> Self {
        Self::with_paths(BatteryPaths::default())
    }

    /// Create with explicit sysfs paths.
    pub fn with_paths(paths: BatteryPaths) -> Self {
        Self {
            battery_path: paths.battery_path,
            charger_path: paths.charger_path,
        }
    }

    /// Create by scanning `/sys/class/power_supply` for battery and
    /// charger entries, falling back to the default paths.
    pub fn detect() -> Self {
        let mut source = Self::new();

        let power_supply_dir = Path::new("/sys/class/power_supply");
        let Ok(entries) = fs::read_dir(power_supply_dir) else {
            return source;
        };

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_lowercase();

            // The type file distinguishes batteries from chargers
            let Ok(psu_type) = fs::read_to_string(path.join("type")) else {
                continue;
            };
            let psu_type = psu_type.trim().to_lowercase();

            if psu_type == "battery" {
                tracing::info!("Found battery at {}", path.display());
                source.battery_path = path;
            } else if psu_type == "usb" || psu_type == "mains" || name.contains("charger") {
                tracing::info!("Found charger at {}", path.display());
                source.charger_path = path;
            }
        }

        source
    }

    /// Read integer from a sysfs file
    fn read_sysfs_int(path: &Path) -> Option<i64> {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    /// Check if the charger reports itself online
    fn is_charger_connected(&self) -> bool {
        match fs::read_to_string(self.charger_path.join("online")) {
            Ok(contents) => contents.trim() == "1",
            Err(_) => false,
        }
    }
}

impl Default for SysfsBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl BatterySource for SysfsBattery {
    fn percentage(&self) -> u8 {
        Self::read_sysfs_int(&self.battery_path.join("capacity"))
            .unwrap_or(0)
            .clamp(0, 100) as u8
    }

    fn is_charging(&self) -> bool {
        let status = fs::read_to_string(self.battery_path.join("status")).unwrap_or_default();
        match status.trim() {
            "Charging" | "Full" => true,
            "Discharging" | "Not charging" => false,
            _ => self.is_charger_connected(),
        }
    }
}
