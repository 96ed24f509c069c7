//! Mock implementations for testing without real hardware
//!
//! Mock backends for the battery source and the device operations,
//! allowing development and testing on desktop systems without remote
//! hardware attached.
//!
//! # Usage
//!
//! ```no_run
//! use remos_hal::mock::MockBattery;
//! use remos_hal::Hal;
//! use std::sync::Arc;
//!
//! let battery = Arc::new(MockBattery::new(85, false));
//! let hal = Hal::new(Some(battery.clone()));
//!
//! // Simulate the charger being plugged in
//! battery.set_charging(true);
//! ```

use crate::battery::BatterySource;
use crate::device::{Device, DeviceError};
use std::sync::{Arc, RwLock};

/// Shared mock battery state
#[derive(Debug, Clone)]
pub struct MockBatteryState {
    /// Percent remaining (0-100)
    pub percentage: u8,
    /// Charger attached
    pub is_charging: bool,
}

/// Mock battery source for testing
///
/// Clones share the same underlying state, so a test can hand one
/// clone to the HAL or a watcher and keep another to mutate.
#[derive(Debug, Clone)]
pub struct MockBattery {
    state: Arc<RwLock<MockBatteryState>>,
}

impl MockBattery {
    /// Create with an initial reading
    pub fn new(percentage: u8, is_charging: bool) -> Self {
        Self {
            state: Arc::new(RwLock::new(MockBatteryState {
                percentage: percentage.min(100),
                is_charging,
            })),
        }
    }

    /// Simulate a battery level change
    pub fn set_percentage(&self, percentage: u8) {
        if let Ok(mut state) = self.state.write() {
            state.percentage = percentage.min(100);
        }
    }

    /// Simulate plugging or unplugging the charger
    pub fn set_charging(&self, charging: bool) {
        if let Ok(mut state) = self.state.write() {
            state.is_charging = charging;
        }
    }
}

impl Default for MockBattery {
    fn default() -> Self {
        Self::new(85, false)
    }
}

impl BatterySource for MockBattery {
    fn percentage(&self) -> u8 {
        self.state.read().map(|s| s.percentage).unwrap_or(0)
    }

    fn is_charging(&self) -> bool {
        self.state.read().map(|s| s.is_charging).unwrap_or(false)
    }
}

/// Everything a mock device has been asked to do
#[derive(Debug, Clone, Default)]
pub struct MockDeviceLog {
    pub init_calls: u32,
    pub ir_sends: u32,
    pub published: Vec<(String, String)>,
    pub debug_lines: Vec<String>,
}

/// Mock device for testing
///
/// Records every operation for assertion instead of touching hardware.
#[derive(Debug, Clone, Default)]
pub struct MockDevice {
    log: Arc<RwLock<MockDeviceLog>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded operations
    pub fn log(&self) -> MockDeviceLog {
        self.log.read().map(|l| l.clone()).unwrap_or_default()
    }
}

impl Device for MockDevice {
    fn init(&mut self) -> Result<(), DeviceError> {
        if let Ok(mut log) = self.log.write() {
            log.init_calls += 1;
        }
        tracing::debug!("[MOCK] Device initialized");
        Ok(())
    }

    fn send_ir(&mut self) -> Result<(), DeviceError> {
        if let Ok(mut log) = self.log.write() {
            log.ir_sends += 1;
        }
        tracing::debug!("[MOCK] IR command sent");
        Ok(())
    }

    fn publish(&mut self, topic: &str, payload: &str) -> Result<(), DeviceError> {
        if let Ok(mut log) = self.log.write() {
            log.published.push((topic.to_string(), payload.to_string()));
        }
        tracing::debug!("[MOCK] Published {} bytes to {}", payload.len(), topic);
        Ok(())
    }

    fn debug_print(&mut self, message: &str) {
        if let Ok(mut log) = self.log.write() {
            log.debug_lines.push(message.to_string());
        }
        tracing::debug!("[MOCK] {}", message);
    }
}
