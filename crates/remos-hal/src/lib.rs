//! Hardware Abstraction Layer (HAL)
//!
//! This crate is the boundary between the remote's application/UI
//! logic and device-specific hardware. Application code talks to the
//! [`Hal`] core and the [`Device`] trait; concrete drivers (IR
//! transmitter, MQTT link, display) live behind them.
//!
//! The implemented part is the battery subsystem: querying a battery
//! source for the current status and broadcasting changes to
//! registered handlers. Change *detection* is deliberately not here;
//! the remos-monitor crate polls a source and decides when to call
//! [`Hal::notify_battery_change`].
//!
//! # Example
//!
//! ```no_run
//! use remos_hal::{Hal, SysfsBattery};
//! use std::sync::Arc;
//!
//! let battery = Arc::new(SysfsBattery::detect());
//! let mut hal = Hal::new(Some(battery));
//!
//! hal.on_battery_change(|status| {
//!     println!("battery at {}%", status.percentage);
//!     Ok(())
//! });
//!
//! if let Some(status) = hal.battery_status() {
//!     println!("currently {}%", status.percentage);
//! }
//! ```

pub mod battery;
pub mod device;
pub mod hal;
pub mod mock;

pub use battery::{BatteryPaths, BatterySource, BatteryStatus, SysfsBattery};
pub use device::{Device, DeviceError};
pub use hal::{BatteryHandler, Hal, HandlerFailure, HandlerId};

/// HAL Result type
pub type Result<T> = std::result::Result<T, DeviceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hal_imports() {
        // Simple smoke test to ensure all modules can be imported
        let _ = std::mem::size_of::<Hal>();
    }
}
