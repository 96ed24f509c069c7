//! HAL core
//!
//! Owns an optional shared battery source and the battery-change
//! observer registry. The core only samples and broadcasts; deciding
//! *when* a change occurred belongs to a driver such as the
//! remos-monitor watcher.

use crate::battery::{BatterySource, BatteryStatus};
use std::sync::Arc;

/// Opaque token identifying a registered battery-change handler.
///
/// Returned by [`Hal::on_battery_change`] and accepted by
/// [`Hal::remove_battery_handler`]; handlers are never compared by
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// A battery-change callback. Runs synchronously during notification
/// and reports failure by returning Err.
pub type BatteryHandler = Box<dyn Fn(BatteryStatus) -> anyhow::Result<()>>;

/// A handler failure captured during fan-out.
#[derive(Debug)]
pub struct HandlerFailure {
    /// Token of the handler that failed
    pub handler: HandlerId,
    /// The error it returned
    pub error: anyhow::Error,
}

/// The hardware abstraction core.
///
/// Single-threaded by design: the registry is not locked, so
/// registration and notification must happen on the thread that owns
/// the `Hal`. Cross-thread composition is done by sending events over
/// a channel to that thread.
pub struct Hal {
    battery: Option<Arc<dyn BatterySource>>,
    handlers: Vec<(HandlerId, BatteryHandler)>,
    next_handler_id: u64,
}

impl Hal {
    /// Create the core. The battery source is bound here for the
    /// lifetime of the `Hal`; `None` means the device carries no
    /// battery telemetry and is a valid permanent configuration.
    pub fn new(battery: Option<Arc<dyn BatterySource>>) -> Self {
        Self {
            battery,
            handlers: Vec::new(),
            next_handler_id: 0,
        }
    }

    /// Sample the battery source.
    ///
    /// Returns `Some` exactly when a source is present, composing its
    /// percentage and charging flag unmodified. `None` means battery
    /// status is unavailable on this device, not an error.
    pub fn battery_status(&self) -> Option<BatteryStatus> {
        self.battery.as_ref().map(|battery| BatteryStatus {
            percentage: battery.percentage(),
            is_charging: battery.is_charging(),
        })
    }

    /// Whether a battery source was configured at construction.
    pub fn has_battery(&self) -> bool {
        self.battery.is_some()
    }

    /// Register a battery-change handler.
    ///
    /// Handlers are invoked in registration order. The returned token
    /// is the only way to remove the registration later.
    pub fn on_battery_change<F>(&mut self, handler: F) -> HandlerId
    where
        F: Fn(BatteryStatus) -> anyhow::Result<()> + 'static,
    {
        let id = HandlerId(self.next_handler_id);
        self.next_handler_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a previously registered handler by token.
    ///
    /// Returns false if the token is unknown (never issued, or already
    /// removed).
    pub fn remove_battery_handler(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Broadcast a battery status to every registered handler.
    ///
    /// This is a pure broadcast primitive: each handler currently in
    /// the registry runs exactly once, in registration order, with the
    /// same status value. A failing handler does not abort delivery;
    /// its error is collected into the returned list and fan-out
    /// continues with the next handler.
    pub fn notify_battery_change(&self, status: BatteryStatus) -> Vec<HandlerFailure> {
        let mut failures = Vec::new();

        for (id, handler) in &self.handlers {
            if let Err(error) = handler(status) {
                tracing::warn!("Battery handler {:?} failed: {:#}", id, error);
                failures.push(HandlerFailure {
                    handler: *id,
                    error,
                });
            }
        }

        failures
    }

    /// Number of currently registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
