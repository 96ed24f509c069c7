//! Battery change detection for RemOS
//!
//! The HAL core deliberately does not decide when a battery change
//! occurred; this crate does. [`BatteryWatcher`] polls a shared
//! [`BatterySource`] on an interval, compares each sample against the
//! last-known status, and emits a [`BatteryEvent`] over a channel when
//! they differ. The thread that owns the `Hal` drains the channel and
//! calls `notify_battery_change`.

use remos_hal::{BatterySource, BatteryStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::Duration;

/// Watcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Sampling interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl WatcherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Events emitted by the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryEvent {
    /// The sampled status differs from the last-known one. The first
    /// sample after start is always emitted so consumers learn the
    /// initial status.
    Changed(BatteryStatus),
}

/// Watches a battery source for status changes
pub struct BatteryWatcher {
    source: Arc<dyn BatterySource>,
    config: WatcherConfig,
    tx: Sender<BatteryEvent>,
    rx: Receiver<BatteryEvent>,
    running: Arc<AtomicBool>,
}

impl BatteryWatcher {
    pub fn new(source: Arc<dyn BatterySource>, config: WatcherConfig) -> Self {
        let (tx, rx) = channel();
        Self {
            source,
            config,
            tx,
            rx,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start the polling thread. Starting an already running watcher
    /// is a no-op.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let running = Arc::clone(&self.running);
        let interval = self.config.poll_interval();

        thread::spawn(move || {
            tracing::info!("Battery watcher started, polling every {:?}", interval);

            let mut last: Option<BatteryStatus> = None;

            while running.load(Ordering::SeqCst) {
                let status = BatteryStatus {
                    percentage: source.percentage(),
                    is_charging: source.is_charging(),
                };

                if last != Some(status) {
                    tracing::debug!("Battery changed: {:?} -> {:?}", last, status);
                    if tx.send(BatteryEvent::Changed(status)).is_err() {
                        // Receiver gone, nothing left to notify
                        break;
                    }
                    last = Some(status);
                }

                thread::sleep(interval);
            }

            tracing::info!("Battery watcher stopped");
        });
    }

    /// Ask the polling thread to exit after its current sleep.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Try to receive an event without blocking
    pub fn try_recv(&self) -> Option<BatteryEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event
    pub fn recv(&self) -> Option<BatteryEvent> {
        self.rx.recv().ok()
    }

    /// Wait for an event with timeout
    pub fn recv_timeout(&self, timeout: Duration) -> Option<BatteryEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl Drop for BatteryWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
