//! RemOS Battery Daemon
//!
//! Samples the battery through the HAL, broadcasts changes to the
//! registered handlers, and logs low/critical battery conditions.
//! This daemon is the change-detection driver the HAL core leaves to
//! the outside: the watcher decides when a change occurred, the HAL
//! only fans it out.

mod config;

use anyhow::{Context, Result};
use config::{BatterydConfig, ThresholdConfig};
use remos_hal::{BatterySource, Hal, SysfsBattery};
use remos_monitor::{BatteryEvent, BatteryWatcher};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{error, info, warn};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

fn main() -> Result<()> {
    setup_logging();

    info!("RemOS battery daemon starting...");

    setup_signal_handlers()?;

    let config = BatterydConfig::load_default().context("Failed to load configuration")?;

    let battery: Arc<dyn BatterySource> =
        Arc::new(SysfsBattery::with_paths(config.battery.clone()));
    let mut hal = Hal::new(Some(Arc::clone(&battery)));
    register_handlers(&mut hal, config.thresholds.clone());

    match hal.battery_status() {
        Some(status) => info!(
            "Initial battery status: {}%, charging: {}",
            status.percentage, status.is_charging
        ),
        None => info!("No battery telemetry on this device"),
    }

    let mut watcher = BatteryWatcher::new(battery, config.watcher.clone());
    watcher.start();

    run(&hal, &watcher)
}

/// Setup logging to console
fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_ansi(false))
        .init();
}

/// Setup signal handlers for graceful shutdown
fn setup_signal_handlers() -> Result<()> {
    use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

    let action = SigAction::new(
        SigHandler::Handler(handle_signal),
        SaFlags::empty(),
        SigSet::empty(),
    );

    unsafe {
        sigaction(Signal::SIGTERM, &action)?;
        sigaction(Signal::SIGINT, &action)?;
    }

    Ok(())
}

/// Signal handler
extern "C" fn handle_signal(sig: i32) {
    match sig {
        libc::SIGTERM | libc::SIGINT => {
            SHUTDOWN.store(true, Ordering::SeqCst);
        }
        _ => {}
    }
}

/// Register the daemon's battery-change handlers
fn register_handlers(hal: &mut Hal, thresholds: ThresholdConfig) {
    hal.on_battery_change(|status| {
        info!(
            "Battery changed: {}%, charging: {}",
            status.percentage, status.is_charging
        );
        Ok(())
    });

    hal.on_battery_change(move |status| {
        if status.is_charging {
            return Ok(());
        }

        if status.percentage <= thresholds.critical_battery {
            error!(
                "Battery critical: {}% (threshold {}%)",
                status.percentage, thresholds.critical_battery
            );
        } else if status.percentage <= thresholds.low_battery {
            warn!(
                "Battery low: {}% (threshold {}%)",
                status.percentage, thresholds.low_battery
            );
        }

        Ok(())
    });
}

/// Pump watcher events into the HAL broadcast until shutdown
fn run(hal: &Hal, watcher: &BatteryWatcher) -> Result<()> {
    while !SHUTDOWN.load(Ordering::SeqCst) {
        let Some(event) = watcher.recv_timeout(Duration::from_millis(500)) else {
            continue;
        };

        let BatteryEvent::Changed(status) = event;
        for failure in hal.notify_battery_change(status) {
            warn!(
                "Battery handler {:?} failed: {:#}",
                failure.handler, failure.error
            );
        }
    }

    watcher.stop();
    info!("Shutting down");
    Ok(())
}
