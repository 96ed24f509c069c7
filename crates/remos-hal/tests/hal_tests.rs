//! Integration tests for the Hardware Abstraction Layer

use remos_hal::mock::{MockBattery, MockDevice};
use remos_hal::{BatteryStatus, Device, Hal};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn test_battery_status_end_to_end() {
    let battery = Arc::new(MockBattery::new(42, false));
    let hal = Hal::new(Some(battery.clone()));

    let status = hal.battery_status().expect("battery source is configured");
    assert_eq!(status.percentage, 42);
    assert!(!status.is_charging);

    // Sensor drains while the charger stays unplugged
    battery.set_percentage(41);
    let status = hal.battery_status().unwrap();
    assert_eq!(status.percentage, 41);
}

#[test]
fn test_device_without_battery_degrades_gracefully() {
    let hal = Hal::new(None);

    // Absence is a supported configuration, not a fault: UI code is
    // expected to omit the battery indicator.
    assert!(hal.battery_status().is_none());
    assert!(hal.battery_status().is_none());
}

#[test]
fn test_change_broadcast_drives_device_operations() {
    let mut hal = Hal::new(None);
    let device = Rc::new(RefCell::new(MockDevice::new()));

    let publisher = Rc::clone(&device);
    hal.on_battery_change(move |status| {
        publisher
            .borrow_mut()
            .publish("remote/battery", &status.percentage.to_string())?;
        Ok(())
    });

    let printer = Rc::clone(&device);
    hal.on_battery_change(move |status| {
        printer
            .borrow_mut()
            .debug_print(&format!("battery changed: {:?}", status));
        Ok(())
    });

    let failures = hal.notify_battery_change(BatteryStatus {
        percentage: 10,
        is_charging: true,
    });
    assert!(failures.is_empty());

    let log = device.borrow().log();
    assert_eq!(
        log.published,
        vec![("remote/battery".to_string(), "10".to_string())]
    );
    assert_eq!(log.debug_lines.len(), 1);
    assert!(log.debug_lines[0].contains("percentage: 10"));
}

#[test]
fn test_removed_handler_stops_receiving() {
    let mut hal = Hal::new(None);
    let device = Rc::new(RefCell::new(MockDevice::new()));

    let publisher = Rc::clone(&device);
    let token = hal.on_battery_change(move |status| {
        publisher
            .borrow_mut()
            .publish("remote/battery", &status.percentage.to_string())?;
        Ok(())
    });

    let status = BatteryStatus {
        percentage: 77,
        is_charging: false,
    };

    hal.notify_battery_change(status);
    assert!(hal.remove_battery_handler(token));
    hal.notify_battery_change(status);

    assert_eq!(device.borrow().log().published.len(), 1);
}
