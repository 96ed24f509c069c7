//! Device operations
//!
//! The operations a concrete remote hardware implementation must
//! supply. The HAL core only defines the boundary; IR encoding, MQTT
//! wire behavior, and display rendering live behind it in the device
//! drivers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Hardware initialization failed: {0}")]
    InitializationFailed(String),

    #[error("IR transmit failed: {0}")]
    TransmitFailed(String),

    #[error("Publish failed on topic {topic}: {reason}")]
    PublishFailed { topic: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Device operations supplied by a concrete hardware implementation.
pub trait Device {
    /// Bring up the device hardware.
    fn init(&mut self) -> Result<(), DeviceError>;

    /// Transmit the currently staged infrared command.
    fn send_ir(&mut self) -> Result<(), DeviceError>;

    /// Publish a message to the device's messaging backend.
    fn publish(&mut self, topic: &str, payload: &str) -> Result<(), DeviceError>;

    /// Write a line of debug text to the device's debug sink.
    fn debug_print(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_error_display() {
        let err = DeviceError::PublishFailed {
            topic: "remote/battery".into(),
            reason: "broker unreachable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Publish failed on topic remote/battery: broker unreachable"
        );
    }
}
