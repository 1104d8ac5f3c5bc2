//! adb_ferry library
//!
//! A thin wrapper around the Android Debug Bridge for copying files
//! between a desktop machine and an attached device, with device
//! resolution, size estimation, and progress reporting.

pub mod adb;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessible() {
        assert_eq!(constants::adb::BINARY, "adb");
        assert_eq!(constants::transfer::DEFAULT_REMOTE_DIR, "/sdcard/Music");
    }

    #[test]
    fn test_error_types() {
        let device_error = errors::DeviceError::NoDevices;
        let app_error = AppError::Device(device_error);

        assert_eq!(app_error.category(), "device");
        assert!(app_error.is_clean_stop());
    }
}
