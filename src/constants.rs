//! Application constants for adb_ferry
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// ADB invocation constants
pub mod adb {
    /// Name of the bridge tool binary, resolved on the search path
    pub const BINARY: &str = "adb";

    /// Subcommand that lists attached devices
    pub const DEVICES_SUBCOMMAND: &str = "devices";

    /// Subcommand that runs a shell command on the device
    pub const SHELL_SUBCOMMAND: &str = "shell";

    /// Flag that selects a specific device by identifier
    pub const DEVICE_FLAG: &str = "-s";

    /// State token reported for a device that is ready for file operations
    pub const READY_STATE: &str = "device";

    /// Hint appended to the fatal "binary not found" report
    pub const INSTALL_HINT: &str =
        "Please install platform-tools (brew install --cask android-platform-tools).";
}

/// Transfer defaults
pub mod transfer {
    use super::Duration;

    /// Default remote directory for pushed and pulled music files
    pub const DEFAULT_REMOTE_DIR: &str = "/sdcard/Music";

    /// Default local destination for pulled files
    pub const DEFAULT_LOCAL_DIR: &str = ".";

    /// Interval between child-process liveness polls
    pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

    /// Remote disk-usage command with byte-granularity summary output
    pub const REMOTE_DU_COMMAND: &str = "du -sb";
}

/// Progress bar rendering constants
pub mod progress {
    /// Template for a transfer bar with a known size estimate
    pub const BAR_TEMPLATE: &str =
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}";

    /// Template used when no size estimate is available
    pub const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

    /// Characters used to draw the bar
    pub const BAR_CHARS: &str = "##-";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_is_subsecond() {
        assert!(transfer::POLL_INTERVAL < Duration::from_secs(1));
        assert!(!transfer::POLL_INTERVAL.is_zero());
    }

    #[test]
    fn test_ready_state_token() {
        assert_eq!(adb::READY_STATE, "device");
    }
}
