//! Device enumeration and resolution
//!
//! Parses the line-oriented output of `adb devices` and applies the
//! device-selection policy: an explicit identifier wins, a sole attached
//! device is selected automatically, and anything else stops before a
//! transfer is attempted.

use tracing::debug;

use crate::constants::adb;
use crate::errors::{AdbResult, DeviceError, DeviceResult};

use super::runner::AdbRunner;

/// Parse `adb devices` output into ready-state device identifiers
///
/// The first line is the listing header and is skipped. Each remaining
/// line carries an identifier token and a state token; only lines whose
/// state equals "device" (ready for file operations, as opposed to
/// unauthorized or offline) are retained, in output order.
pub fn parse_devices(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let id = parts.next()?;
            let state = parts.next()?;
            (state == adb::READY_STATE).then(|| id.to_string())
        })
        .collect()
}

/// Enumerate attached devices in ready state
///
/// # Errors
///
/// Propagates [`crate::errors::AdbError::ToolMissing`] (fatal) and
/// [`crate::errors::AdbError::CommandFailed`]; the caller treats the
/// latter as an empty listing after reporting it.
pub async fn list_devices(runner: &AdbRunner) -> AdbResult<Vec<String>> {
    let output = runner.output([adb::DEVICES_SUBCOMMAND]).await?;
    let devices = parse_devices(&output);
    debug!(count = devices.len(), "Enumerated ADB devices");
    Ok(devices)
}

/// Apply the device-selection policy to an enumerated set
///
/// An empty set is "nothing to do" regardless of any explicit selector.
pub fn resolve_device(devices: &[String], explicit: Option<&str>) -> DeviceResult<String> {
    if devices.is_empty() {
        return Err(DeviceError::NoDevices);
    }

    match explicit {
        Some(id) => {
            if devices.iter().any(|d| d == id) {
                Ok(id.to_string())
            } else {
                Err(DeviceError::NotFound { id: id.to_string() })
            }
        }
        None if devices.len() == 1 => Ok(devices[0].clone()),
        None => Err(DeviceError::Ambiguous {
            devices: devices.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "List of devices attached\n\
                           emulator-5554\tdevice\n\
                           9A301FFAZ009XY\tdevice\n\
                           0123456789ABCDEF\tunauthorized\n";

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_retains_only_ready_devices_in_order() {
        let devices = parse_devices(LISTING);
        assert_eq!(devices, ids(&["emulator-5554", "9A301FFAZ009XY"]));
    }

    #[test]
    fn test_parse_skips_header_line() {
        // A header alone yields nothing, even though "devices" looks like a token
        let devices = parse_devices("List of devices attached\n");
        assert!(devices.is_empty());
    }

    #[test]
    fn test_parse_ignores_blank_and_short_lines() {
        let output = "List of devices attached\n\n9A301FFAZ009XY\n  \nemulator-5554\tdevice\n";
        assert_eq!(parse_devices(output), ids(&["emulator-5554"]));
    }

    #[test]
    fn test_parse_offline_devices_excluded() {
        let output = "List of devices attached\nemulator-5554\toffline\n";
        assert!(parse_devices(output).is_empty());
    }

    #[test]
    fn test_resolve_empty_set_is_no_devices() {
        assert!(matches!(
            resolve_device(&[], None),
            Err(DeviceError::NoDevices)
        ));
        // Explicit selector does not change the no-devices outcome
        assert!(matches!(
            resolve_device(&[], Some("emulator-5554")),
            Err(DeviceError::NoDevices)
        ));
    }

    #[test]
    fn test_resolve_sole_device_selected_automatically() {
        let devices = ids(&["emulator-5554"]);
        assert_eq!(resolve_device(&devices, None).unwrap(), "emulator-5554");
    }

    #[test]
    fn test_resolve_multiple_devices_is_ambiguous() {
        let devices = ids(&["emulator-5554", "9A301FFAZ009XY"]);
        match resolve_device(&devices, None) {
            Err(DeviceError::Ambiguous { devices: listed }) => {
                assert_eq!(listed, devices);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_explicit_device_present() {
        let devices = ids(&["emulator-5554", "9A301FFAZ009XY"]);
        assert_eq!(
            resolve_device(&devices, Some("9A301FFAZ009XY")).unwrap(),
            "9A301FFAZ009XY"
        );
    }

    #[test]
    fn test_resolve_explicit_device_absent() {
        let devices = ids(&["emulator-5554"]);
        match resolve_device(&devices, Some("missing-id")) {
            Err(DeviceError::NotFound { id }) => assert_eq!(id, "missing-id"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
