//! User-facing reporting boundary
//!
//! All terminal-facing message formatting lives here, separate from control
//! logic, so resolution and parsing stay testable without capturing
//! terminal output. Errors and warnings go to stderr; status messages go
//! to stdout.

use std::process::ExitStatus;

use colored::Colorize;

use crate::errors::{AppError, DeviceError, TransferError};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Report a fatal or aborting condition
pub fn error(message: &str) {
    eprintln!("{}", message.red());
}

/// Report supplementary diagnostic detail
pub fn detail(message: &str) {
    eprintln!("{}", message.yellow());
}

/// Report a plain informational line
pub fn plain(message: &str) {
    println!("{message}");
}

/// Report the device a transfer is bound to
pub fn connected(device: &str) {
    println!("Connected to: {}", device.green().bold());
}

/// Report the item about to be transferred and its size estimate
pub fn preparing(action: &str, item: &str, total_bytes: u64) {
    println!(
        "Preparing to {action}: {} ({:.2} MB)",
        item.cyan(),
        total_bytes as f64 / BYTES_PER_MB
    );
}

/// Report a completed transfer
pub fn success(message: &str) {
    println!("\n{}", format!("✓ {message}").green().bold());
}

/// Report a non-fatal ADB command failure with its captured stderr
pub fn adb_failure(status: ExitStatus, stderr: &str) {
    error(&format!("Error running ADB command: {status}"));
    if !stderr.is_empty() {
        detail(&format!("Details: {stderr}"));
    }
}

/// Render a terminal error for the user
///
/// Each error kind carries its own presentation: an ambiguous device set
/// is listed with the disambiguation hint, a failed transfer gets the ✗
/// marker, everything else is a single red line.
pub fn failure(err: &AppError) {
    match err {
        AppError::Device(DeviceError::Ambiguous { devices }) => {
            plain("Multiple devices found. Please specify one with -s:");
            for device in devices {
                plain(&format!("  - {device}"));
            }
        }
        AppError::Transfer(TransferError::Failed { .. }) => {
            eprintln!("\n{}", format!("✗ {err}").red());
        }
        _ => error(&err.to_string()),
    }
}
