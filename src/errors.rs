//! Error types for adb_ferry
//!
//! This module defines error types for all components of the application.
//! Errors are designed to be actionable and provide clear context for
//! user feedback: every variant carries the text a handler needs to report
//! the condition without reaching back into the failed operation.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors from invoking the ADB binary itself
#[derive(Error, Debug)]
pub enum AdbError {
    /// ADB executable not found on the search path; fatal
    #[error("ADB not found. {hint}")]
    ToolMissing { hint: String },

    /// ADB ran but exited non-zero (e.g. no daemon running)
    #[error("Error running ADB command: {status}")]
    CommandFailed { status: ExitStatus, stderr: String },

    /// I/O failure while talking to the child process
    #[error("I/O error while running ADB")]
    Io(#[from] std::io::Error),
}

/// Device enumeration and resolution errors
#[derive(Error, Debug)]
pub enum DeviceError {
    /// No devices in ready state
    #[error(
        "No devices connected via ADB. Please check your USB connection and enable USB debugging"
    )]
    NoDevices,

    /// An explicitly requested device is not attached
    #[error("Device {id} not found")]
    NotFound { id: String },

    /// Multiple devices attached and none selected
    #[error("Multiple devices found. Please specify one with -s")]
    Ambiguous { devices: Vec<String> },
}

/// Transfer subprocess errors
#[derive(Error, Debug)]
pub enum TransferError {
    /// Failed to spawn the push/pull child process
    #[error("Failed to start transfer process")]
    Spawn(#[source] std::io::Error),

    /// Child process exited non-zero
    #[error("Failed to {action}: {detail}")]
    Failed { action: String, detail: String },

    /// Interrupted by the user; the child process was killed
    #[error("Transfer interrupted")]
    Interrupted,

    /// I/O failure while supervising the child process
    #[error("I/O error while supervising transfer")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly specified configuration file does not exist
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// I/O error reading the configuration file
    #[error("I/O error reading configuration")]
    Io(#[from] std::io::Error),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// ADB invocation error
    #[error(transparent)]
    Adb(#[from] AdbError),

    /// Device resolution error
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Transfer error
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("{message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Adb(_) => "adb",
            AppError::Device(_) => "device",
            AppError::Transfer(_) => "transfer",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }

    /// Whether this error means "nothing to do" rather than a real failure
    ///
    /// The no-devices condition aborts the operation but exits cleanly;
    /// everything else is a reportable failure.
    pub fn is_clean_stop(&self) -> bool {
        matches!(self, AppError::Device(DeviceError::NoDevices))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// ADB invocation result type alias
pub type AdbResult<T> = std::result::Result<T, AdbError>;

/// Device resolution result type alias
pub type DeviceResult<T> = std::result::Result<T, DeviceError>;

/// Transfer result type alias
pub type TransferResult<T> = std::result::Result<T, TransferError>;
