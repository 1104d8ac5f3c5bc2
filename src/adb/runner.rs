//! Single choke point for invoking the ADB binary
//!
//! Every ADB invocation in the application goes through [`AdbRunner`], so
//! the "binary missing" and "command failed" conditions are classified in
//! exactly one place.

use std::ffi::OsStr;
use std::io;

use tokio::process::Command;
use tracing::debug;

use crate::constants::adb;
use crate::errors::{AdbError, AdbResult};

/// Handle for invoking the bridge tool
///
/// Holds the binary name (or path) to invoke; everything else is per-call.
#[derive(Debug, Clone)]
pub struct AdbRunner {
    binary: String,
}

impl AdbRunner {
    /// Create a runner for the given binary name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Build a command for the bridge tool without running it
    ///
    /// Used by the transfer runner, which needs to spawn and supervise the
    /// child itself rather than wait for captured output.
    pub fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.binary);
        command.args(args);
        command
    }

    /// Run a bridge command to completion and return its captured stdout
    ///
    /// # Errors
    ///
    /// Returns [`AdbError::ToolMissing`] when the binary is not on the
    /// search path (fatal for the caller), [`AdbError::CommandFailed`]
    /// when the command exits non-zero, with its stderr captured.
    pub async fn output<I, S>(&self, args: I) -> AdbResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self
            .command(args)
            .output()
            .await
            .map_err(|e| self.classify_spawn_error(e))?;

        if !output.status.success() {
            debug!(status = %output.status, "ADB command failed");
            return Err(AdbError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn classify_spawn_error(&self, error: io::Error) -> AdbError {
        if error.kind() == io::ErrorKind::NotFound {
            AdbError::ToolMissing {
                hint: adb::INSTALL_HINT.to_string(),
            }
        } else {
            AdbError::Io(error)
        }
    }
}

impl Default for AdbRunner {
    fn default() -> Self {
        Self::new(adb::BINARY)
    }
}
