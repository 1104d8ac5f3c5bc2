//! Transfer subprocess supervision
//!
//! Launches `adb push` / `adb pull` as a child process with captured
//! output and polls it to completion at a fixed interval, invoking a
//! heartbeat callback on each wake-up. ADB exposes no byte-level transfer
//! progress on its streams, so the heartbeat redraws without advancing;
//! the bar snaps to completion only when the child exits cleanly.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::constants::adb;
use crate::errors::{TransferError, TransferResult};

use super::runner::AdbRunner;

/// Directionality of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Desktop to device
    Push,
    /// Device to desktop
    Pull,
}

impl Direction {
    /// The ADB subcommand token for this direction
    pub fn subcommand(&self) -> &'static str {
        match self {
            Direction::Push => "push",
            Direction::Pull => "pull",
        }
    }

    /// Verb for "preparing to ..." and failure messages
    pub fn action(&self) -> &'static str {
        match self {
            Direction::Push => "copy",
            Direction::Pull => "download",
        }
    }

    /// Past participle for the success message
    pub fn past_participle(&self) -> &'static str {
        match self {
            Direction::Push => "copied",
            Direction::Pull => "downloaded",
        }
    }

    /// Label prefixing the progress bar message
    pub fn progress_label(&self) -> &'static str {
        match self {
            Direction::Push => "Pushing",
            Direction::Pull => "Pulling",
        }
    }
}

/// A single transfer, constructed once from CLI arguments
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub direction: Direction,
    pub device: String,
    pub source: String,
    pub destination: String,
}

impl TransferRequest {
    pub fn new(
        direction: Direction,
        device: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            device: device.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Final path component of the source, for user-facing messages
    pub fn item_name(&self) -> &str {
        let trimmed = self.source.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

/// Outcome of a completed transfer subprocess
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub success: bool,
    pub detail: Option<String>,
}

impl TransferOutcome {
    fn succeeded() -> Self {
        Self {
            success: true,
            detail: None,
        }
    }

    fn failed(detail: String) -> Self {
        Self {
            success: false,
            detail: Some(detail),
        }
    }
}

/// Run a transfer to completion, invoking `heartbeat` at each poll
///
/// The child is spawned with captured stdout/stderr (not streamed live)
/// and `kill_on_drop`, so it cannot outlive this process. Ctrl-C during
/// the wait kills the child and surfaces [`TransferError::Interrupted`].
/// A non-zero exit is not an `Err`: it produces a failure outcome carrying
/// the child's captured stderr, reported once by the caller. No retries.
pub async fn run<F>(
    runner: &AdbRunner,
    request: &TransferRequest,
    poll_interval: Duration,
    mut heartbeat: F,
) -> TransferResult<TransferOutcome>
where
    F: FnMut(),
{
    info!(
        device = %request.device,
        source = %request.source,
        destination = %request.destination,
        "Starting {}",
        request.direction.subcommand()
    );

    let mut child = runner
        .command([
            adb::DEVICE_FLAG,
            request.device.as_str(),
            request.direction.subcommand(),
            request.source.as_str(),
            request.destination.as_str(),
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(TransferError::Spawn)?;

    // Drain both pipes while polling, or a chatty child (adb prints a line
    // per transferred file) fills the pipe buffer and blocks forever
    let _stdout_drain = child.stdout.take().map(drain_to_string);
    let stderr_drain = child.stderr.take().map(drain_to_string);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let status = loop {
        if let Some(status) = child.try_wait().map_err(TransferError::Io)? {
            break status;
        }

        tokio::select! {
            _ = &mut ctrl_c => {
                debug!("Interrupt received, killing transfer process");
                let _ = child.kill().await;
                return Err(TransferError::Interrupted);
            }
            _ = tokio::time::sleep(poll_interval) => heartbeat(),
        }
    };

    if status.success() {
        info!("Transfer completed");
        Ok(TransferOutcome::succeeded())
    } else {
        let stderr = collect_drain(stderr_drain).await;
        debug!(%status, "Transfer process failed");
        Ok(TransferOutcome::failed(stderr))
    }
}

fn drain_to_string<R>(mut stream: R) -> JoinHandle<String>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut text = String::new();
        let _ = stream.read_to_string(&mut text).await;
        text
    })
}

async fn collect_drain(drain: Option<JoinHandle<String>>) -> String {
    match drain {
        Some(handle) => handle.await.unwrap_or_default().trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(direction: Direction, source: &str) -> TransferRequest {
        TransferRequest::new(direction, "emulator-5554", source, "/sdcard/Music")
    }

    #[test]
    fn test_direction_subcommands() {
        assert_eq!(Direction::Push.subcommand(), "push");
        assert_eq!(Direction::Pull.subcommand(), "pull");
    }

    #[test]
    fn test_direction_message_verbs() {
        assert_eq!(Direction::Push.action(), "copy");
        assert_eq!(Direction::Pull.action(), "download");
        assert_eq!(Direction::Push.past_participle(), "copied");
        assert_eq!(Direction::Pull.past_participle(), "downloaded");
    }

    #[test]
    fn test_item_name_is_final_component() {
        let req = request(Direction::Pull, "/sdcard/Music/Adhimathra");
        assert_eq!(req.item_name(), "Adhimathra");
    }

    #[test]
    fn test_item_name_ignores_trailing_slash() {
        let req = request(Direction::Pull, "/sdcard/Music/Adhimathra/");
        assert_eq!(req.item_name(), "Adhimathra");
    }

    #[test]
    fn test_item_name_of_bare_name() {
        let req = request(Direction::Push, "album");
        assert_eq!(req.item_name(), "album");
    }

    #[test]
    fn test_outcome_shapes() {
        let ok = TransferOutcome::succeeded();
        assert!(ok.success);
        assert!(ok.detail.is_none());

        let failed = TransferOutcome::failed("adb: no space left".to_string());
        assert!(!failed.success);
        assert_eq!(failed.detail.as_deref(), Some("adb: no space left"));
    }

    #[tokio::test]
    async fn test_run_reports_spawn_failure_for_missing_binary() {
        let runner = AdbRunner::new("adb-ferry-test-nonexistent-binary");
        let req = request(Direction::Push, "album");

        let result = run(&runner, &req, Duration::from_millis(10), || {}).await;
        assert!(matches!(result, Err(TransferError::Spawn(_))));
    }

    // `true` and `false` ignore the adb-shaped arguments, which makes them
    // convenient stand-ins for the child process exit paths
    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_success_on_zero_exit() {
        let runner = AdbRunner::new("true");
        let req = request(Direction::Push, "album");

        let outcome = run(&runner, &req, Duration::from_millis(10), || {})
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(outcome.detail.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_failure_on_nonzero_exit() {
        let runner = AdbRunner::new("false");
        let req = request(Direction::Pull, "/sdcard/Music/Adhimathra");

        let outcome = run(&runner, &req, Duration::from_millis(10), || {})
            .await
            .unwrap();

        assert!(!outcome.success);
        assert!(outcome.detail.is_some());
    }
}
