//! Command handlers for the adb_ferry CLI
//!
//! This module implements the push and pull handlers that coordinate
//! between CLI arguments and the ADB layer: enumerate devices, resolve a
//! target, estimate the transfer size, then supervise the child process
//! behind a progress bar.

use tracing::{info, warn};

use crate::adb::{self, AdbRunner, Direction, TransferRequest};
use crate::cli::progress::TransferBar;
use crate::cli::report;
use crate::config::AppConfig;
use crate::errors::{AdbError, AppError, Result, TransferError};

use super::args::{PullArgs, PushArgs};

/// Handle the push command: copy a local path to the device
pub async fn handle_push(args: PushArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    args.validate().map_err(AppError::generic)?;

    let runner = AdbRunner::new(&config.adb_path);
    let device = connect_device(&runner, args.device.as_deref()).await?;

    let total_bytes = adb::local_size(&args.source);
    let destination = args
        .destination
        .unwrap_or_else(|| config.remote_music_dir.clone());
    let request = TransferRequest::new(
        Direction::Push,
        device,
        args.source.to_string_lossy(),
        destination,
    );

    execute_transfer(&runner, &request, config, total_bytes, quiet).await
}

/// Handle the pull command: copy a remote path to this machine
pub async fn handle_pull(args: PullArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    let runner = AdbRunner::new(&config.adb_path);
    let device = connect_device(&runner, args.device.as_deref()).await?;

    let source = args
        .source
        .unwrap_or_else(|| config.remote_music_dir.clone());
    let total_bytes = estimate_remote_size(&runner, &device, &source).await?;
    let request = TransferRequest::new(
        Direction::Pull,
        device,
        source,
        args.destination.to_string_lossy(),
    );

    execute_transfer(&runner, &request, config, total_bytes, quiet).await
}

/// Enumerate attached devices and resolve the transfer target
///
/// An ADB command failure (e.g. no daemon running) is reported and treated
/// as an empty listing, so it surfaces as the no-devices condition rather
/// than a crash. A missing binary is fatal and propagates.
async fn connect_device(runner: &AdbRunner, explicit: Option<&str>) -> Result<String> {
    let devices = match adb::list_devices(runner).await {
        Ok(devices) => devices,
        Err(AdbError::CommandFailed { status, stderr }) => {
            report::adb_failure(status, &stderr);
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let device = adb::resolve_device(&devices, explicit)?;
    report::connected(&device);
    Ok(device)
}

/// Size a pull via remote `du`, degrading to zero on command failure
///
/// The estimate is advisory; a failed `du` (e.g. a path that does not
/// exist on the device) is reported and the transfer proceeds with an
/// unknown size, leaving ADB itself to reject a bad source path.
async fn estimate_remote_size(runner: &AdbRunner, device: &str, source: &str) -> Result<u64> {
    match adb::remote_size(runner, device, source).await {
        Ok(size) => Ok(size),
        Err(AdbError::CommandFailed { status, stderr }) => {
            report::adb_failure(status, &stderr);
            warn!(source, "Remote size estimate unavailable, using zero");
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the transfer subprocess behind a heartbeat progress bar
async fn execute_transfer(
    runner: &AdbRunner,
    request: &TransferRequest,
    config: &AppConfig,
    total_bytes: u64,
    quiet: bool,
) -> Result<()> {
    report::preparing(request.direction.action(), request.item_name(), total_bytes);

    let label = format!(
        "{} {}",
        request.direction.progress_label(),
        request.item_name()
    );
    let bar = TransferBar::new(total_bytes, &label, !quiet);

    let outcome = adb::transfer::run(runner, request, config.poll_interval, || bar.tick()).await;

    match outcome {
        Ok(outcome) if outcome.success => {
            bar.complete();
            info!(item = request.item_name(), "Transfer succeeded");
            report::success(&format!(
                "Successfully {}!",
                request.direction.past_participle()
            ));
            Ok(())
        }
        Ok(outcome) => {
            bar.abandon();
            Err(TransferError::Failed {
                action: request.direction.action().to_string(),
                detail: outcome.detail.unwrap_or_default(),
            }
            .into())
        }
        Err(e) => {
            bar.abandon();
            Err(e.into())
        }
    }
}
