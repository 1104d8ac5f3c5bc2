//! Transfer size estimation
//!
//! Two variants, selected by transfer direction: a local filesystem walk
//! for pushes, and a remote `du` invocation over the ADB shell for pulls.
//! The estimate sizes the progress bar's upper bound only; it is never
//! used to detect truncated transfers, so both variants degrade to zero
//! rather than fail.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::constants::{adb, transfer};
use crate::errors::AdbResult;

use super::runner::AdbRunner;

/// Byte size of a local file or directory
///
/// A regular file contributes its length; a directory contributes the
/// recursive sum of contained regular files. Entries whose metadata is
/// unreadable are skipped.
pub fn local_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(meta) if meta.is_dir() => dir_size(path),
        _ => 0,
    }
}

fn dir_size(dir: &Path) -> u64 {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    entries
        .flatten()
        .map(|entry| match entry.metadata() {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(meta) if meta.is_dir() => dir_size(&entry.path()),
            _ => 0,
        })
        .sum()
}

/// Parse `du -sb` output into a byte count
///
/// The first whitespace-delimited token of the first line is the size.
/// Empty or malformed output yields zero, never an error.
pub fn parse_du_output(output: &str) -> u64 {
    output
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

/// Byte size of a remote file or directory, via `du -sb` on the device
///
/// # Errors
///
/// Propagates invocation errors from the runner; parse failures are not
/// errors and yield zero.
pub async fn remote_size(runner: &AdbRunner, device: &str, path: &str) -> AdbResult<u64> {
    let shell_command = format!("{} \"{}\"", transfer::REMOTE_DU_COMMAND, path);
    let output = runner
        .output([
            adb::DEVICE_FLAG,
            device,
            adb::SHELL_SUBCOMMAND,
            shell_command.as_str(),
        ])
        .await?;

    let size = parse_du_output(&output);
    debug!(device, path, size, "Estimated remote size");
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_local_size_of_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.mp3");
        File::create(&path).unwrap().write_all(&[0u8; 42]).unwrap();

        assert_eq!(local_size(&path), 42);
    }

    #[test]
    fn test_local_size_of_directory_sums_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a"))
            .unwrap()
            .write_all(&[0u8; 10])
            .unwrap();
        File::create(dir.path().join("b"))
            .unwrap()
            .write_all(&[0u8; 20])
            .unwrap();

        assert_eq!(local_size(dir.path()), 30);
    }

    #[test]
    fn test_local_size_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("album");
        fs::create_dir(&sub).unwrap();
        File::create(dir.path().join("a"))
            .unwrap()
            .write_all(&[0u8; 5])
            .unwrap();
        File::create(sub.join("b"))
            .unwrap()
            .write_all(&[0u8; 7])
            .unwrap();

        assert_eq!(local_size(dir.path()), 12);
    }

    #[test]
    fn test_local_size_of_missing_path_is_zero() {
        assert_eq!(local_size(Path::new("/nonexistent/path")), 0);
    }

    #[test]
    fn test_du_parse_takes_first_token() {
        assert_eq!(parse_du_output("12345\t/sdcard/Music/Adhimathra"), 12345);
        assert_eq!(parse_du_output("12345 /sdcard/Music/Adhimathra"), 12345);
    }

    #[test]
    fn test_du_parse_uses_first_line_only() {
        assert_eq!(parse_du_output("100 /sdcard/Music\n200 /sdcard/DCIM"), 100);
    }

    #[test]
    fn test_du_parse_degrades_to_zero() {
        assert_eq!(parse_du_output(""), 0);
        assert_eq!(parse_du_output("   \n"), 0);
        assert_eq!(parse_du_output("du: permission denied"), 0);
        assert_eq!(parse_du_output("-1 /sdcard"), 0);
    }
}
