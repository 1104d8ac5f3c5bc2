//! Command-line argument parsing for adb_ferry
//!
//! This module defines the CLI structure using clap derive macros. Two
//! symmetric subcommands cover both transfer directions; defaults for the
//! remote side come from configuration and are resolved in the handlers.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::constants::transfer;

/// adb_ferry - copy files to and from an Android device over ADB
#[derive(Parser, Debug)]
#[command(
    name = "adb-ferry",
    version,
    about = "Copy files between this machine and an attached Android device",
    long_about = "A thin wrapper around ADB for copying files to and from an attached Android
device, with device resolution and a progress indicator. Requires the adb
binary from platform-tools on the search path."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a local file or directory to the device
    Push(PushArgs),

    /// Copy a file or directory from the device to this machine
    Pull(PullArgs),
}

/// Arguments for the push command
#[derive(Args, Debug, Clone)]
pub struct PushArgs {
    /// Local file or directory to copy
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination path on the device (defaults to the remote music directory)
    #[arg(value_name = "DEST")]
    pub destination: Option<String>,

    /// Target device ID
    #[arg(short = 's', long = "device", value_name = "ID")]
    pub device: Option<String>,
}

/// Arguments for the pull command
#[derive(Args, Debug, Clone)]
pub struct PullArgs {
    /// Path on the device to copy (defaults to the remote music directory)
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Local destination directory
    #[arg(value_name = "DEST", default_value = transfer::DEFAULT_LOCAL_DIR)]
    pub destination: PathBuf,

    /// Target device ID
    #[arg(short = 's', long = "device", value_name = "ID")]
    pub device: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

impl PushArgs {
    /// Check that the local source exists before any ADB invocation
    pub fn validate(&self) -> Result<(), String> {
        if !self.source.exists() {
            return Err(format!(
                "Source path does not exist: {}",
                self.source.display()
            ));
        }

        Ok(())
    }
}
