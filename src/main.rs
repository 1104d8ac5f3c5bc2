//! adb_ferry CLI application
//!
//! Command-line interface for copying files to and from an attached
//! Android device over ADB, with device resolution and progress display.

use std::process;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use adb_ferry::cli::{Cli, Commands, handle_pull, handle_push, report};
use adb_ferry::config::AppConfig;
use adb_ferry::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    // All error kinds render through the reporting boundary; only the
    // no-devices condition exits zero ("nothing to do" is not a failure)
    if let Err(e) = result {
        report::failure(&e);
        if !e.is_clean_stop() {
            process::exit(1);
        }
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(&cli);

    info!("adb_ferry v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults unless a config file is present)
    let config = AppConfig::load(cli.global.config.clone()).await?;
    let quiet = cli.global.quiet;

    // Execute the appropriate command
    match cli.command {
        Commands::Push(args) => {
            info!("Executing push command");
            handle_push(args, &config, quiet).await
        }
        Commands::Pull(args) => {
            info!("Executing pull command");
            handle_pull(args, &config, quiet).await
        }
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    // Create environment filter
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("adb_ferry={}", log_level).parse().unwrap());

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
