//! ADB invocation and supervision
//!
//! This module owns every interaction with the Android Debug Bridge binary:
//! running it for its captured output, parsing its device listing, sizing
//! transfers, and supervising push/pull child processes. The textual format
//! of ADB's output is a contract this crate depends on but does not own.

pub mod devices;
pub mod runner;
pub mod size;
pub mod transfer;

pub use devices::{list_devices, parse_devices, resolve_device};
pub use runner::AdbRunner;
pub use size::{local_size, parse_du_output, remote_size};
pub use transfer::{Direction, TransferOutcome, TransferRequest};
