//! Structured logging setup for the service.
//!
//! # Telemetry invariants
//!
//! - Uploaded payload text must never appear in any span attribute or log
//!   field; only lengths and derived metadata are logged.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`).

pub mod init;

pub use init::init_telemetry;
