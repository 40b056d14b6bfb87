//! Handles process start-up concerns.
//!
//! Includes parsing command-line arguments (with environment fallbacks), building the
//! read-only `AppConfig` once at startup, and running the service.

mod commands;

pub use commands::*;
