//! Defines the data structures and models used throughout the application.
//!
//! This includes the per-request query, the normalized trend mapping returned to
//! callers, and the structures deserialized from the live trend provider.

mod trends;

pub use trends::*;
