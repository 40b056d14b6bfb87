//! Trend retrieval: credential resolution and bounded aggregation.
//!
//! Includes:
//! - `credentials`: Reads provider credentials from the startup configuration.
//! - `aggregator`: Live fetch with fallback, or mock data when credentials are incomplete.

mod aggregator;
mod credentials;

pub use aggregator::*;
pub use credentials::*;
