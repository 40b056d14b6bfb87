//! Provides clients and utilities for interacting with external APIs.
//!
//! Includes:
//! - `twitter`: OAuth-signed client for the live trend provider.
//! - `mock`: Deterministic placeholder trends for mock mode.
//! - `github`: Hosting-provider client and repository search builder.

mod github;
mod mock;
mod twitter;

#[cfg(test)]
mod twitter_test;

pub use github::*;
pub use mock::*;
pub use twitter::*;

use crate::models::ProviderTrend;
use async_trait::async_trait;

/// A source of ranked trends for a location.
#[async_trait]
pub trait TrendProvider: Send + Sync {
    /// Returns the provider's trend list for `location_id`, in the provider's own ranking.
    async fn place_trends(&self, location_id: &str) -> Result<Vec<ProviderTrend>, ProviderError>;
}
