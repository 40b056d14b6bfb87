//! Provides a mock data provider for generating placeholder trends.
//!
//! Used whenever the live provider is not configured (mock mode). Unlike the
//! live provider, the output is fully deterministic: the same count always yields
//! the same entries.

use crate::models::{TrendEntry, TrendResult};
use tracing::debug;

/// Base URL that synthetic trend names are appended to.
pub const MOCK_LINK_BASE: &str = "https://twitter.com/";

/// Generates synthetic `MockTrend{i}` entries.
pub struct MockTrendProvider {
    link_base: String,
}

impl MockTrendProvider {
    /// Creates a new `MockTrendProvider`.
    pub fn new() -> Self {
        debug!("Creating MockTrendProvider");
        Self {
            link_base: MOCK_LINK_BASE.to_string(),
        }
    }

    /// Generates exactly `count` entries named `MockTrend1..=MockTrend{count}`,
    /// each linking to the base URL followed by its own name.
    pub fn trends(&self, count: usize) -> TrendResult {
        debug!("Generating {} mock trends.", count);

        (1..=count)
            .map(|i| {
                let name = format!("MockTrend{}", i);
                let link = format!("{}{}", self.link_base, name);
                TrendEntry::new(name, link)
            })
            .collect()
    }
}

impl Default for MockTrendProvider {
    fn default() -> Self {
        Self::new()
    }
}
