//! Defines data structures for the trends service.
//!
//! Includes structs for:
//! - The per-request query (`TrendQuery`).
//! - The normalized output (`TrendEntry`, `TrendResult`).
//! - Deserializing the trend provider's `trends/place` response (`PlaceTrends`, `ProviderTrend`).

use crate::error::{AppError, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

// --- Request model ---

/// A single trends request: where to look and how many entries at most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendQuery {
    pub location_id: String,
    pub requested_count: usize,
}

impl TrendQuery {
    /// Builds a query from raw caller-supplied parameters.
    ///
    /// `count` must parse as a non-negative integer; anything else is a caller error.
    pub fn parse(location_id: &str, count: &str) -> Result<Self> {
        let requested_count = count.trim().parse::<usize>().map_err(|e| {
            AppError::BadRequest(format!(
                "count must be a non-negative integer, got {:?}: {}",
                count, e
            ))
        })?;

        Ok(Self {
            location_id: location_id.to_string(),
            requested_count,
        })
    }
}

// --- Output model ---

/// One trend: its display name and the link to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub name: String,
    pub link: String,
}

impl TrendEntry {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Insertion-ordered mapping of trend name to trend link.
///
/// Serializes as a flat JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct TrendResult {
    entries: Vec<TrendEntry>,
    positions: HashMap<String, usize>,
}

impl TrendResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a trend. A name that is already present keeps its position and takes the new link.
    pub fn insert(&mut self, entry: TrendEntry) {
        match self.positions.get(&entry.name) {
            Some(&idx) => self.entries[idx].link = entry.link,
            None => {
                self.positions.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
            },
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&idx| self.entries[idx].link.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrendEntry> {
        self.entries.iter()
    }
}

// The name index is derived from `entries`, so equality only compares entries.
impl PartialEq for TrendResult {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TrendResult {}

impl FromIterator<TrendEntry> for TrendResult {
    fn from_iter<I: IntoIterator<Item = TrendEntry>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut result = TrendResult::with_capacity(iter.size_hint().0);
        for entry in iter {
            result.insert(entry);
        }
        result
    }
}

impl Serialize for TrendResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.link)?;
        }
        map.end()
    }
}

// --- Trend provider (`/1.1/trends/place.json`) response structs ---

/// A location reported alongside a trend block.
#[allow(dead_code)] // Fields might not all be used currently
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrendLocation {
    pub name: String,
    pub woeid: i64,
}

/// A single trend as ranked by the provider.
#[allow(dead_code)] // Fields might not all be used currently
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderTrend {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub promoted_content: Option<serde_json::Value>,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

impl From<ProviderTrend> for TrendEntry {
    fn from(trend: ProviderTrend) -> Self {
        TrendEntry::new(trend.name, trend.url)
    }
}

/// One element of the provider's top-level response array.
#[allow(dead_code)] // Fields might not all be used currently
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceTrends {
    pub trends: Vec<ProviderTrend>,
    #[serde(default)]
    pub as_of: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub locations: Vec<TrendLocation>,
}
