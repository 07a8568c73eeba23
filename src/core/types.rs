//! Domain types shared across the client, extraction engine, and MCP tools.

use serde::{Deserialize, Serialize};

/// One restaurant row scraped from a Tabelog listing page.
///
/// All string fields default to `"N/A"` when the underlying element is
/// missing or empty. `rank` is the 1-based position within the returned
/// (truncated) result set, not the site-wide rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub rating: String,
    pub url: String,
    pub cuisine: String,
    pub price: String,
    pub location: String,
    pub rank: u32,
}

/// Result of a `tabelog_top` scrape.
///
/// Invariant: `count == restaurants.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResult {
    pub region: String,
    pub count: usize,
    pub restaurants: Vec<Restaurant>,
}

impl ListingResult {
    pub fn new(region: String, restaurants: Vec<Restaurant>) -> Self {
        Self {
            region,
            count: restaurants.len(),
            restaurants,
        }
    }
}

/// Result of a `tabelog_snapshot` call.
///
/// Snapshot failures are folded into `success: false` rather than raised,
/// so callers always receive this structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResult {
    pub success: bool,
    pub message: String,
    pub url: String,
}

/// Dinner price filter in JPY. Both bounds optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl PriceRange {
    /// Whether a parsed dinner price falls inside the range.
    pub fn contains(&self, yen: u64) -> bool {
        if let Some(min) = self.min {
            if yen < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if yen > max {
                return false;
            }
        }
        true
    }
}

/// Arguments for the `tabelog_top` tool. All fields optional; defaults are
/// filled by the handler after structural validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopArgs {
    pub region: Option<String>,
    pub limit: Option<u32>,
    #[serde(rename = "priceRange")]
    pub price_range: Option<PriceRange>,
}

/// Arguments for the `tabelog_snapshot` tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotArgs {
    pub region: Option<String>,
}
