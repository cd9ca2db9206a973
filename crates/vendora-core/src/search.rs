//! Search request model.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::CoreError;

pub const DEFAULT_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Requested ordering within each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Relevance,
    Distance,
    BudgetAsc,
    BudgetDesc,
    Rating,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Relevance => write!(f, "relevance"),
            SortMode::Distance => write!(f, "distance"),
            SortMode::BudgetAsc => write!(f, "budget-asc"),
            SortMode::BudgetDesc => write!(f, "budget-desc"),
            SortMode::Rating => write!(f, "rating"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "relevance" => Ok(SortMode::Relevance),
            "distance" => Ok(SortMode::Distance),
            "budget-asc" => Ok(SortMode::BudgetAsc),
            "budget-desc" => Ok(SortMode::BudgetDesc),
            "rating" => Ok(SortMode::Rating),
            _ => Err(CoreError::InvalidSortMode(s.to_string())),
        }
    }
}

/// Requester budget. `max` is `f64::INFINITY` when the requester gives no ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

impl BudgetRange {
    /// Build a range from optional request bounds, applying `[0, ∞)` defaults.
    ///
    /// No validation happens here; the engine rejects inverted or negative
    /// ranges with a request error.
    #[must_use]
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(f64::INFINITY),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Free-text search input.
    pub query: Option<String>,
    /// Category picked from a UI list; takes precedence over `query` when it
    /// resolves to a known tag.
    pub category: Option<String>,
    pub location: Option<Coordinate>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub budget: BudgetRange,
    pub radius_km: f64,
    pub sort: SortMode,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            location: None,
            city: None,
            area: None,
            budget: BudgetRange::default(),
            radius_km: DEFAULT_RADIUS_KM,
            sort: SortMode::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
