//! Read-only vendor catalog records.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::Coordinate;
use crate::ConfigError;

/// Vendor price data as listed. Any of the three may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub average: Option<f64>,
}

impl PriceRange {
    /// The single price used for budget comparison and price sorting.
    ///
    /// `average` wins when present; otherwise the midpoint of `[min, max]`, or
    /// whichever bound exists. `None` means the vendor lists no price.
    #[must_use]
    pub fn reference_price(&self) -> Option<f64> {
        if let Some(avg) = self.average {
            return Some(avg);
        }
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => Some((lo + hi) / 2.0),
            (Some(p), None) | (None, Some(p)) => Some(p),
            (None, None) => None,
        }
    }
}

/// Display-only fields passed through to callers untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorDisplay {
    pub name: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub id: i64,
    #[serde(default = "Uuid::new_v4")]
    pub public_id: Uuid,
    /// Canonical service-type tag, e.g. `wedding_photography`.
    pub service_type: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub price: PriceRange,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(flatten)]
    pub display: VendorDisplay,
}

impl VendorRecord {
    /// Rating with the missing-rating default of 0 applied.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
struct VendorCatalogFile {
    vendors: Vec<VendorRecord>,
}

/// Load a vendor snapshot from a YAML file with a top-level `vendors:` list.
///
/// # Errors
///
/// Returns [`ConfigError::FileIo`] if the file cannot be read,
/// [`ConfigError::YamlParse`] if it is malformed (including out-of-range
/// coordinates), or [`ConfigError::Validation`] on duplicate vendor ids.
pub fn load_vendor_catalog(path: &Path) -> Result<Vec<VendorRecord>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_vendor_catalog(&content)
}

pub(crate) fn parse_vendor_catalog(content: &str) -> Result<Vec<VendorRecord>, ConfigError> {
    let file: VendorCatalogFile = serde_yaml::from_str(content)?;

    let mut seen = std::collections::HashSet::new();
    for vendor in &file.vendors {
        if !seen.insert(vendor.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor id: {}",
                vendor.id
            )));
        }
        if vendor.service_type.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "vendor {} has an empty service_type",
                vendor.id
            )));
        }
    }

    Ok(file.vendors)
}
