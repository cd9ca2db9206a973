//! Read interface to the vendor catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::geo::BoundingBox;
use crate::text::normalize_text;
use crate::vendor::VendorRecord;

/// Location and service pre-filter passed to a catalog backend.
///
/// Location criteria are a union: a vendor qualifies if it lies inside `bbox`,
/// or its city is in `cities`, or its area equals `area` (string comparisons
/// case-insensitive). With no location criteria at all, every vendor
/// qualifies. `service_hint` is a containment filter against the vendor's
/// service type (either direction) or description, both folded with
/// [`normalize_text`]. It admits every vendor the engine's service matcher
/// would score, and the engine re-checks each one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub bbox: Option<BoundingBox>,
    /// Lowercased city names.
    pub cities: Vec<String>,
    /// Lowercased area name.
    pub area: Option<String>,
    /// Service token or fallback text, already in [`normalize_text`] form.
    pub service_hint: Option<String>,
}

impl CatalogQuery {
    #[must_use]
    pub fn has_location_filter(&self) -> bool {
        self.bbox.is_some() || !self.cities.is_empty() || self.area.is_some()
    }

    /// Whether `vendor` satisfies this query's location and service criteria.
    ///
    /// Backends that scan in memory use this directly; SQL backends mirror it.
    #[must_use]
    pub fn admits(&self, vendor: &VendorRecord) -> bool {
        self.admits_location(vendor) && self.admits_service(vendor)
    }

    fn admits_location(&self, vendor: &VendorRecord) -> bool {
        if !self.has_location_filter() {
            return true;
        }

        let in_box = match (self.bbox, vendor.location) {
            (Some(bbox), Some(point)) => bbox.contains(point),
            _ => false,
        };
        let in_city = vendor
            .city
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .is_some_and(|c| self.cities.contains(&c));
        let in_area = match (&self.area, vendor.area.as_deref()) {
            (Some(wanted), Some(area)) => area.trim().to_lowercase() == *wanted,
            _ => false,
        };

        in_box || in_city || in_area
    }

    fn admits_service(&self, vendor: &VendorRecord) -> bool {
        let Some(hint) = self.service_hint.as_deref() else {
            return true;
        };
        let tag = normalize_text(&vendor.service_type);
        let description = vendor
            .display
            .description
            .as_deref()
            .map(normalize_text)
            .unwrap_or_default();
        tag.contains(hint)
            || (!tag.is_empty() && hint.contains(tag.as_str()))
            || description.contains(hint)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("vendor catalog unavailable: {0}")]
    Unavailable(String),

    #[error("vendor catalog timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("vendor catalog query failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Read-only access to vendors.
///
/// Implementations must be safe for concurrent reads; the engine calls this
/// once per search and never writes.
#[async_trait]
pub trait VendorCatalog: Send + Sync {
    /// Fetch vendors admitted by `query`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the backend cannot be reached or the read
    /// fails. An empty `Ok` means no vendor qualified.
    async fn query_vendors(&self, query: &CatalogQuery) -> Result<Vec<VendorRecord>, CatalogError>;
}
