//! Search entry point.

use std::sync::Arc;
use std::time::Duration;

use vendora_core::{MatchingConfig, SearchRequest, VendorCatalog, VendorRecord};

use crate::assemble::assemble;
use crate::budget::budget_fit;
use crate::error::MatchError;
use crate::geo::distance_km;
use crate::normalize::{AliasTable, QueryNormalizer};
use crate::retrieve::{build_catalog_query, retrieve_candidates};
use crate::tier::classify;
use crate::types::{Candidate, SearchResponse};

/// Default time allowed for one catalog read.
pub const DEFAULT_CATALOG_TIMEOUT: Duration = Duration::from_secs(3);

/// Stateless matching engine over a read-only catalog.
///
/// Cheap to clone; configuration is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct MatchEngine<C> {
    catalog: C,
    config: Arc<MatchingConfig>,
    normalizer: Arc<QueryNormalizer>,
    catalog_timeout: Duration,
}

impl<C: VendorCatalog> MatchEngine<C> {
    #[must_use]
    pub fn new(catalog: C, config: Arc<MatchingConfig>) -> Self {
        let normalizer = Arc::new(QueryNormalizer::new(AliasTable::new(&config.aliases)));
        Self {
            catalog,
            config,
            normalizer,
            catalog_timeout: DEFAULT_CATALOG_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_catalog_timeout(mut self, timeout: Duration) -> Self {
        self.catalog_timeout = timeout;
        self
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Run one search.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidRequest`] for a malformed request (checked
    /// before the catalog is touched) and [`MatchError::RetrievalFailure`] when
    /// the catalog fails or times out.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse, MatchError> {
        self.validate(&request)?;

        let service = self
            .normalizer
            .normalize(request.query.as_deref(), request.category.as_deref());
        let query = build_catalog_query(&service, &request, &self.config)?;
        tracing::debug!(?service, ?query, "searching vendor catalog");

        let fetched =
            retrieve_candidates(&self.catalog, &service, &query, self.catalog_timeout).await?;

        let candidates = self.score(fetched, &request);
        let response = assemble(
            candidates,
            &request,
            self.config.thresholds.adjacent_radius_multiplier,
        );

        tracing::info!(
            total = response.total_count,
            page = response.page,
            tiers = response.tiers.len(),
            "vendor search complete"
        );
        Ok(response)
    }

    /// Reject requests the engine will not silently repair.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidRequest`] describing the first problem found.
    pub fn validate(&self, request: &SearchRequest) -> Result<(), MatchError> {
        let budget = request.budget;
        if budget.min.is_nan() || budget.max.is_nan() || budget.min.is_infinite() {
            return Err(MatchError::invalid("budget bounds must be numbers"));
        }
        if budget.min < 0.0 || budget.max < 0.0 {
            return Err(MatchError::invalid("budget bounds must not be negative"));
        }
        if budget.min > budget.max {
            return Err(MatchError::invalid(format!(
                "budget_min ({}) is greater than budget_max ({})",
                budget.min, budget.max
            )));
        }
        if !request.radius_km.is_finite() || request.radius_km <= 0.0 {
            return Err(MatchError::invalid(format!(
                "radius_km must be a positive number, got {}",
                request.radius_km
            )));
        }
        if request.page < 1 {
            return Err(MatchError::invalid("page must be at least 1"));
        }
        let max_page_size = self.config.thresholds.max_page_size;
        if request.page_size < 1 || request.page_size > max_page_size {
            return Err(MatchError::invalid(format!(
                "page_size must be between 1 and {max_page_size}, got {}",
                request.page_size
            )));
        }
        Ok(())
    }

    fn score(&self, fetched: Vec<(VendorRecord, f64)>, request: &SearchRequest) -> Vec<Candidate> {
        let thresholds = &self.config.thresholds;
        fetched
            .into_iter()
            .map(|(vendor, match_score)| {
                let distance = request
                    .location
                    .zip(vendor.location)
                    .map(|(from, to)| distance_km(from, to));
                let tier = classify(
                    &vendor,
                    distance,
                    request,
                    thresholds,
                    &self.config.adjacency,
                );
                let budget_fit =
                    budget_fit(vendor.price.reference_price(), &request.budget, thresholds);
                Candidate {
                    vendor,
                    distance_km: distance,
                    tier,
                    budget_fit,
                    match_score,
                }
            })
            .collect()
    }
}
