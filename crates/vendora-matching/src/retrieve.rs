//! Candidate retrieval. The only step that touches the catalog.

use std::time::Duration;

use vendora_core::{
    CatalogError, CatalogQuery, MatchingConfig, SearchRequest, VendorCatalog, VendorRecord,
};

use crate::error::MatchError;
use crate::geo::bounding_box;
use crate::normalize::ServiceQuery;

/// Build the catalog pre-filter for a validated request.
///
/// With a coordinate the box is sized for the widened adjacent-city radius,
/// and the requester city plus its neighbours are included so vendors without
/// coordinates can still land in the city tiers. Area filtering only applies
/// when there is neither a coordinate nor a city.
///
/// # Errors
///
/// Returns [`MatchError::InvalidRequest`] if the box cannot be built from the
/// request radius.
pub fn build_catalog_query(
    service: &ServiceQuery,
    request: &SearchRequest,
    config: &MatchingConfig,
) -> Result<CatalogQuery, MatchError> {
    let bbox = request
        .location
        .map(|center| {
            bounding_box(
                center,
                request.radius_km * config.thresholds.adjacent_radius_multiplier,
            )
        })
        .transpose()?;

    let city = request
        .city
        .as_deref()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty());

    let mut cities = Vec::new();
    if let Some(city) = city.as_deref() {
        cities.push(city.to_string());
        cities.extend(config.adjacency.neighbors_of(city));
    }

    let area = if bbox.is_none() && city.is_none() {
        request
            .area
            .as_deref()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
    } else {
        None
    };

    Ok(CatalogQuery {
        bbox,
        cities,
        area,
        service_hint: service.catalog_hint(),
    })
}

/// Fetch and re-check candidates, paired with their service match score.
///
/// The catalog's filtering is treated as coarse: every returned record is
/// tested again against `query` and the service match.
///
/// # Errors
///
/// Returns [`MatchError::RetrievalFailure`] when the catalog errors or does not
/// answer within `timeout`.
pub async fn retrieve_candidates<C: VendorCatalog>(
    catalog: &C,
    service: &ServiceQuery,
    query: &CatalogQuery,
    timeout: Duration,
) -> Result<Vec<(VendorRecord, f64)>, MatchError> {
    let fetched = match tokio::time::timeout(timeout, catalog.query_vendors(query)).await {
        Ok(Ok(vendors)) => vendors,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "vendor catalog query failed");
            return Err(e.into());
        }
        Err(_) => {
            tracing::warn!(timeout = ?timeout, "vendor catalog query timed out");
            return Err(CatalogError::Timeout(timeout).into());
        }
    };

    let fetched_count = fetched.len();
    let candidates: Vec<(VendorRecord, f64)> = fetched
        .into_iter()
        .filter(|vendor| query.admits(vendor))
        .filter_map(|vendor| {
            let score =
                service.match_score(&vendor.service_type, vendor.display.description.as_deref())?;
            Some((vendor, score))
        })
        .collect();

    tracing::debug!(
        fetched = fetched_count,
        candidates = candidates.len(),
        "retrieved vendor candidates"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendora_core::{AdjacencyList, Coordinate, ServiceTag};

    fn config() -> MatchingConfig {
        MatchingConfig {
            adjacency: AdjacencyList::from_pairs([("Indore", vec!["Dewas", "Ujjain"])]),
            ..MatchingConfig::default()
        }
    }

    #[test]
    fn coordinate_request_gets_widened_box_and_city_union() {
        let request = SearchRequest {
            location: Some(Coordinate::new(22.75, 75.89).unwrap()),
            city: Some(" Indore ".to_string()),
            area: Some("Vijay Nagar".to_string()),
            radius_km: 10.0,
            ..SearchRequest::default()
        };
        let query =
            build_catalog_query(&ServiceQuery::Tag(ServiceTag::Photograph), &request, &config())
                .unwrap();

        let bbox = query.bbox.unwrap();
        let lat_span_km = (bbox.max_lat - bbox.min_lat) * 111.0 / 2.0;
        assert!((lat_span_km - 30.0).abs() < 1e-6, "got {lat_span_km}");
        assert_eq!(query.cities, vec!["indore", "dewas", "ujjain"]);
        assert_eq!(query.area, None);
        assert_eq!(query.service_hint.as_deref(), Some("photograph"));
    }

    #[test]
    fn city_only_request_has_no_box() {
        let request = SearchRequest {
            city: Some("Dewas".to_string()),
            ..SearchRequest::default()
        };
        let query = build_catalog_query(&ServiceQuery::Any, &request, &config()).unwrap();
        assert!(query.bbox.is_none());
        assert_eq!(query.cities, vec!["dewas", "indore"]);
        assert!(query.service_hint.is_none());
    }

    #[test]
    fn area_only_request_filters_by_area() {
        let request = SearchRequest {
            area: Some("Vijay Nagar".to_string()),
            ..SearchRequest::default()
        };
        let query = build_catalog_query(&ServiceQuery::Any, &request, &config()).unwrap();
        assert_eq!(query.area.as_deref(), Some("vijay nagar"));
        assert!(query.cities.is_empty());
    }

    #[test]
    fn no_location_means_no_location_filter() {
        let query = build_catalog_query(
            &ServiceQuery::Text("balloon artist".to_string()),
            &SearchRequest::default(),
            &config(),
        )
        .unwrap();
        assert!(!query.has_location_filter());
        assert_eq!(query.service_hint.as_deref(), Some("balloon artist"));
    }
}
