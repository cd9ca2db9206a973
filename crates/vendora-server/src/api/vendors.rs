use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use vendora_core::{BudgetRange, SearchRequest, SortMode};
use vendora_matching::{geo::validate_coordinate, MatchError, SearchResponse};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub radius_km: Option<f64>,
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

pub(super) async fn search_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let Query(params) =
        params.map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.body_text()))?;

    let thresholds = state.engine.config().thresholds;
    let request = build_search_request(
        params,
        thresholds.default_radius_km,
        thresholds.default_page_size,
    )
    .map_err(|message| ApiError::new(req_id.0.clone(), "validation_error", message))?;

    let response = state
        .engine
        .search(request)
        .await
        .map_err(|e| map_match_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: response,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Turn raw query-string values into a [`SearchRequest`], filling defaults.
///
/// Range checks on budget, radius and paging are left to the engine.
pub(super) fn build_search_request(
    params: SearchParams,
    default_radius_km: f64,
    default_page_size: u32,
) -> Result<SearchRequest, String> {
    let location = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => {
            Some(validate_coordinate(lat, lon).map_err(|e| e.to_string())?)
        }
        (None, None) => None,
        _ => return Err("lat and lon must be provided together".to_string()),
    };

    let sort = params
        .sort
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<SortMode>)
        .transpose()
        .map_err(|e| e.to_string())?
        .unwrap_or_default();

    Ok(SearchRequest {
        query: non_blank(params.q),
        category: non_blank(params.category),
        location,
        city: non_blank(params.city),
        area: non_blank(params.area),
        budget: BudgetRange::from_bounds(params.budget_min, params.budget_max),
        radius_km: params.radius_km.unwrap_or(default_radius_km),
        sort,
        page: params.page.unwrap_or(1),
        page_size: params.page_size.unwrap_or(default_page_size),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn map_match_error(request_id: String, error: &MatchError) -> ApiError {
    match error {
        MatchError::InvalidRequest(reason) => {
            ApiError::new(request_id, error.code(), reason.clone())
        }
        MatchError::RetrievalFailure(e) => {
            tracing::error!(error = %e, "vendor search failed");
            ApiError::new(request_id, error.code(), "vendor catalog is unavailable")
        }
    }
}
