//! Location tier classification.
//!
//! One pass per candidate; the first rule that matches wins, so a candidate
//! is never in two tiers.

use vendora_core::{AdjacencyList, SearchRequest, Thresholds, VendorRecord};

use crate::types::Tier;

/// Assign `vendor` to exactly one tier.
///
/// `distance_km` is the requester-to-vendor distance when both sides have a
/// coordinate.
#[must_use]
pub fn classify(
    vendor: &VendorRecord,
    distance_km: Option<f64>,
    request: &SearchRequest,
    thresholds: &Thresholds,
    adjacency: &AdjacencyList,
) -> Tier {
    if request.location.is_none() && blank(request.city.as_deref()) {
        return Tier::All;
    }

    let radius = request.radius_km;

    let area_match = same_place(request.area.as_deref(), vendor.area.as_deref());
    if area_match && distance_km.is_none_or(|d| d <= radius / 2.0) {
        return Tier::ExactArea;
    }

    if distance_km.is_some_and(|d| d <= radius) {
        return Tier::Nearby;
    }

    if same_place(request.city.as_deref(), vendor.city.as_deref()) {
        return Tier::SameCity;
    }

    let within_widened = distance_km.is_some_and(|d| d <= radius * thresholds.adjacent_radius_multiplier);
    let listed_adjacent = match (request.city.as_deref(), vendor.city.as_deref()) {
        (Some(mine), Some(theirs)) => adjacency.is_adjacent(mine, theirs),
        _ => false,
    };
    if within_widened || listed_adjacent {
        return Tier::AdjacentCity;
    }

    Tier::All
}

fn blank(s: Option<&str>) -> bool {
    s.is_none_or(|v| v.trim().is_empty())
}

fn same_place(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            let (a, b) = (a.trim(), b.trim());
            !a.is_empty() && a.to_lowercase() == b.to_lowercase()
        }
        _ => false,
    }
}
