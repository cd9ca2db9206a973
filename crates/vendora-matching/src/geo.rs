//! Great-circle distance and bounding-box helpers.

use vendora_core::{BoundingBox, Coordinate};

use crate::error::MatchError;

const EARTH_RADIUS_KM: f64 = 6371.0;
const KM_PER_LAT_DEGREE: f64 = 111.0;

const FULL_LON: (f64, f64) = (-180.0, 180.0);

/// Haversine distance in kilometres, rounded to two decimals.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().min(1.0).asin();

    round2(EARTH_RADIUS_KM * c)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Rectangular pre-filter around `center`.
///
/// Uses 1° latitude ≈ 111 km and scales the longitude span by the cosine of
/// the box edge farthest from the equator, so the box never under-covers the
/// circle. Boxes touching a pole or crossing the antimeridian span every
/// longitude.
///
/// # Errors
///
/// Returns [`MatchError::InvalidRequest`] when `radius_km` is not a positive
/// finite number.
pub fn bounding_box(center: Coordinate, radius_km: f64) -> Result<BoundingBox, MatchError> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(MatchError::invalid(format!(
            "radius must be a positive number of kilometres, got {radius_km}"
        )));
    }

    let dlat = radius_km / KM_PER_LAT_DEGREE;
    let min_lat = (center.lat() - dlat).max(-90.0);
    let max_lat = (center.lat() + dlat).min(90.0);

    let edge_lat = min_lat.abs().max(max_lat.abs());
    let cos_lat = edge_lat.to_radians().cos();

    let (min_lon, max_lon) = if edge_lat >= 90.0 || cos_lat <= f64::EPSILON {
        FULL_LON
    } else {
        let dlon = radius_km / (KM_PER_LAT_DEGREE * cos_lat);
        let lo = center.lon() - dlon;
        let hi = center.lon() + dlon;
        if dlon >= 180.0 || lo < -180.0 || hi > 180.0 {
            FULL_LON
        } else {
            (lo, hi)
        }
    };

    Ok(BoundingBox {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
    })
}

/// Validate raw request coordinates.
///
/// # Errors
///
/// Returns [`MatchError::InvalidRequest`] for non-finite or out-of-range values.
pub fn validate_coordinate(lat: f64, lon: f64) -> Result<Coordinate, MatchError> {
    Coordinate::new(lat, lon).map_err(|e| MatchError::invalid(e.to_string()))
}
