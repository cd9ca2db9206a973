//! Coordinate value types shared by the engine and the catalog backends.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A validated WGS84 point in decimal degrees.
///
/// Construct through [`Coordinate::new`]; deserialization runs the same checks,
/// so a `Coordinate` in hand is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Validate and build a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when either component is not
    /// finite, latitude is outside `[-90, 90]`, or longitude is outside
    /// `[-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoreError> {
        let reason = if !lat.is_finite() || !lon.is_finite() {
            Some("components must be finite numbers")
        } else if !(-90.0..=90.0).contains(&lat) {
            Some("latitude must be within [-90, 90]")
        } else if !(-180.0..=180.0).contains(&lon) {
            Some("longitude must be within [-180, 180]")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CoreError::InvalidCoordinate {
                lat,
                lon,
                reason: reason.to_string(),
            }),
            None => Ok(Self { lat, lon }),
        }
    }

    #[must_use]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lon(self) -> f64 {
        self.lon
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoreError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lon)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.lat,
            lon: c.lon,
        }
    }
}

/// Rectangular lat/lon pre-filter. Inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lon..=self.max_lon).contains(&point.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_boundary_values() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_latitude() {
        let err = Coordinate::new(90.5, 10.0).unwrap_err();
        assert!(err.to_string().contains("latitude"), "got: {err}");
    }

    #[test]
    fn new_rejects_out_of_range_longitude() {
        let err = Coordinate::new(10.0, -181.0).unwrap_err();
        assert!(err.to_string().contains("longitude"), "got: {err}");
    }

    #[test]
    fn new_rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: Coordinate = serde_json::from_str(r#"{"lat":22.75,"lon":75.89}"#).unwrap();
        assert!((ok.lat() - 22.75).abs() < f64::EPSILON);

        let bad = serde_json::from_str::<Coordinate>(r#"{"lat":122.0,"lon":75.89}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn bounding_box_contains_is_inclusive() {
        let bbox = BoundingBox {
            min_lat: 10.0,
            max_lat: 11.0,
            min_lon: 20.0,
            max_lon: 21.0,
        };
        assert!(bbox.contains(Coordinate::new(10.0, 21.0).unwrap()));
        assert!(bbox.contains(Coordinate::new(10.5, 20.5).unwrap()));
        assert!(!bbox.contains(Coordinate::new(11.01, 20.5).unwrap()));
    }
}
