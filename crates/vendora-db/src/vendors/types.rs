//! Row types for the `vendors` table.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;
use vendora_core::{Coordinate, PriceRange, VendorDisplay, VendorRecord};

use crate::DbError;

/// A row from the `vendors` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VendorRow {
    pub id: i64,
    pub public_id: Uuid,
    pub service_type: String,
    pub city: Option<String>,
    pub area: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub price_average: Option<Decimal>,
    pub rating: Option<Decimal>,
    pub review_count: i32,
    pub is_verified: bool,
    pub name: String,
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<VendorRow> for VendorRecord {
    type Error = DbError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let invalid = move |reason: String| DbError::InvalidRow { id, reason };

        let location = match (row.latitude, row.longitude) {
            (Some(lat), Some(lon)) => {
                let (lat, lon) = (to_f64(lat), to_f64(lon));
                let point = lat
                    .zip(lon)
                    .ok_or_else(|| invalid("coordinate out of f64 range".to_string()))?;
                Some(Coordinate::new(point.0, point.1).map_err(|e| invalid(e.to_string()))?)
            }
            (None, None) => None,
            _ => return Err(invalid("latitude and longitude must both be set".to_string())),
        };

        let review_count = u32::try_from(row.review_count)
            .map_err(|_| invalid(format!("negative review_count {}", row.review_count)))?;

        Ok(VendorRecord {
            id: row.id,
            public_id: row.public_id,
            service_type: row.service_type,
            city: row.city,
            area: row.area,
            location,
            price: PriceRange {
                min: row.price_min.and_then(to_f64),
                max: row.price_max.and_then(to_f64),
                average: row.price_average.and_then(to_f64),
            },
            rating: row.rating.and_then(to_f64),
            review_count,
            is_verified: row.is_verified,
            display: VendorDisplay {
                name: row.name,
                business_name: row.business_name,
                description: row.description,
                phone: row.phone,
                image_url: row.image_url,
            },
        })
    }
}

fn to_f64(d: Decimal) -> Option<f64> {
    d.to_f64()
}

/// Input record for upserting a vendor.
#[derive(Debug, Clone)]
pub struct NewVendor {
    pub id: i64,
    pub public_id: Uuid,
    pub service_type: String,
    pub city: Option<String>,
    pub area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub price_average: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: i32,
    pub is_verified: bool,
    pub name: String,
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

impl From<&VendorRecord> for NewVendor {
    fn from(v: &VendorRecord) -> Self {
        Self {
            id: v.id,
            public_id: v.public_id,
            service_type: v.service_type.clone(),
            city: v.city.clone(),
            area: v.area.clone(),
            latitude: v.location.map(Coordinate::lat),
            longitude: v.location.map(Coordinate::lon),
            price_min: v.price.min,
            price_max: v.price.max,
            price_average: v.price.average,
            rating: v.rating,
            review_count: i32::try_from(v.review_count).unwrap_or(i32::MAX),
            is_verified: v.is_verified,
            name: v.display.name.clone(),
            business_name: v.display.business_name.clone(),
            description: v.display.description.clone(),
            phone: v.display.phone.clone(),
            image_url: v.display.image_url.clone(),
        }
    }
}
