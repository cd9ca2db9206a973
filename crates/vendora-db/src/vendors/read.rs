//! Read operations for the `vendors` table.

use sqlx::PgPool;
use vendora_core::{CatalogQuery, VendorRecord};

use super::types::VendorRow;
use crate::DbError;

/// Fetch active vendors admitted by `query`.
///
/// Location criteria are a union: inside the bounding box, or a listed city,
/// or the requested area. With no location criteria every active vendor
/// qualifies. The service hint is a substring match against the service type
/// in either direction, or against the description, both folded by the
/// `vendora_normalize_text` SQL function. Mirrors [`CatalogQuery::admits`].
///
/// Results are ordered by `id`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or [`DbError::InvalidRow`] if
/// a stored row cannot be represented as a [`VendorRecord`].
pub async fn query_vendors(
    pool: &PgPool,
    query: &CatalogQuery,
) -> Result<Vec<VendorRecord>, DbError> {
    let bbox = query.bbox;
    let rows = sqlx::query_as::<_, VendorRow>(
        "SELECT v.id, v.public_id, v.service_type, v.city, v.area, \
                v.latitude, v.longitude, v.price_min, v.price_max, v.price_average, \
                v.rating, v.review_count, v.is_verified, \
                v.name, v.business_name, v.description, v.phone, v.image_url, \
                v.updated_at \
         FROM vendors v \
         CROSS JOIN LATERAL ( \
                SELECT vendora_normalize_text(v.service_type) AS service_norm, \
                       vendora_normalize_text(v.description) AS description_norm \
         ) n \
         WHERE v.is_active = TRUE \
           AND ( \
                $1::BOOLEAN = FALSE \
                OR ($2::FLOAT8 IS NOT NULL \
                    AND v.latitude BETWEEN $2 AND $3::FLOAT8 \
                    AND v.longitude BETWEEN $4::FLOAT8 AND $5::FLOAT8) \
                OR lower(trim(v.city)) = ANY($6::TEXT[]) \
                OR ($7::TEXT IS NOT NULL AND lower(trim(v.area)) = $7) \
           ) \
           AND ( \
                $8::TEXT IS NULL \
                OR strpos(n.service_norm, $8) > 0 \
                OR (n.service_norm <> '' AND strpos($8, n.service_norm) > 0) \
                OR strpos(coalesce(n.description_norm, ''), $8) > 0 \
           ) \
         ORDER BY v.id",
    )
    .bind(query.has_location_filter())
    .bind(bbox.map(|b| b.min_lat))
    .bind(bbox.map(|b| b.max_lat))
    .bind(bbox.map(|b| b.min_lon))
    .bind(bbox.map(|b| b.max_lon))
    .bind(&query.cities)
    .bind(query.area.as_deref())
    .bind(query.service_hint.as_deref())
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(VendorRecord::try_from).collect()
}

/// Number of active vendors.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn count_active_vendors(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vendors WHERE is_active = TRUE")
        .fetch_one(pool)
        .await
}
