//! Write operations for the `vendors` table.

use sqlx::PgPool;

use super::types::NewVendor;
use crate::DbError;

/// Insert or update vendors keyed by `id`.
///
/// Returns `(inserted, updated)`. The batch is upserted in one
/// `INSERT … SELECT * FROM UNNEST(…) ON CONFLICT` statement inside a
/// transaction that also moves the identity sequence past the highest id, so
/// later inserts without an explicit id do not collide. Existing rows keep
/// their `public_id` and are reactivated.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn upsert_vendors(pool: &PgPool, vendors: &[NewVendor]) -> Result<(u64, u64), DbError> {
    if vendors.is_empty() {
        return Ok((0, 0));
    }

    let n = vendors.len();
    let mut ids: Vec<i64> = Vec::with_capacity(n);
    let mut public_ids: Vec<uuid::Uuid> = Vec::with_capacity(n);
    let mut service_types: Vec<String> = Vec::with_capacity(n);
    let mut cities: Vec<Option<String>> = Vec::with_capacity(n);
    let mut areas: Vec<Option<String>> = Vec::with_capacity(n);
    let mut latitudes: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut longitudes: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut price_mins: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut price_maxes: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut price_averages: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut ratings: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut review_counts: Vec<i32> = Vec::with_capacity(n);
    let mut verified: Vec<bool> = Vec::with_capacity(n);
    let mut names: Vec<String> = Vec::with_capacity(n);
    let mut business_names: Vec<Option<String>> = Vec::with_capacity(n);
    let mut descriptions: Vec<Option<String>> = Vec::with_capacity(n);
    let mut phones: Vec<Option<String>> = Vec::with_capacity(n);
    let mut image_urls: Vec<Option<String>> = Vec::with_capacity(n);

    for v in vendors {
        ids.push(v.id);
        public_ids.push(v.public_id);
        service_types.push(v.service_type.clone());
        cities.push(v.city.clone());
        areas.push(v.area.clone());
        latitudes.push(v.latitude);
        longitudes.push(v.longitude);
        price_mins.push(v.price_min);
        price_maxes.push(v.price_max);
        price_averages.push(v.price_average);
        ratings.push(v.rating);
        review_counts.push(v.review_count);
        verified.push(v.is_verified);
        names.push(v.name.clone());
        business_names.push(v.business_name.clone());
        descriptions.push(v.description.clone());
        phones.push(v.phone.clone());
        image_urls.push(v.image_url.clone());
    }

    let mut tx = pool.begin().await?;

    let inserted_flags: Vec<bool> = sqlx::query_scalar::<_, bool>(
        "INSERT INTO vendors \
             (id, public_id, service_type, city, area, latitude, longitude, \
              price_min, price_max, price_average, rating, review_count, is_verified, \
              name, business_name, description, phone, image_url) \
         SELECT * FROM UNNEST(\
              $1::int8[], $2::uuid[], $3::text[], $4::text[], $5::text[], \
              $6::float8[], $7::float8[], $8::float8[], $9::float8[], $10::float8[], \
              $11::float8[], $12::int4[], $13::bool[], \
              $14::text[], $15::text[], $16::text[], $17::text[], $18::text[]) \
         ON CONFLICT (id) DO UPDATE SET \
             service_type  = EXCLUDED.service_type, \
             city          = EXCLUDED.city, \
             area          = EXCLUDED.area, \
             latitude      = EXCLUDED.latitude, \
             longitude     = EXCLUDED.longitude, \
             price_min     = EXCLUDED.price_min, \
             price_max     = EXCLUDED.price_max, \
             price_average = EXCLUDED.price_average, \
             rating        = EXCLUDED.rating, \
             review_count  = EXCLUDED.review_count, \
             is_verified   = EXCLUDED.is_verified, \
             name          = EXCLUDED.name, \
             business_name = EXCLUDED.business_name, \
             description   = EXCLUDED.description, \
             phone         = EXCLUDED.phone, \
             image_url     = EXCLUDED.image_url, \
             is_active     = TRUE, \
             updated_at    = NOW() \
         RETURNING (xmax = 0) AS inserted",
    )
    .bind(&ids)
    .bind(&public_ids)
    .bind(&service_types)
    .bind(&cities)
    .bind(&areas)
    .bind(&latitudes)
    .bind(&longitudes)
    .bind(&price_mins)
    .bind(&price_maxes)
    .bind(&price_averages)
    .bind(&ratings)
    .bind(&review_counts)
    .bind(&verified)
    .bind(&names)
    .bind(&business_names)
    .bind(&descriptions)
    .bind(&phones)
    .bind(&image_urls)
    .fetch_all(&mut *tx)
    .await?;

    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('vendors', 'id'), \
                       GREATEST((SELECT MAX(id) FROM vendors), 1))",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let inserted = inserted_flags.iter().filter(|&&f| f).count() as u64;
    let updated = inserted_flags.len() as u64 - inserted;
    Ok((inserted, updated))
}
