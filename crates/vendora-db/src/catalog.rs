//! Postgres-backed [`VendorCatalog`].

use async_trait::async_trait;
use sqlx::PgPool;
use vendora_core::{CatalogError, CatalogQuery, VendorCatalog, VendorRecord};

use crate::vendors::query_vendors;
use crate::DbError;

/// Reads active vendors from the `vendors` table. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct PgVendorCatalog {
    pool: PgPool,
}

impl PgVendorCatalog {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VendorCatalog for PgVendorCatalog {
    async fn query_vendors(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<VendorRecord>, CatalogError> {
        query_vendors(&self.pool, query).await.map_err(catalog_error)
    }
}

/// Connection-level failures are `Unavailable`; everything else is a backend error.
fn catalog_error(err: DbError) -> CatalogError {
    match err {
        DbError::Sqlx(
            e @ (sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)),
        ) => CatalogError::Unavailable(e.to_string()),
        other => CatalogError::Backend(Box::new(other)),
    }
}
