//! The catalog backend the server searches.

use async_trait::async_trait;
use vendora_core::{CatalogError, CatalogQuery, VendorCatalog, VendorRecord};
use vendora_db::PgVendorCatalog;
use vendora_matching::InMemoryCatalog;

/// Postgres in normal operation; a YAML snapshot when `VENDORA_CATALOG_PATH`
/// is set.
#[derive(Debug, Clone)]
pub enum SearchCatalog {
    Postgres(PgVendorCatalog),
    Snapshot(InMemoryCatalog),
}

impl SearchCatalog {
    pub fn backend(&self) -> &'static str {
        match self {
            SearchCatalog::Postgres(_) => "postgres",
            SearchCatalog::Snapshot(_) => "snapshot",
        }
    }
}

#[async_trait]
impl VendorCatalog for SearchCatalog {
    async fn query_vendors(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<VendorRecord>, CatalogError> {
        match self {
            SearchCatalog::Postgres(catalog) => catalog.query_vendors(query).await,
            SearchCatalog::Snapshot(catalog) => catalog.query_vendors(query).await,
        }
    }
}
