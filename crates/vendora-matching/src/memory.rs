//! Read-only in-memory vendor catalog.

use std::sync::Arc;

use async_trait::async_trait;
use vendora_core::{CatalogError, CatalogQuery, VendorCatalog, VendorRecord};

/// Immutable vendor snapshot. Cloning shares the underlying slice.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    vendors: Arc<[VendorRecord]>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(vendors: Vec<VendorRecord>) -> Self {
        Self {
            vendors: vendors.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

impl From<Vec<VendorRecord>> for InMemoryCatalog {
    fn from(vendors: Vec<VendorRecord>) -> Self {
        Self::new(vendors)
    }
}

#[async_trait]
impl VendorCatalog for InMemoryCatalog {
    async fn query_vendors(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<VendorRecord>, CatalogError> {
        Ok(self
            .vendors
            .iter()
            .filter(|vendor| query.admits(vendor))
            .cloned()
            .collect())
    }
}
