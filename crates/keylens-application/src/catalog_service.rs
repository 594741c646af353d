//! Catalog service with process-lifetime caching.
//!
//! The catalog source is read once per process and cached; every
//! invocation after the first reuses the in-memory copy. The cache can be
//! invalidated explicitly when the user asks for a reload.

use std::sync::Arc;

use keylens_core::catalog::{CatalogRepository, KeywordCatalog};
use keylens_core::error::Result;
use tokio::sync::RwLock;

/// Caching facade over a [`CatalogRepository`].
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    cache: RwLock<Option<Arc<KeywordCatalog>>>,
}

impl CatalogService {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            repository,
            cache: RwLock::new(None),
        }
    }

    /// Returns the catalog, loading it on first use.
    pub async fn catalog(&self) -> Result<Arc<KeywordCatalog>> {
        {
            let cache = self.cache.read().await;
            if let Some(catalog) = cache.as_ref() {
                return Ok(Arc::clone(catalog));
            }
        }

        let mut cache = self.cache.write().await;
        // Another caller may have filled the cache while we waited.
        if let Some(catalog) = cache.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.repository.load().await?);
        *cache = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Returns the selectable categories, sorted.
    pub async fn categories(&self) -> Result<Vec<String>> {
        Ok(self.catalog().await?.categories())
    }

    /// Drops the cached catalog so the next access reloads the source.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use keylens_core::catalog::KeywordRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCatalogRepository {
        loads: AtomicUsize,
    }

    #[async_trait]
    impl CatalogRepository for CountingCatalogRepository {
        async fn load(&self) -> Result<KeywordCatalog> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(KeywordCatalog::new(vec![KeywordRecord {
                category: "데이터분석".to_string(),
                keyword: "SQL".to_string(),
                frequency: 120,
                total_postings: 200,
            }]))
        }
    }

    #[tokio::test]
    async fn test_catalog_loaded_once() {
        let repo = Arc::new(CountingCatalogRepository {
            loads: AtomicUsize::new(0),
        });
        let service = CatalogService::new(repo.clone());

        service.catalog().await.unwrap();
        service.catalog().await.unwrap();
        service.categories().await.unwrap();

        assert_eq!(repo.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let repo = Arc::new(CountingCatalogRepository {
            loads: AtomicUsize::new(0),
        });
        let service = CatalogService::new(repo.clone());

        service.catalog().await.unwrap();
        service.invalidate().await;
        service.catalog().await.unwrap();

        assert_eq!(repo.loads.load(Ordering::SeqCst), 2);
    }
}
