//! Catalog repository trait.

use async_trait::async_trait;

use super::model::KeywordCatalog;
use crate::error::Result;

/// An abstract repository supplying the keyword catalog.
///
/// This trait decouples the core from the concrete catalog source
/// (e.g., a CSV file, a database, a remote API).
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Loads the full keyword catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(KeywordCatalog)`: Catalog loaded successfully
    /// - `Err(_)`: The source is missing or malformed
    async fn load(&self) -> Result<KeywordCatalog>;
}
