//! Detail repository trait.

use async_trait::async_trait;

use super::model::KeywordDetail;
use crate::error::Result;

/// Repository trait for keyword detail lookup.
///
/// Consulted only with the reconciler's resolved keyword, never with raw
/// UI input.
#[async_trait]
pub trait DetailRepository: Send + Sync {
    /// Looks up the detail bullets for a keyword.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(detail))`: Detail text exists for the keyword
    /// - `Ok(None)`: No detail authored yet (a normal outcome)
    /// - `Err(_)`: Error occurred during retrieval
    async fn lookup(&self, keyword: &str) -> Result<Option<KeywordDetail>>;
}
