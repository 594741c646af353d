//! Session state repository trait.

use async_trait::async_trait;

use super::model::SessionState;
use crate::error::Result;

/// An abstract per-session key/value store for selection state.
///
/// The store outlives a single invocation but not the user session. One
/// invocation performs exactly one `get` followed by at most one `put`;
/// `put` fully replaces the prior value (no merge, no partial writes).
/// The host environment serializes invocations per session, so
/// implementations need no concurrency control of their own.
#[async_trait]
pub trait SelectionStateRepository: Send + Sync {
    /// Reads the current session state.
    ///
    /// # Returns
    ///
    /// - `Ok(SessionState)`: The stored state, or the empty default when
    ///   nothing has been stored yet
    /// - `Err(_)`: Error occurred during retrieval
    async fn get(&self) -> Result<SessionState>;

    /// Replaces the session state.
    ///
    /// # Arguments
    ///
    /// * `state` - The state to persist, replacing the prior value whole
    async fn put(&self, state: SessionState) -> Result<()>;
}
