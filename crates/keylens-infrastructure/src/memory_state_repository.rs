//! In-memory SelectionStateRepository implementation.
//!
//! Backs ephemeral sessions (and tests) that should not leave files behind.
//! State lives for the process lifetime only.

use async_trait::async_trait;
use keylens_core::error::Result;
use keylens_core::selection::{SelectionStateRepository, SessionState};
use tokio::sync::RwLock;

/// Process-local session state repository.
#[derive(Default)]
pub struct MemoryStateRepository {
    state: RwLock<SessionState>,
}

impl MemoryStateRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SelectionStateRepository for MemoryStateRepository {
    async fn get(&self) -> Result<SessionState> {
        Ok(self.state.read().await.clone())
    }

    async fn put(&self, state: SessionState) -> Result<()> {
        *self.state.write().await = state;
        Ok(())
    }
}
