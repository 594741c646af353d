//! TOML-file based SelectionStateRepository implementation.
//!
//! One TOML file per session id under the sessions directory:
//!
//! ```text
//! base_dir/
//! ├── default.toml
//! └── 3f2b9c1e-....toml
//! ```
//!
//! `get` returns the empty default state while the file does not exist yet;
//! `put` replaces the file whole via a temp-file-and-rename so a crashed
//! invocation can never leave a partial write behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use keylens_core::error::{KeylensError, Result};
use keylens_core::selection::{SelectionStateRepository, SessionState};

use crate::paths::KeylensPaths;

/// TOML-file backed session state repository, scoped to one session id.
pub struct TomlStateRepository {
    state_path: PathBuf,
}

impl TomlStateRepository {
    /// Creates a repository for `session_id` under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>, session_id: &str) -> Self {
        Self {
            state_path: base_dir.as_ref().join(format!("{session_id}.toml")),
        }
    }

    /// Creates a repository for `session_id` at the default location
    /// (`~/.config/keylens/sessions/`).
    pub fn default_location(session_id: &str) -> Result<Self> {
        let base_dir = KeylensPaths::sessions_dir()
            .map_err(|e| KeylensError::config(e.to_string()))?;
        Ok(Self::new(base_dir, session_id))
    }

    /// Returns the backing file path.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }
}

#[async_trait]
impl SelectionStateRepository for TomlStateRepository {
    async fn get(&self) -> Result<SessionState> {
        let text = match tokio::fs::read_to_string(&self.state_path).await {
            Ok(text) => text,
            // Nothing stored yet: the session starts empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionState::new());
            }
            Err(e) => return Err(e.into()),
        };

        let state: SessionState = toml::from_str(&text)?;
        Ok(state)
    }

    async fn put(&self, mut state: SessionState) -> Result<()> {
        state.updated_at = Some(chrono::Utc::now().to_rfc3339());

        let text = toml::to_string_pretty(&state)?;

        if let Some(parent) = self.state_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to a sibling temp file, then rename over the old state so
        // readers only ever see a complete file.
        let tmp_path = self.state_path.with_extension("toml.tmp");
        tokio::fs::write(&tmp_path, text).await?;
        tokio::fs::rename(&tmp_path, &self.state_path).await?;

        tracing::debug!(
            target: "keylens::store",
            path = %self.state_path.display(),
            category = state.active_category.as_deref().unwrap_or(""),
            "session state persisted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keylens_core::selection::{TableRow, TableSnapshot};

    fn snapshot() -> TableSnapshot {
        TableSnapshot {
            category: "데이터분석".to_string(),
            rows: vec![
                TableRow {
                    rank: 1,
                    keyword: "SQL".to_string(),
                    frequency: 120,
                    selected: false,
                },
                TableRow {
                    rank: 2,
                    keyword: "Python".to_string(),
                    frequency: 90,
                    selected: true,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_get_before_first_put_returns_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlStateRepository::new(dir.path(), "default");

        let state = repo.get().await.unwrap();
        assert_eq!(state, SessionState::new());
    }

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlStateRepository::new(dir.path(), "default");

        repo.put(SessionState::from_snapshot(snapshot())).await.unwrap();

        let state = repo.get().await.unwrap();
        assert_eq!(state.active_category.as_deref(), Some("데이터분석"));
        let stored = state.last_snapshot.unwrap();
        assert_eq!(stored, snapshot());
        assert!(state.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_put_replaces_whole_state() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlStateRepository::new(dir.path(), "default");

        repo.put(SessionState::from_snapshot(snapshot())).await.unwrap();
        repo.put(SessionState::new()).await.unwrap();

        let state = repo.get().await.unwrap();
        assert!(state.active_category.is_none());
        assert!(state.last_snapshot.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let repo_a = TomlStateRepository::new(dir.path(), "a");
        let repo_b = TomlStateRepository::new(dir.path(), "b");

        repo_a.put(SessionState::from_snapshot(snapshot())).await.unwrap();

        assert!(repo_b.get().await.unwrap().last_snapshot.is_none());
        assert!(repo_a.get().await.unwrap().last_snapshot.is_some());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlStateRepository::new(dir.path(), "default");

        repo.put(SessionState::from_snapshot(snapshot())).await.unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
