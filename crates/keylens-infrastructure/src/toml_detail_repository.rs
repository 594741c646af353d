//! TOML-file based DetailRepository implementation.
//!
//! Detail bullets come from two layers: the system presets built into the
//! core, and an optional user-authored `details.toml` whose entries shadow
//! presets with the same keyword:
//!
//! ```toml
//! [[detail]]
//! keyword = "SQL을 활용한 데이터 추출 경험"
//! bullets = [
//!     "첫 번째 항목",
//!     "두 번째 항목",
//! ]
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use keylens_core::detail::{DetailRepository, KeywordDetail, get_default_details};
use keylens_core::error::{KeylensError, Result};
use serde::Deserialize;

use crate::paths::KeylensPaths;

#[derive(Debug, Default, Deserialize)]
struct DetailsFile {
    #[serde(default, rename = "detail")]
    details: Vec<DetailEntry>,
}

#[derive(Debug, Deserialize)]
struct DetailEntry {
    keyword: String,
    #[serde(default)]
    bullets: Vec<String>,
}

/// Detail repository merging user-authored entries over system presets.
pub struct TomlDetailRepository {
    index: HashMap<String, KeywordDetail>,
}

impl TomlDetailRepository {
    /// Creates a repository from presets only (no user file).
    pub fn presets_only() -> Self {
        Self {
            index: index_of(get_default_details()),
        }
    }

    /// Loads a repository, merging `details_path` over the presets when the
    /// file exists. A missing file is not an error.
    pub async fn load(details_path: impl AsRef<Path>) -> Result<Self> {
        let mut index = index_of(get_default_details());

        let path = details_path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(text) => {
                let file: DetailsFile = toml::from_str(&text)?;
                tracing::debug!(
                    target: "keylens::detail",
                    entries = file.details.len(),
                    path = %path.display(),
                    "user detail entries loaded"
                );
                for entry in file.details {
                    index.insert(
                        entry.keyword.clone(),
                        KeywordDetail::new(entry.keyword, entry.bullets),
                    );
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        Ok(Self { index })
    }

    /// Loads from the default location (`~/.config/keylens/details.toml`).
    pub async fn default_location() -> Result<Self> {
        let path: PathBuf = KeylensPaths::details_file()
            .map_err(|e| KeylensError::config(e.to_string()))?;
        Self::load(path).await
    }
}

fn index_of(details: Vec<KeywordDetail>) -> HashMap<String, KeywordDetail> {
    details
        .into_iter()
        .map(|d| (d.keyword.clone(), d))
        .collect()
}

#[async_trait]
impl DetailRepository for TomlDetailRepository {
    async fn lookup(&self, keyword: &str) -> Result<Option<KeywordDetail>> {
        Ok(self.index.get(keyword).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_preset_lookup() {
        let repo = TomlDetailRepository::presets_only();
        let detail = repo
            .lookup("SQL을 활용한 데이터 추출 경험")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.bullets.len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_keyword_is_none() {
        let repo = TomlDetailRepository::presets_only();
        assert!(repo.lookup("미등록 키워드").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_presets() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlDetailRepository::load(dir.path().join("details.toml"))
            .await
            .unwrap();
        assert!(
            repo.lookup("SQL을 활용한 데이터 추출 경험")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_user_entry_shadows_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("details.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[[detail]]\nkeyword = \"SQL을 활용한 데이터 추출 경험\"\nbullets = [\"사용자 정의 항목\"]"
        )
        .unwrap();

        let repo = TomlDetailRepository::load(&path).await.unwrap();
        let detail = repo
            .lookup("SQL을 활용한 데이터 추출 경험")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.bullets, vec!["사용자 정의 항목"]);
    }

    #[tokio::test]
    async fn test_user_entry_adds_new_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("details.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[[detail]]\nkeyword = \"Kafka 운영 경험\"\nbullets = [\"브로커 장애 대응\"]"
        )
        .unwrap();

        let repo = TomlDetailRepository::load(&path).await.unwrap();
        assert!(repo.lookup("Kafka 운영 경험").await.unwrap().is_some());
    }
}
