//! Keyword detail domain models.

use serde::{Deserialize, Serialize};

/// Human-authored detail text for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDetail {
    /// Keyword the bullets describe.
    pub keyword: String,
    /// Ordered bullet lines shown in the detail panel.
    pub bullets: Vec<String>,
}

impl KeywordDetail {
    /// Creates a detail entry.
    pub fn new(keyword: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            keyword: keyword.into(),
            bullets,
        }
    }
}
