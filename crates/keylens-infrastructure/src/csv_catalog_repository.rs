//! CSV-file based CatalogRepository implementation.
//!
//! Reads the keyword catalog from a CSV file with columns
//! `category, word, count, total_posts` (extra columns are ignored).
//! The file is decoded as UTF-8 (a BOM is tolerated) with an EUC-KR
//! fallback, since catalogs exported from Korean spreadsheet tools commonly
//! arrive in either encoding.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use keylens_core::catalog::{CatalogRepository, KeywordCatalog, KeywordRecord};
use keylens_core::error::{KeylensError, Result};

use crate::paths::KeylensPaths;

const REQUIRED_COLUMNS: [&str; 4] = ["category", "word", "count", "total_posts"];

/// CSV-file backed catalog repository.
pub struct CsvCatalogRepository {
    csv_path: PathBuf,
}

impl CsvCatalogRepository {
    /// Creates a repository reading from the given CSV file.
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }

    /// Creates a repository at the default catalog location
    /// (`~/.local/share/keylens/catalog.csv`).
    pub fn default_location() -> Result<Self> {
        let path = KeylensPaths::catalog_file()
            .map_err(|e| KeylensError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    /// Returns the path this repository reads from.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Decodes raw file bytes: UTF-8 first (stripping a BOM), EUC-KR as a
    /// fallback.
    fn decode(bytes: &[u8]) -> Result<String> {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Ok(text.trim_start_matches('\u{feff}').to_string());
        }

        let (text, _, had_errors) = encoding_rs::EUC_KR.decode(bytes);
        if had_errors {
            return Err(KeylensError::data_access(
                "Catalog CSV is neither valid UTF-8 nor EUC-KR",
            ));
        }
        tracing::debug!(target: "keylens::catalog", "catalog decoded as EUC-KR");
        Ok(text.into_owned())
    }

    /// Parses decoded CSV text into a catalog.
    fn parse(&self, text: &str) -> Result<KeywordCatalog> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());

        let header_line = lines
            .next()
            .ok_or_else(|| KeylensError::data_access("Catalog CSV is empty"))?;
        let header = split_csv_line(header_line);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !header.iter().any(|h| h == *col))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(KeylensError::data_access(format!(
                "Catalog CSV is missing required columns: {}",
                missing.join(", ")
            )));
        }

        let index_of = |name: &str| header.iter().position(|h| h == name).unwrap();
        let category_idx = index_of("category");
        let word_idx = index_of("word");
        let count_idx = index_of("count");
        let total_idx = index_of("total_posts");

        let mut records = Vec::new();
        for (line_num, line) in lines.enumerate() {
            let fields = split_csv_line(line);
            let cell = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");

            let category = cell(category_idx);
            let keyword = cell(word_idx);
            if category.is_empty() || keyword.is_empty() {
                tracing::warn!(
                    target: "keylens::catalog",
                    line = line_num + 2,
                    "skipping catalog row with empty category or word"
                );
                continue;
            }

            let (Ok(frequency), Ok(total_postings)) =
                (cell(count_idx).parse::<u64>(), cell(total_idx).parse::<u64>())
            else {
                tracing::warn!(
                    target: "keylens::catalog",
                    line = line_num + 2,
                    "skipping catalog row with non-numeric count or total_posts"
                );
                continue;
            };

            records.push(KeywordRecord {
                category: category.to_string(),
                keyword: keyword.to_string(),
                frequency,
                total_postings,
            });
        }

        Ok(KeywordCatalog::new(records))
    }
}

#[async_trait]
impl CatalogRepository for CsvCatalogRepository {
    async fn load(&self) -> Result<KeywordCatalog> {
        let bytes = match tokio::fs::read(&self.csv_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(KeylensError::not_found(
                    "catalog file",
                    self.csv_path.display().to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let text = Self::decode(&bytes)?;
        let catalog = self.parse(&text)?;
        tracing::info!(
            target: "keylens::catalog",
            records = catalog.len(),
            path = %self.csv_path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Splits one CSV line into fields, honoring double-quoted cells.
///
/// A doubled quote inside a quoted cell is an escaped quote. Surrounding
/// whitespace on unquoted cells is trimmed.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current).trim().to_string());
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
