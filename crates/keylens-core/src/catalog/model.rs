//! Keyword catalog domain models.

use serde::{Deserialize, Serialize};

/// One (category, keyword) frequency record from the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    /// Job category the keyword was counted in (e.g. "데이터분석").
    pub category: String,
    /// The keyword text. Unique per category after view computation
    /// (last-write-wins on duplicates).
    pub keyword: String,
    /// How many postings in the category mention the keyword.
    pub frequency: u64,
    /// Total number of postings counted for the category.
    pub total_postings: u64,
}

impl KeywordRecord {
    /// Share of postings mentioning this keyword, or `None` when the
    /// category has no counted postings.
    pub fn ratio(&self) -> Option<f64> {
        if self.total_postings == 0 {
            None
        } else {
            Some(self.frequency as f64 / self.total_postings as f64)
        }
    }
}

/// In-memory keyword catalog exposed as a read-only query surface.
///
/// Record order is the order of the catalog source and is preserved; the
/// category view's tie-break policy depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordCatalog {
    records: Vec<KeywordRecord>,
}

impl KeywordCatalog {
    /// Creates a catalog from records, keeping source order.
    pub fn new(records: Vec<KeywordRecord>) -> Self {
        Self { records }
    }

    /// Returns the selectable categories, sorted and deduplicated.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .records
            .iter()
            .map(|r| r.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Returns the records for a category, in catalog order.
    pub fn records_for(&self, category: &str) -> Vec<&KeywordRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[KeywordRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, keyword: &str, frequency: u64) -> KeywordRecord {
        KeywordRecord {
            category: category.to_string(),
            keyword: keyword.to_string(),
            frequency,
            total_postings: 100,
        }
    }

    #[test]
    fn test_categories_sorted_and_deduplicated() {
        let catalog = KeywordCatalog::new(vec![
            record("백엔드", "Java", 10),
            record("데이터분석", "SQL", 20),
            record("백엔드", "Spring", 8),
        ]);

        assert_eq!(catalog.categories(), vec!["데이터분석", "백엔드"]);
    }

    #[test]
    fn test_records_for_keeps_catalog_order() {
        let catalog = KeywordCatalog::new(vec![
            record("데이터분석", "SQL", 20),
            record("백엔드", "Java", 10),
            record("데이터분석", "Python", 20),
        ]);

        let rows = catalog.records_for("데이터분석");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keyword, "SQL");
        assert_eq!(rows[1].keyword, "Python");
    }

    #[test]
    fn test_ratio() {
        let rec = record("데이터분석", "SQL", 25);
        assert_eq!(rec.ratio(), Some(0.25));

        let zero = KeywordRecord {
            total_postings: 0,
            ..record("데이터분석", "SQL", 25)
        };
        assert_eq!(zero.ratio(), None);
    }
}
