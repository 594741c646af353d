//! Category view computation.
//!
//! A deterministic pure function of (catalog, category): it produces the
//! ordered, ranked row set the reconciler consumes.

use std::collections::HashMap;

use crate::catalog::KeywordCatalog;
use crate::error::{KeylensError, Result};
use crate::selection::{TableRow, TableSnapshot};

/// Computes the ranked table for a category, all rows unselected.
///
/// Rows are sorted by frequency descending; ties keep the catalog order
/// (the sort is stable). Ranks are assigned 1..N over the sorted sequence.
/// Duplicate keywords within the category collapse to one row, keeping the
/// later record's frequency (last-write-wins, matching the re-keying policy
/// of the reconciler).
///
/// # Errors
///
/// `KeylensError::EmptyCategory` when no catalog rows match. The caller
/// renders an empty state and must not run the reconciler or touch the
/// session store.
pub fn compute_view(catalog: &KeywordCatalog, category: &str) -> Result<TableSnapshot> {
    let records = catalog.records_for(category);
    if records.is_empty() {
        return Err(KeylensError::empty_category(category));
    }

    // Collapse duplicate keywords: position of the first occurrence,
    // frequency of the last.
    let mut rows: Vec<TableRow> = Vec::with_capacity(records.len());
    let mut index_by_keyword: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match index_by_keyword.get(record.keyword.as_str()) {
            Some(&i) => rows[i].frequency = record.frequency,
            None => {
                index_by_keyword.insert(record.keyword.as_str(), rows.len());
                rows.push(TableRow {
                    rank: 0,
                    keyword: record.keyword.clone(),
                    frequency: record.frequency,
                    selected: false,
                });
            }
        }
    }

    // Stable sort: ties keep catalog order, which the reconciler's
    // tie-break policy depends on.
    rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = (i + 1) as u32;
    }

    Ok(TableSnapshot {
        category: category.to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KeywordRecord;

    fn record(category: &str, keyword: &str, frequency: u64) -> KeywordRecord {
        KeywordRecord {
            category: category.to_string(),
            keyword: keyword.to_string(),
            frequency,
            total_postings: 200,
        }
    }

    #[test]
    fn test_ranks_by_descending_frequency() {
        let catalog = KeywordCatalog::new(vec![
            record("데이터분석", "Tableau", 40),
            record("데이터분석", "SQL", 120),
            record("데이터분석", "Python", 90),
        ]);

        let snapshot = compute_view(&catalog, "데이터분석").unwrap();
        let order: Vec<(&str, u32)> = snapshot
            .rows
            .iter()
            .map(|r| (r.keyword.as_str(), r.rank))
            .collect();
        assert_eq!(order, vec![("SQL", 1), ("Python", 2), ("Tableau", 3)]);
        assert!(snapshot.rows.iter().all(|r| !r.selected));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = KeywordCatalog::new(vec![
            record("데이터분석", "R", 50),
            record("데이터분석", "SQL", 50),
            record("데이터분석", "Python", 80),
        ]);

        let snapshot = compute_view(&catalog, "데이터분석").unwrap();
        let order: Vec<&str> = snapshot.rows.iter().map(|r| r.keyword.as_str()).collect();
        // R precedes SQL in the catalog, so it keeps the lower rank.
        assert_eq!(order, vec!["Python", "R", "SQL"]);
    }

    #[test]
    fn test_other_categories_are_filtered_out() {
        let catalog = KeywordCatalog::new(vec![
            record("데이터분석", "SQL", 120),
            record("백엔드", "Java", 100),
        ]);

        let snapshot = compute_view(&catalog, "데이터분석").unwrap();
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.category, "데이터분석");
    }

    #[test]
    fn test_empty_category_error() {
        let catalog = KeywordCatalog::new(vec![record("데이터분석", "SQL", 120)]);
        let err = compute_view(&catalog, "기획").unwrap_err();
        assert!(err.is_empty_category());
    }

    #[test]
    fn test_duplicate_keyword_last_write_wins() {
        let catalog = KeywordCatalog::new(vec![
            record("데이터분석", "SQL", 10),
            record("데이터분석", "Python", 60),
            record("데이터분석", "SQL", 90),
        ]);

        let snapshot = compute_view(&catalog, "데이터분석").unwrap();
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0].keyword, "SQL");
        assert_eq!(snapshot.rows[0].frequency, 90);
    }
}
