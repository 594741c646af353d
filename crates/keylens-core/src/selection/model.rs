//! Selection domain models.
//!
//! Snapshots are immutable, fully-materialized table values passed between
//! invocation boundaries. The persisted [`SessionState`] is the only thing
//! that survives from one invocation to the next; the core reads a copy in
//! and writes a copy out, never holding a live reference across invocations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One ranked keyword row of a category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// 1-based rank, assigned by descending frequency (ties keep catalog
    /// order).
    pub rank: u32,
    /// Keyword text; unique within a snapshot.
    pub keyword: String,
    /// Posting frequency of the keyword in the snapshot's category.
    pub frequency: u64,
    /// Whether this row is the selected one. At most one row per snapshot
    /// carries `true`.
    pub selected: bool,
}

/// A fully-materialized category table.
///
/// Row order is rank order and is significant: the reconciler's tie-break
/// policy is defined over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    /// Category the rows belong to.
    pub category: String,
    /// Rows in rank order.
    pub rows: Vec<TableRow>,
}

impl TableSnapshot {
    /// Returns the selected keyword, if any row is flagged.
    ///
    /// When more than one row is flagged (a state the reconciler repairs),
    /// the first in rank order is reported.
    pub fn selected_keyword(&self) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.selected)
            .map(|r| r.keyword.as_str())
    }

    /// Returns the current selection flags keyed by keyword.
    ///
    /// This is the shape a UI payload takes; feeding it back into the
    /// reconciler unchanged must be a no-op.
    pub fn flags(&self) -> HashMap<String, bool> {
        self.rows
            .iter()
            .map(|r| (r.keyword.clone(), r.selected))
            .collect()
    }

    /// Finds a row by keyword.
    pub fn row(&self, keyword: &str) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.keyword == keyword)
    }
}

/// The resolved selection after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionState {
    /// No row is selected.
    NoSelection,
    /// Exactly one row is selected.
    SingleSelected(String),
}

impl SelectionState {
    /// Returns the selected keyword, if any.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            SelectionState::NoSelection => None,
            SelectionState::SingleSelected(keyword) => Some(keyword),
        }
    }

    /// Whether a row is selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionState::SingleSelected(_))
    }
}

/// Session state persisted across invocations.
///
/// Created empty at session start, read and fully replaced once per
/// invocation, and destroyed when the session ends. `put` never merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Category of the last invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_category: Option<String>,

    /// RFC 3339 timestamp of the last write, stamped by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Table snapshot of the last invocation, selection flags included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_snapshot: Option<TableSnapshot>,
}

impl SessionState {
    /// Creates an empty session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the state to persist after an invocation produced `snapshot`.
    pub fn from_snapshot(snapshot: TableSnapshot) -> Self {
        Self {
            active_category: Some(snapshot.category.clone()),
            last_snapshot: Some(snapshot),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(category: &str, rows: &[(&str, bool)]) -> TableSnapshot {
        TableSnapshot {
            category: category.to_string(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, (keyword, selected))| TableRow {
                    rank: (i + 1) as u32,
                    keyword: keyword.to_string(),
                    frequency: 10,
                    selected: *selected,
                })
                .collect(),
        }
    }

    #[test]
    fn test_selected_keyword() {
        let snap = snapshot("데이터분석", &[("SQL", false), ("Python", true)]);
        assert_eq!(snap.selected_keyword(), Some("Python"));

        let none = snapshot("데이터분석", &[("SQL", false)]);
        assert_eq!(none.selected_keyword(), None);
    }

    #[test]
    fn test_flags_round_trip_shape() {
        let snap = snapshot("데이터분석", &[("SQL", true), ("Python", false)]);
        let flags = snap.flags();
        assert_eq!(flags.get("SQL"), Some(&true));
        assert_eq!(flags.get("Python"), Some(&false));
    }

    #[test]
    fn test_from_snapshot() {
        let snap = snapshot("데이터분석", &[("SQL", true)]);
        let state = SessionState::from_snapshot(snap.clone());
        assert_eq!(state.active_category.as_deref(), Some("데이터분석"));
        assert_eq!(state.last_snapshot, Some(snap));
        assert!(state.updated_at.is_none());
    }

    #[test]
    fn test_new_is_empty() {
        let state = SessionState::new();
        assert!(state.active_category.is_none());
        assert!(state.last_snapshot.is_none());
        assert!(state.updated_at.is_none());
    }
}
