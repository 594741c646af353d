//! The single-selection reconciler.
//!
//! One call per invocation. Given the freshly computed view, the previously
//! persisted session state, and the flags the user just edited, this
//! resolves the one row that is selected going forward and repairs the
//! table so that invariant holds. It is a total pure function: no I/O, no
//! error paths, and every anomaly degrades to a well-defined state
//! transition.

use std::collections::HashMap;

use super::model::{SelectionState, SessionState, TableSnapshot};

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Copy of the fresh view with at most one row flagged selected.
    pub snapshot: TableSnapshot,
    /// The resolved selection.
    pub selection: SelectionState,
}

/// Resolves the selection for this invocation and repairs the table.
///
/// # Arguments
///
/// * `fresh_view` - Snapshot for the active category, all flags `false`
/// * `previous` - Session state persisted by the prior invocation
/// * `edited_flags` - Checkbox state the user toggled in this invocation,
///   keyed by keyword; rows absent from the map are treated as untouched
///
/// # Resolution policy
///
/// A row the user just flipped from `false` to `true` is the authoritative
/// expression of intent: among those, the last in rank order wins (a human
/// clicking a lower row after an earlier one). Only when nothing was newly
/// toggled does a surviving `true` flag count, and then the first in rank
/// order wins so an accidental multi-true payload is repaired without
/// blanking the user's visible selection.
pub fn reconcile(
    fresh_view: &TableSnapshot,
    previous: &SessionState,
    edited_flags: &HashMap<String, bool>,
) -> Reconciled {
    // Category-change guard: a snapshot from another category (or none at
    // all) contributes nothing; every prior flag is treated as false.
    let baseline: HashMap<&str, bool> = match &previous.last_snapshot {
        Some(snapshot) if snapshot.category == fresh_view.category => snapshot
            .rows
            .iter()
            .map(|r| (r.keyword.as_str(), r.selected))
            .collect(),
        Some(snapshot) => {
            tracing::debug!(
                target: "keylens::selection",
                previous = %snapshot.category,
                current = %fresh_view.category,
                "stale selection discarded on category switch"
            );
            HashMap::new()
        }
        None => HashMap::new(),
    };

    // Re-key onto the fresh rows: rows that vanished are dropped, rows that
    // appeared start unselected, untouched rows keep their prior value.
    let mut newly_true: Vec<&str> = Vec::new();
    let mut currently_true: Vec<&str> = Vec::new();
    for row in &fresh_view.rows {
        let old = baseline.get(row.keyword.as_str()).copied().unwrap_or(false);
        let new = edited_flags.get(&row.keyword).copied().unwrap_or(old);
        if !old && new {
            newly_true.push(&row.keyword);
        }
        if new {
            currently_true.push(&row.keyword);
        }
    }

    let (winner, selection) = if let Some(keyword) = newly_true.last() {
        (Some(*keyword), SelectionState::SingleSelected(keyword.to_string()))
    } else if let Some(keyword) = currently_true.first() {
        if currently_true.len() > 1 {
            tracing::debug!(
                target: "keylens::selection",
                flagged = currently_true.len(),
                kept = %keyword,
                "ambiguous multi-selection repaired"
            );
        }
        (Some(*keyword), SelectionState::SingleSelected(keyword.to_string()))
    } else {
        (None, SelectionState::NoSelection)
    };

    let mut snapshot = fresh_view.clone();
    for row in &mut snapshot.rows {
        row.selected = winner == Some(row.keyword.as_str());
    }

    Reconciled {
        snapshot,
        selection,
    }
}
