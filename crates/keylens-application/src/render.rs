//! Presentation DTOs produced by one invocation.
//!
//! These are the values the front end draws from; it never reaches into
//! the session store or the reconciler itself.

use keylens_core::detail::KeywordDetail;
use keylens_core::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// One table row prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRow {
    pub rank: u32,
    pub keyword: String,
    pub frequency: u64,
    pub total_postings: u64,
    /// Share of postings mentioning the keyword; `None` when the category
    /// has no counted postings.
    pub ratio: Option<f64>,
    pub selected: bool,
}

/// One bar of the top-N frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    pub keyword: String,
    pub frequency: u64,
}

/// Everything the front end needs to redraw after one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerRender {
    /// The active category.
    pub category: String,
    /// Rows in rank order, with the repaired single selection applied.
    pub rows: Vec<RenderRow>,
    /// The resolved selection.
    pub selection: SelectionState,
    /// Detail bullets for the resolved keyword, when authored.
    pub details: Option<KeywordDetail>,
    /// Top-N rows for the frequency chart, in rank order.
    pub chart: Vec<ChartBar>,
}
