//! Selection domain module.
//!
//! This is the core of KeyLens: the table-with-selection data model, the
//! single-selection reconciler, and the session state repository trait.
//!
//! # Module Structure
//!
//! - `model`: Table rows, snapshots, and the persisted session state
//! - `reconciler`: The pure reconciliation function (one call per invocation)
//! - `repository`: Repository trait for the per-session state store

mod model;
mod reconciler;
mod repository;

// Re-export public API
pub use model::{SelectionState, SessionState, TableRow, TableSnapshot};
pub use reconciler::{Reconciled, reconcile};
pub use repository::SelectionStateRepository;
