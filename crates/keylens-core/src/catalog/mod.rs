//! Keyword catalog domain module.
//!
//! The catalog is the read-only query surface over the underlying
//! (category, keyword, frequency, total-postings) records. Where those
//! records come from is an infrastructure concern behind
//! [`CatalogRepository`].

mod model;
mod repository;

// Re-export public API
pub use model::{KeywordCatalog, KeywordRecord};
pub use repository::CatalogRepository;
