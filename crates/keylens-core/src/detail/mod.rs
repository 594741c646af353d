//! Keyword detail domain module.
//!
//! Maps a resolved keyword to human-authored detail bullet text. Absence is
//! a normal outcome (the keyword has not been authored yet), never an error.
//!
//! # Module Structure
//!
//! - `model`: The detail entry model
//! - `repository`: Repository trait for detail lookup
//! - `preset`: System-authored default details

mod model;
mod preset;
mod repository;

// Re-export public API
pub use model::KeywordDetail;
pub use preset::get_default_details;
pub use repository::DetailRepository;
