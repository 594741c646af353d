//! Infrastructure layer for KeyLens.
//!
//! Concrete storage implementations for the repository traits defined in
//! `keylens-core`, plus centralized path management.

pub mod csv_catalog_repository;
pub mod memory_state_repository;
pub mod paths;
pub mod toml_detail_repository;
pub mod toml_state_repository;

pub use crate::csv_catalog_repository::CsvCatalogRepository;
pub use crate::memory_state_repository::MemoryStateRepository;
pub use crate::toml_detail_repository::TomlDetailRepository;
pub use crate::toml_state_repository::TomlStateRepository;
