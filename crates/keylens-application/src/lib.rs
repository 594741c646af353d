//! Application layer for KeyLens.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement the per-invocation
//! presentation sequence.

pub mod catalog_service;
pub mod render;
pub mod viewer_usecase;

pub use catalog_service::CatalogService;
pub use render::{ChartBar, RenderRow, ViewerRender};
pub use viewer_usecase::ViewerUseCase;
