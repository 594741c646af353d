//! Wires repositories and use cases from configuration.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use keylens_application::{CatalogService, ViewerUseCase};
use keylens_core::detail::DetailRepository;
use keylens_infrastructure::{
    CsvCatalogRepository, TomlDetailRepository, TomlStateRepository,
};

use crate::config::ViewerConfig;

/// How the session state is stored for this run.
pub enum SessionScope {
    /// One TOML file per session id, surviving across process runs.
    Persistent(String),
    /// In-process state only; the process lifetime is the session.
    Ephemeral,
}

/// Builds the viewer use case from config and command-line overrides.
pub async fn build_viewer(
    config: &ViewerConfig,
    catalog_override: Option<PathBuf>,
    scope: SessionScope,
) -> Result<ViewerUseCase> {
    let catalog_repository = match catalog_override.or_else(|| config.catalog_path.clone()) {
        Some(path) => CsvCatalogRepository::new(path),
        None => CsvCatalogRepository::default_location()?,
    };
    tracing::debug!(
        target: "keylens::bootstrap",
        catalog = %catalog_repository.csv_path().display(),
        "catalog source resolved"
    );

    let catalog_service = Arc::new(CatalogService::new(Arc::new(catalog_repository)));
    let detail_repository: Arc<dyn DetailRepository> =
        Arc::new(TomlDetailRepository::default_location().await?);

    let usecase = match scope {
        SessionScope::Persistent(session_id) => ViewerUseCase::new(
            catalog_service,
            Arc::new(TomlStateRepository::default_location(&session_id)?),
            detail_repository,
        ),
        SessionScope::Ephemeral => ViewerUseCase::ephemeral(catalog_service, detail_repository),
    };

    Ok(match config.chart_size {
        Some(chart_size) => usecase.with_chart_size(chart_size),
        None => usecase,
    })
}
