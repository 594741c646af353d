//! Viewer use case implementation.
//!
//! `ViewerUseCase` is the presentation driver: it orchestrates the
//! per-invocation sequence of computing the category view, reconciling the
//! selection against the session store, and assembling the render model.
//! The whole sequence re-runs from scratch on every user interaction; the
//! only thing that survives between invocations is what the
//! `SelectionStateRepository` holds.

use std::collections::HashMap;
use std::sync::Arc;

use keylens_core::catalog::KeywordRecord;
use keylens_core::detail::DetailRepository;
use keylens_core::error::Result;
use keylens_core::selection::{SelectionStateRepository, SessionState, reconcile};
use keylens_core::view::compute_view;
use keylens_infrastructure::MemoryStateRepository;

use crate::catalog_service::CatalogService;
use crate::render::{ChartBar, RenderRow, ViewerRender};

/// Default number of rows shown in the frequency chart.
pub const DEFAULT_CHART_SIZE: usize = 10;

/// Use case driving one presentation invocation.
///
/// # Responsibilities
///
/// - Computing the fresh category view (an empty category short-circuits
///   before the session store is touched)
/// - Running the selection reconciler against the persisted session state
/// - Persisting the corrected snapshot (full replacement)
/// - Resolving detail text with the reconciled keyword only
/// - Assembling the [`ViewerRender`] the front end draws from
pub struct ViewerUseCase {
    /// Cached catalog access
    catalog_service: Arc<CatalogService>,
    /// Per-session selection state store
    state_repository: Arc<dyn SelectionStateRepository>,
    /// Keyword detail source
    detail_repository: Arc<dyn DetailRepository>,
    /// Number of rows fed to the chart
    chart_size: usize,
}

impl ViewerUseCase {
    /// Creates a new `ViewerUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog_service` - Cached catalog access
    /// * `state_repository` - Per-session selection state store
    /// * `detail_repository` - Keyword detail source
    pub fn new(
        catalog_service: Arc<CatalogService>,
        state_repository: Arc<dyn SelectionStateRepository>,
        detail_repository: Arc<dyn DetailRepository>,
    ) -> Self {
        Self {
            catalog_service,
            state_repository,
            detail_repository,
            chart_size: DEFAULT_CHART_SIZE,
        }
    }

    /// Creates a use case whose session state lives in process memory only.
    ///
    /// Suited to interactive sessions where the process lifetime is the
    /// session lifetime.
    pub fn ephemeral(
        catalog_service: Arc<CatalogService>,
        detail_repository: Arc<dyn DetailRepository>,
    ) -> Self {
        Self::new(
            catalog_service,
            Arc::new(MemoryStateRepository::new()),
            detail_repository,
        )
    }

    /// Overrides the number of chart rows.
    pub fn with_chart_size(mut self, chart_size: usize) -> Self {
        self.chart_size = chart_size;
        self
    }

    /// Returns the selectable categories, sorted.
    pub async fn categories(&self) -> Result<Vec<String>> {
        self.catalog_service.categories().await
    }

    /// Returns every catalog record, in catalog order (the raw-data view).
    pub async fn raw_records(&self) -> Result<Vec<KeywordRecord>> {
        Ok(self.catalog_service.catalog().await?.records().to_vec())
    }

    /// Drops the cached catalog so the next invocation reloads the source.
    pub async fn reload_catalog(&self) {
        self.catalog_service.invalidate().await;
    }

    /// Runs one full invocation.
    ///
    /// # Arguments
    ///
    /// * `category` - The category the user is viewing
    /// * `edited_flags` - Checkbox state toggled in this interaction, keyed
    ///   by keyword; rows absent from the map are untouched
    ///
    /// # Errors
    ///
    /// `KeylensError::EmptyCategory` when the category has no rows; the
    /// session store is left untouched in that case.
    pub async fn render(
        &self,
        category: &str,
        edited_flags: &HashMap<String, bool>,
    ) -> Result<ViewerRender> {
        let catalog = self.catalog_service.catalog().await?;

        // A failing view computation must short-circuit before the store
        // is read or written.
        let fresh_view = compute_view(&catalog, category)?;

        let previous = self.state_repository.get().await?;
        let outcome = reconcile(&fresh_view, &previous, edited_flags);
        self.state_repository
            .put(SessionState::from_snapshot(outcome.snapshot.clone()))
            .await?;

        // Details are resolved from the reconciled keyword, never from the
        // raw UI payload.
        let details = match outcome.selection.keyword() {
            Some(keyword) => self.detail_repository.lookup(keyword).await?,
            None => None,
        };

        tracing::debug!(
            target: "keylens::viewer",
            category = %category,
            edited = edited_flags.len(),
            selected = outcome.selection.keyword().unwrap_or(""),
            "invocation reconciled"
        );

        let totals: HashMap<&str, u64> = catalog
            .records_for(category)
            .into_iter()
            .map(|r| (r.keyword.as_str(), r.total_postings))
            .collect();

        let rows: Vec<RenderRow> = outcome
            .snapshot
            .rows
            .iter()
            .map(|row| {
                let total_postings = totals.get(row.keyword.as_str()).copied().unwrap_or(0);
                RenderRow {
                    rank: row.rank,
                    keyword: row.keyword.clone(),
                    frequency: row.frequency,
                    total_postings,
                    ratio: if total_postings == 0 {
                        None
                    } else {
                        Some(row.frequency as f64 / total_postings as f64)
                    },
                    selected: row.selected,
                }
            })
            .collect();

        let chart: Vec<ChartBar> = rows
            .iter()
            .take(self.chart_size)
            .map(|row| ChartBar {
                keyword: row.keyword.clone(),
                frequency: row.frequency,
            })
            .collect();

        Ok(ViewerRender {
            category: category.to_string(),
            rows,
            selection: outcome.selection,
            details,
            chart,
        })
    }

    /// Convenience invocation: the user checked one keyword.
    pub async fn select(&self, category: &str, keyword: &str) -> Result<ViewerRender> {
        let flags = HashMap::from([(keyword.to_string(), true)]);
        self.render(category, &flags).await
    }

    /// Convenience invocation: the user unchecked one keyword.
    pub async fn deselect(&self, category: &str, keyword: &str) -> Result<ViewerRender> {
        let flags = HashMap::from([(keyword.to_string(), false)]);
        self.render(category, &flags).await
    }

    /// Convenience invocation: clear whatever selection the session holds.
    pub async fn clear(&self, category: &str) -> Result<ViewerRender> {
        let previous = self.state_repository.get().await?;
        let flags = match previous
            .last_snapshot
            .as_ref()
            .and_then(|s| s.selected_keyword())
        {
            Some(keyword) => HashMap::from([(keyword.to_string(), false)]),
            None => HashMap::new(),
        };
        self.render(category, &flags).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use keylens_core::catalog::{CatalogRepository, KeywordCatalog};
    use keylens_core::selection::SelectionState;
    use keylens_infrastructure::TomlDetailRepository;

    struct FixtureCatalogRepository;

    #[async_trait]
    impl CatalogRepository for FixtureCatalogRepository {
        async fn load(&self) -> Result<KeywordCatalog> {
            let record = |category: &str, keyword: &str, frequency: u64| KeywordRecord {
                category: category.to_string(),
                keyword: keyword.to_string(),
                frequency,
                total_postings: 200,
            };
            Ok(KeywordCatalog::new(vec![
                record("데이터분석", "Python 기반 데이터 분석", 150),
                record("데이터분석", "통계 기반 실험 설계", 130),
                record("데이터분석", "SQL을 활용한 데이터 추출 경험", 110),
                record("데이터분석", "대시보드 구축 경험", 90),
                record("데이터분석", "머신러닝 모델링", 70),
                record("백엔드", "Java", 140),
                record("백엔드", "Spring", 120),
            ]))
        }
    }

    fn usecase_with(state: Arc<dyn SelectionStateRepository>) -> ViewerUseCase {
        ViewerUseCase::new(
            Arc::new(CatalogService::new(Arc::new(FixtureCatalogRepository))),
            state,
            Arc::new(TomlDetailRepository::presets_only()),
        )
    }

    #[tokio::test]
    async fn test_select_rank_three_returns_details() {
        // 데이터분석 ranks 1..5; toggling the rank-3 row selects it and
        // surfaces its six authored bullets.
        let usecase = usecase_with(Arc::new(MemoryStateRepository::new()));

        let render = usecase
            .select("데이터분석", "SQL을 활용한 데이터 추출 경험")
            .await
            .unwrap();

        let selected: Vec<&RenderRow> = render.rows.iter().filter(|r| r.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].rank, 3);
        assert_eq!(
            render.selection,
            SelectionState::SingleSelected("SQL을 활용한 데이터 추출 경험".to_string())
        );
        assert_eq!(render.details.unwrap().bullets.len(), 6);
    }

    #[tokio::test]
    async fn test_selection_survives_replayed_invocation() {
        // A plain re-render (empty payload) after a selection keeps it —
        // the store, not process memory, carries the state.
        let state: Arc<dyn SelectionStateRepository> = Arc::new(MemoryStateRepository::new());
        let usecase = usecase_with(Arc::clone(&state));

        usecase.select("데이터분석", "머신러닝 모델링").await.unwrap();

        // A second driver over the same store models the next invocation.
        let next = usecase_with(state);
        let render = next.render("데이터분석", &HashMap::new()).await.unwrap();
        assert_eq!(
            render.selection,
            SelectionState::SingleSelected("머신러닝 모델링".to_string())
        );
    }

    #[tokio::test]
    async fn test_category_switch_resets_selection() {
        let state: Arc<dyn SelectionStateRepository> = Arc::new(MemoryStateRepository::new());
        let usecase = usecase_with(state);

        usecase.select("데이터분석", "머신러닝 모델링").await.unwrap();
        let render = usecase.render("백엔드", &HashMap::new()).await.unwrap();

        assert_eq!(render.selection, SelectionState::NoSelection);
        assert!(render.rows.iter().all(|r| !r.selected));
        assert!(render.details.is_none());
    }

    #[tokio::test]
    async fn test_empty_category_leaves_store_untouched() {
        let state: Arc<dyn SelectionStateRepository> = Arc::new(MemoryStateRepository::new());
        let usecase = usecase_with(Arc::clone(&state));

        usecase.select("데이터분석", "머신러닝 모델링").await.unwrap();
        let before = state.get().await.unwrap();

        let err = usecase.render("기획", &HashMap::new()).await.unwrap_err();
        assert!(err.is_empty_category());
        assert_eq!(state.get().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_clear_removes_selection() {
        let usecase = usecase_with(Arc::new(MemoryStateRepository::new()));

        usecase.select("데이터분석", "대시보드 구축 경험").await.unwrap();
        let render = usecase.clear("데이터분석").await.unwrap();

        assert_eq!(render.selection, SelectionState::NoSelection);
    }

    #[tokio::test]
    async fn test_rows_carry_ratio_and_chart_is_capped() {
        let usecase = usecase_with(Arc::new(MemoryStateRepository::new())).with_chart_size(3);

        let render = usecase.render("데이터분석", &HashMap::new()).await.unwrap();

        assert_eq!(render.rows[0].ratio, Some(0.75));
        assert_eq!(render.chart.len(), 3);
        assert_eq!(render.chart[0].keyword, "Python 기반 데이터 분석");
    }

    #[tokio::test]
    async fn test_unselected_render_has_no_details() {
        let usecase = usecase_with(Arc::new(MemoryStateRepository::new()));
        let render = usecase.render("데이터분석", &HashMap::new()).await.unwrap();

        assert_eq!(render.selection, SelectionState::NoSelection);
        assert!(render.details.is_none());
    }
}
