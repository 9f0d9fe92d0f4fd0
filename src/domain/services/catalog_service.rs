use crate::config::settings::EngineSettings;
use crate::domain::entities::catalog_page::CatalogPage;
use crate::domain::entities::facets::FacetDocument;
use crate::domain::entities::filter_criteria::FilterCriteria;
use crate::domain::entities::game::{Game, GameDetails, LaunchOption};
use crate::domain::entities::predicate::CompiledFilter;
use crate::domain::entities::query_params::CatalogQuery;
use crate::domain::entities::statistics::Statistics;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::errors::repository_error::RepositoryError;
use crate::domain::ports::primary::catalog_use_case::CatalogUseCase;
use crate::domain::ports::secondary::repositories::GameQueryRepository;
use crate::domain::services::facet_aggregator::{FacetAggregator, FacetScope, best_effort};
use crate::domain::services::filter_compiler::{build_criteria, compile};
use crate::domain::services::genre_inferencer::{GenreInferencer, TitlePatternInferencer};
use crate::domain::services::result_composer::compose;
use crate::domain::services::statistics_calculator::StatisticsCalculator;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, error, instrument};

pub struct CatalogService {
    query_repo: Arc<dyn GameQueryRepository>,
    facets: Arc<FacetAggregator>,
    statistics: Arc<StatisticsCalculator>,
    settings: EngineSettings,
}

impl CatalogService {
    pub fn new(query_repo: Arc<dyn GameQueryRepository>, settings: EngineSettings) -> Self {
        Self::with_inferencer(query_repo, Arc::new(TitlePatternInferencer), settings)
    }

    pub fn with_inferencer(
        query_repo: Arc<dyn GameQueryRepository>,
        inferencer: Arc<dyn GenreInferencer>,
        settings: EngineSettings,
    ) -> Self {
        let statistics = Arc::new(StatisticsCalculator::new(Arc::clone(&query_repo)));
        let facets = Arc::new(FacetAggregator::new(
            Arc::clone(&query_repo),
            inferencer,
            Arc::clone(&statistics),
            settings,
        ));
        Self {
            query_repo,
            facets,
            statistics,
            settings,
        }
    }

    fn prepare(&self, query: &CatalogQuery) -> (FilterCriteria, CompiledFilter) {
        let criteria = build_criteria(query, self.settings.current_year());
        let filter = compile(&criteria);
        (criteria, filter)
    }

    async fn scoped_statistics(&self, filter: CompiledFilter) -> Statistics {
        let statistics = Arc::clone(&self.statistics);
        best_effort("stats", move || statistics.scoped(&filter)).await
    }

    async fn page_rows(
        &self,
        criteria: &FilterCriteria,
        filter: CompiledFilter,
    ) -> Result<(Vec<Game>, u64), RepositoryError> {
        let repo = Arc::clone(&self.query_repo);
        let sort = criteria.sort;
        let page = criteria.page;

        tokio::task::spawn_blocking(move || {
            let total = repo.count_games(&filter)?;
            let games =
                repo.find_games_paginated(&filter, sort, page.offset(), u64::from(page.page_size()))?;
            Ok::<_, RepositoryError>((games, total))
        })
        .await?
    }
}

#[async_trait::async_trait]
impl CatalogUseCase for CatalogService {
    #[instrument(skip_all)]
    async fn browse(&self, query: CatalogQuery) -> Result<CatalogPage, DomainError> {
        let (criteria, filter) = self.prepare(&query);
        debug!(
            strategy = %criteria.strategy,
            sort = criteria.sort.column.as_str(),
            predicates = ?filter,
            "browsing catalog"
        );

        let scope = FacetScope::new(&filter, criteria.genre);
        let (rows, facets, stats) = tokio::join!(
            self.page_rows(&criteria, filter.clone()),
            Arc::clone(&self.facets).aggregate(scope),
            self.scoped_statistics(filter.clone()),
        );

        let (games, total) = rows.map_err(|source| {
            error!(error = %source, predicates = ?filter, "catalog query failed");
            DomainError::StoreQuery(source)
        })?;

        Ok(compose(&criteria, games, total, facets, stats))
    }

    #[instrument(skip_all)]
    async fn facets(&self, query: CatalogQuery) -> FacetDocument {
        let (criteria, filter) = self.prepare(&query);
        Arc::clone(&self.facets)
            .aggregate(FacetScope::new(&filter, criteria.genre))
            .await
    }

    #[instrument(skip_all)]
    async fn statistics(&self, query: CatalogQuery) -> Statistics {
        let (_, filter) = self.prepare(&query);
        self.scoped_statistics(filter).await
    }

    #[instrument(skip(self))]
    async fn game_details(&self, app_id: i64) -> Result<GameDetails, DomainError> {
        let repo = Arc::clone(&self.query_repo);

        let details = tokio::task::spawn_blocking(move || {
            let Some(game) = repo.find_game(app_id)? else {
                return Ok(None);
            };
            let mut launch_options = repo.find_launch_options(app_id)?;
            rank_options(&mut launch_options);
            Ok::<_, RepositoryError>(Some(GameDetails {
                game,
                launch_options,
            }))
        })
        .await
        .map_err(RepositoryError::from)??;

        details.ok_or(DomainError::NotFound(app_id))
    }
}

/// Best rated first, verified before unverified, then by command.
fn rank_options(options: &mut [LaunchOption]) {
    options.sort_by(|a, b| {
        Reverse(a.score())
            .cmp(&Reverse(b.score()))
            .then_with(|| b.verified.cmp(&a.verified))
            .then_with(|| a.command.cmp(&b.command))
    });
}
