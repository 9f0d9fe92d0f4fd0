use crate::config::settings::EngineSettings;
use crate::domain::entities::facets::{
    FacetCount, FacetDocument, FacetField, OptionsBucket, OptionsRangeCount,
};
use crate::domain::entities::genre::Genre;
use crate::domain::entities::predicate::{CompiledFilter, Predicate};
use crate::domain::errors::facet_error::FacetError;
use crate::domain::ports::secondary::repositories::GameQueryRepository;
use crate::domain::services::genre_inferencer::{GenreInferencer, count_genres};
use crate::domain::services::statistics_calculator::StatisticsCalculator;
use crate::domain::services::year_extractor::YearExtractor;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, warn};

/// What the facet samples are restricted to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetScope {
    /// Store predicates; only the free-text search is carried over.
    pub filter: CompiledFilter,
    /// Applied to sampled rows by title inference, never in the store.
    pub genre: Option<Genre>,
}

impl FacetScope {
    #[must_use]
    pub fn new(filter: &CompiledFilter, genre: Option<Genre>) -> Self {
        Self {
            filter: filter.search_scope(),
            genre,
        }
    }
}

/// Computes every facet with bounded, independent store queries.
///
/// Counting happens here rather than in the store because the store exposes
/// no grouping. Each facet may fail on its own and then comes back empty.
pub struct FacetAggregator {
    query_repo: Arc<dyn GameQueryRepository>,
    inferencer: Arc<dyn GenreInferencer>,
    statistics: Arc<StatisticsCalculator>,
    settings: EngineSettings,
}

impl FacetAggregator {
    #[must_use]
    pub fn new(
        query_repo: Arc<dyn GameQueryRepository>,
        inferencer: Arc<dyn GenreInferencer>,
        statistics: Arc<StatisticsCalculator>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            query_repo,
            inferencer,
            statistics,
            settings,
        }
    }

    /// Runs every facet query concurrently and assembles the document.
    pub async fn aggregate(self: Arc<Self>, scope: FacetScope) -> FacetDocument {
        let scope = Arc::new(scope);

        let field = |field: FacetField| {
            let aggregator = Arc::clone(&self);
            let scope = Arc::clone(&scope);
            best_effort(field.name(), move || aggregator.field_facet(field, &scope))
        };
        let genres = {
            let aggregator = Arc::clone(&self);
            let scope = Arc::clone(&scope);
            best_effort("genres", move || aggregator.genre_facet(&scope))
        };
        let release_years = {
            let aggregator = Arc::clone(&self);
            let scope = Arc::clone(&scope);
            best_effort("releaseYears", move || aggregator.year_facet(&scope))
        };
        let options_ranges = {
            let aggregator = Arc::clone(&self);
            let scope = Arc::clone(&scope);
            best_effort("optionsRanges", move || aggregator.options_range_facet(&scope))
        };
        let stats = {
            let statistics = Arc::clone(&self.statistics);
            best_effort("stats", move || statistics.catalog_wide())
        };

        let (developers, engines, publishers, genres, release_years, options_ranges, stats) = tokio::join!(
            field(FacetField::Developer),
            field(FacetField::Engine),
            field(FacetField::Publisher),
            genres,
            release_years,
            options_ranges,
            stats,
        );

        FacetDocument {
            developers,
            engines,
            publishers,
            genres,
            options_ranges,
            release_years,
            stats,
        }
    }

    /// Top values of one text column by occurrence.
    ///
    /// # Errors
    ///
    /// Returns a [`FacetError`] if the sample query fails.
    pub fn field_facet(
        &self,
        field: FacetField,
        scope: &FacetScope,
    ) -> Result<Vec<FacetCount>, FacetError> {
        let rows = self
            .query_repo
            .sample_field(field, &scope.filter, self.settings.facet_sample_window)
            .map_err(FacetError::query(field.name()))?;
        debug!(facet = field.name(), sampled = rows.len(), "sampled facet values");

        let values = rows
            .into_iter()
            .filter(|row| self.in_genre(scope.genre, &row.title))
            .map(|row| row.value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(top_values(values, self.settings.facet_top_n))
    }

    /// Inferred genres over the sampled titles.
    ///
    /// The selected genre does not narrow this facet, so the other genres
    /// stay visible as alternatives.
    ///
    /// # Errors
    ///
    /// Returns a [`FacetError`] if the sample query fails.
    pub fn genre_facet(&self, scope: &FacetScope) -> Result<Vec<FacetCount>, FacetError> {
        let titles = self
            .query_repo
            .sample_titles(&scope.filter, self.settings.facet_sample_window)
            .map_err(FacetError::query("genres"))?;
        Ok(count_genres(self.inferencer.as_ref(), &titles))
    }

    /// Release years, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`FacetError`] if the sample query fails.
    pub fn year_facet(&self, scope: &FacetScope) -> Result<Vec<FacetCount>, FacetError> {
        let rows = self
            .query_repo
            .sample_release_dates(&scope.filter, self.settings.facet_sample_window)
            .map_err(FacetError::query("releaseYears"))?;

        let years = YearExtractor::new(self.settings.current_year());
        let counts = count_occurrences(
            rows.into_iter()
                .filter(|row| self.in_genre(scope.genre, &row.title))
                .filter_map(|row| years.extract(row.value.as_deref())),
        );

        let mut by_year: Vec<(i32, u64)> = counts.into_iter().collect();
        by_year.sort_by(|(a, _), (b, _)| b.cmp(a));
        by_year.truncate(self.settings.year_facet_cap);

        Ok(by_year
            .into_iter()
            .map(|(year, count)| FacetCount::new(year.to_string(), count))
            .collect())
    }

    /// Live counts for the fixed options-count buckets.
    ///
    /// # Errors
    ///
    /// Returns a [`FacetError`] if any bucket count fails.
    pub fn options_range_facet(
        &self,
        scope: &FacetScope,
    ) -> Result<Vec<OptionsRangeCount>, FacetError> {
        OptionsBucket::ALL
            .into_iter()
            .map(|bucket| {
                let filter = scope.filter.with(Predicate::OptionsCount {
                    predicate: bucket.predicate(),
                });
                self.query_repo
                    .count_games(&filter)
                    .map(|count| OptionsRangeCount::new(bucket, count))
                    .map_err(FacetError::query("optionsRanges"))
            })
            .collect()
    }

    fn in_genre(&self, genre: Option<Genre>, title: &str) -> bool {
        genre.is_none_or(|genre| self.inferencer.infer_genres(title).contains(&genre))
    }
}

/// Runs a facet computation on the blocking pool, degrading any failure to
/// the empty value.
pub(crate) async fn best_effort<T, F>(facet: &'static str, compute: F) -> T
where
    T: Default + Send + 'static,
    F: FnOnce() -> Result<T, FacetError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(compute)
        .await
        .unwrap_or_else(|source| Err(FacetError::Task { facet, source }));

    result.unwrap_or_else(|error| {
        warn!(facet = error.facet(), %error, "facet degraded to empty");
        T::default()
    })
}

fn count_occurrences<K: Eq + Hash>(values: impl Iterator<Item = K>) -> HashMap<K, u64> {
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
}

/// The `limit` most frequent values, ties broken alphabetically.
#[must_use]
pub fn top_values(values: impl Iterator<Item = String>, limit: usize) -> Vec<FacetCount> {
    let mut counted: Vec<(String, u64)> = count_occurrences(values).into_iter().collect();
    counted.sort_by(|(a_value, a_count), (b_value, b_count)| {
        b_count.cmp(a_count).then_with(|| a_value.cmp(b_value))
    });
    counted.truncate(limit);
    counted
        .into_iter()
        .map(|(value, count)| FacetCount::new(value, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn top_values_orders_by_count_then_value() {
        let top = top_values(
            strings(&["Valve", "Bethesda", "Valve", "id Software", "Bethesda", "Valve"]),
            10,
        );
        assert_eq!(
            top,
            vec![
                FacetCount::new("Valve", 3),
                FacetCount::new("Bethesda", 2),
                FacetCount::new("id Software", 1),
            ]
        );
    }

    #[test]
    fn top_values_is_capped() {
        let top = top_values(strings(&["a", "b", "c", "a"]), 2);
        assert_eq!(top, vec![FacetCount::new("a", 2), FacetCount::new("b", 1)]);
    }

    #[test]
    fn scope_keeps_only_search() {
        let filter = CompiledFilter::new(vec![
            Predicate::Search {
                term: "doom".to_string(),
            },
            Predicate::MinOptions { count: 3 },
        ]);
        let scope = FacetScope::new(&filter, Some(Genre::Shooter));
        assert_eq!(scope.filter.predicates().len(), 1);
        assert_eq!(scope.genre, Some(Genre::Shooter));
    }

    #[tokio::test]
    async fn failed_facets_degrade_to_default() {
        let facet: Vec<FacetCount> = best_effort("developers", || {
            Err(FacetError::Query {
                facet: "developers",
                source: crate::domain::errors::repository_error::RepositoryError::Migration(
                    "offline".to_string(),
                ),
            })
        })
        .await;
        assert!(facet.is_empty());
    }
}
