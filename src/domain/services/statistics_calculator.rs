use crate::domain::entities::predicate::{CompiledFilter, Predicate};
use crate::domain::entities::statistics::Statistics;
use crate::domain::entities::strategy::OptionsPredicate;
use crate::domain::errors::facet_error::FacetError;
use crate::domain::ports::secondary::repositories::GameQueryRepository;
use std::sync::Arc;

const FACET: &str = "stats";

pub struct StatisticsCalculator {
    query_repo: Arc<dyn GameQueryRepository>,
}

impl StatisticsCalculator {
    #[must_use]
    pub fn new(query_repo: Arc<dyn GameQueryRepository>) -> Self {
        Self { query_repo }
    }

    /// Counts games with and without options in the scope of `filter`.
    ///
    /// Options-count constraints are removed first, so the result also tells
    /// how many games the active strategy hides.
    ///
    /// # Errors
    ///
    /// Returns a [`FacetError`] if either count query fails.
    pub fn scoped(&self, filter: &CompiledFilter) -> Result<Statistics, FacetError> {
        let scope = filter.without_options_constraints();

        let total = self
            .query_repo
            .count_games(&scope)
            .map_err(FacetError::query(FACET))?;
        if total == 0 {
            return Ok(Statistics::default());
        }

        let with_options = self
            .query_repo
            .count_games(&scope.with(Predicate::OptionsCount {
                predicate: OptionsPredicate::has_options(),
            }))
            .map_err(FacetError::query(FACET))?;

        Ok(Statistics::from_counts(with_options, total))
    }

    /// Statistics over the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`FacetError`] if either count query fails.
    pub fn catalog_wide(&self) -> Result<Statistics, FacetError> {
        self.scoped(&CompiledFilter::default())
    }
}
