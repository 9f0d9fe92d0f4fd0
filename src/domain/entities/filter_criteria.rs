use crate::domain::entities::genre::Genre;
use crate::domain::entities::pagination::PageRequest;
use crate::domain::entities::sort::SortSpec;
use crate::domain::entities::strategy::{OptionsPredicate, OptionsSelector, Strategy};
use crate::domain::errors::validation_error::ValidationError;

/// The normalized, immutable form of one catalog request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub developer: Option<String>,
    pub engine: Option<String>,
    pub platform: Option<String>,
    /// Narrows facets only; there is no genre column to filter rows by.
    pub genre: Option<Genre>,
    pub year: Option<i32>,
    pub min_options_count: Option<u32>,
    pub max_options_count: Option<u32>,
    pub strategy: Strategy,
    pub options_predicate: OptionsPredicate,
    pub options_selector: Option<OptionsSelector>,
    pub sort: SortSpec,
    pub page: PageRequest,
    /// Inputs that were malformed and replaced by safe defaults.
    pub corrections: Vec<ValidationError>,
}

impl FilterCriteria {
    /// Whether games with no launch options are filtered out, by the
    /// resolved predicate or by an explicit lower bound.
    #[must_use]
    pub fn excludes_games_without_options(&self) -> bool {
        !self.options_predicate.admits(0) || self.min_options_count.is_some_and(|min| min > 0)
    }
}
