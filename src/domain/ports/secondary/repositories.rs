use crate::domain::entities::facets::FacetField;
use crate::domain::entities::game::{Game, LaunchOption, NewGame, NewLaunchOption};
use crate::domain::entities::predicate::CompiledFilter;
use crate::domain::entities::sort::SortSpec;
use crate::domain::errors::repository_error::RepositoryError;

/// A sampled column value together with the title of the row it came from,
/// so callers can narrow samples by inferred genre.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitledValue<T> {
    pub title: String,
    pub value: T,
}

/// Read side of the catalog store.
///
/// This is the whole contract the query engine relies on: conjunctive
/// predicates, a sort column, a row range and an exact count.
pub trait GameQueryRepository: Send + Sync {
    fn count_games(&self, filter: &CompiledFilter) -> Result<u64, RepositoryError>;

    fn find_games_paginated(
        &self,
        filter: &CompiledFilter,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Game>, RepositoryError>;

    /// Non-empty values of `field` over at most `window` matching rows.
    fn sample_field(
        &self,
        field: FacetField,
        filter: &CompiledFilter,
        window: u32,
    ) -> Result<Vec<TitledValue<String>>, RepositoryError>;

    fn sample_titles(
        &self,
        filter: &CompiledFilter,
        window: u32,
    ) -> Result<Vec<String>, RepositoryError>;

    /// Raw release date values, absent ones included.
    fn sample_release_dates(
        &self,
        filter: &CompiledFilter,
        window: u32,
    ) -> Result<Vec<TitledValue<Option<String>>>, RepositoryError>;

    fn find_game(&self, app_id: i64) -> Result<Option<Game>, RepositoryError>;

    fn find_launch_options(&self, app_id: i64) -> Result<Vec<LaunchOption>, RepositoryError>;
}

/// Write side, used by the ingestion boundary only.
pub trait GameCommandRepository: Send + Sync {
    /// Upserts a game and its options and refreshes its option count.
    ///
    /// Returns the number of options now linked to the game.
    fn save_game(
        &self,
        game: NewGame,
        options: Vec<NewLaunchOption>,
    ) -> Result<usize, RepositoryError>;
}
