use crate::domain::entities::facets::FacetField;
use crate::domain::entities::game::{Game, LaunchOption};
use crate::domain::entities::predicate::CompiledFilter;
use crate::domain::entities::sort::SortSpec;
use crate::domain::errors::repository_error::RepositoryError;
use crate::domain::ports::secondary::repositories::{GameQueryRepository, TitledValue};
use crate::infrastructure::database::conversion::{ToI64, ToU64};
use crate::infrastructure::database::entities::{GameDto, LaunchOptionDto};
use crate::infrastructure::database::filters::{filtered_games, sorted};
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::schema::{game_launch_options, games, launch_options};
use diesel::prelude::*;
use diesel::{OptionalExtension, QueryDsl, RunQueryDsl};
use std::sync::Arc;

/// Repository for read-only catalog queries.
pub struct QueryRepository {
    pool: Arc<SqliteRepositoryPool>,
}

impl QueryRepository {
    /// Creates a new [`QueryRepository`] with the given pool.
    #[must_use]
    pub const fn new(pool: Arc<SqliteRepositoryPool>) -> Self {
        Self { pool }
    }
}

impl GameQueryRepository for QueryRepository {
    /// Counts the games matching every predicate of `filter`.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if:
    /// - A [`ConnectionPool`](RepositoryError::ConnectionPool) error occurs while acquiring a connection.
    /// - A [`Database`](RepositoryError::Database) error occurs during query execution.
    fn count_games(&self, filter: &CompiledFilter) -> Result<u64, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let count: i64 = filtered_games(filter, conn)?.count().get_result(conn)?;
            Ok(count.to_u64_or_zero())
        })
    }

    /// Loads one page of matching games in the requested order.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if:
    /// - A [`ConnectionPool`](RepositoryError::ConnectionPool) error occurs while acquiring a connection.
    /// - A [`Database`](RepositoryError::Database) error occurs during query execution.
    fn find_games_paginated(
        &self,
        filter: &CompiledFilter,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Game>, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let entities = sorted(filtered_games(filter, conn)?, sort)
                .select(GameDto::as_select())
                .limit(limit.to_i64_or_zero())
                .offset(offset.to_i64_or_zero())
                .load::<GameDto>(conn)?;

            Ok(entities.into_iter().map(Game::from).collect())
        })
    }

    fn sample_field(
        &self,
        field: FacetField,
        filter: &CompiledFilter,
        window: u32,
    ) -> Result<Vec<TitledValue<String>>, RepositoryError> {
        macro_rules! sample {
            ($query:expr, $column:expr, $conn:expr) => {
                $query
                    .filter($column.ne(""))
                    .select((games::title, $column))
                    .order_by(games::app_id.asc())
                    .limit(window.to_i64_or_zero())
                    .load::<(String, String)>($conn)
            };
        }

        self.pool.execute_db_operation(|conn| {
            let query = filtered_games(filter, conn)?;
            let rows = match field {
                FacetField::Developer => sample!(query, games::developer, conn)?,
                FacetField::Engine => sample!(query, games::engine, conn)?,
                FacetField::Publisher => sample!(query, games::publisher, conn)?,
            };

            Ok(rows
                .into_iter()
                .map(|(title, value)| TitledValue { title, value })
                .collect())
        })
    }

    fn sample_titles(
        &self,
        filter: &CompiledFilter,
        window: u32,
    ) -> Result<Vec<String>, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let titles = filtered_games(filter, conn)?
                .select(games::title)
                .order_by(games::app_id.asc())
                .limit(window.to_i64_or_zero())
                .load::<String>(conn)?;
            Ok(titles)
        })
    }

    fn sample_release_dates(
        &self,
        filter: &CompiledFilter,
        window: u32,
    ) -> Result<Vec<TitledValue<Option<String>>>, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let rows = filtered_games(filter, conn)?
                .select((games::title, games::release_date))
                .order_by(games::app_id.asc())
                .limit(window.to_i64_or_zero())
                .load::<(String, Option<String>)>(conn)?;

            Ok(rows
                .into_iter()
                .map(|(title, value)| TitledValue { title, value })
                .collect())
        })
    }

    fn find_game(&self, app_id: i64) -> Result<Option<Game>, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let game = games::table
                .find(app_id)
                .select(GameDto::as_select())
                .first::<GameDto>(conn)
                .optional()?;
            Ok(game.map(Game::from))
        })
    }

    fn find_launch_options(&self, app_id: i64) -> Result<Vec<LaunchOption>, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let options = game_launch_options::table
                .inner_join(launch_options::table)
                .filter(game_launch_options::game_app_id.eq(app_id))
                .select(LaunchOptionDto::as_select())
                .order_by(launch_options::command.asc())
                .load::<LaunchOptionDto>(conn)?;
            Ok(options.into_iter().map(LaunchOption::from).collect())
        })
    }
}
