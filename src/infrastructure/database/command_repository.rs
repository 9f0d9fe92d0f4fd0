use crate::domain::entities::game::{NewGame, NewLaunchOption};
use crate::domain::errors::repository_error::RepositoryError;
use crate::domain::ports::secondary::repositories::GameCommandRepository;
use crate::infrastructure::database::entities::{
    GameLaunchOptionDto, NewGameDto, NewLaunchOptionDto,
};
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::schema::{game_launch_options, games, launch_options};
use diesel::dsl::update;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel::{QueryDsl, RunQueryDsl, SqliteConnection};
use std::sync::Arc;
use uuid::Uuid;

/// Repository for write operations on games and launch options.
pub struct CommandRepository {
    pool: Arc<SqliteRepositoryPool>,
}

impl CommandRepository {
    #[must_use]
    /// Creates a new [`CommandRepository`] with the given pool.
    pub const fn new(pool: Arc<SqliteRepositoryPool>) -> Self {
        Self { pool }
    }

    fn save_game_row(game: NewGame, conn: &mut SqliteConnection) -> Result<i64, RepositoryError> {
        let dto = NewGameDto::from(game);
        let app_id = diesel::insert_into(games::table)
            .values(&dto)
            .on_conflict(games::app_id)
            .do_update()
            .set(&dto)
            .returning(games::app_id)
            .get_result(conn)?;
        Ok(app_id)
    }

    /// Options are shared between games and keyed by their command line.
    fn save_option(
        option: NewLaunchOption,
        conn: &mut SqliteConnection,
    ) -> Result<String, RepositoryError> {
        let option_id = diesel::insert_into(launch_options::table)
            .values(NewLaunchOptionDto {
                id: Uuid::now_v7().to_string(),
                command: option.command,
                description: option.description,
                source: option.source,
                verified: option.verified,
            })
            .on_conflict(launch_options::command)
            .do_update()
            .set((
                launch_options::description.eq(excluded(launch_options::description)),
                launch_options::source.eq(excluded(launch_options::source)),
                launch_options::verified.eq(excluded(launch_options::verified)),
            ))
            .returning(launch_options::id)
            .get_result(conn)?;
        Ok(option_id)
    }

    fn link_options(
        app_id: i64,
        option_ids: Vec<String>,
        conn: &mut SqliteConnection,
    ) -> Result<(), RepositoryError> {
        if option_ids.is_empty() {
            return Ok(());
        }
        let links: Vec<GameLaunchOptionDto> = option_ids
            .into_iter()
            .map(|launch_option_id| GameLaunchOptionDto {
                game_app_id: app_id,
                launch_option_id,
            })
            .collect();

        diesel::insert_or_ignore_into(game_launch_options::table)
            .values(&links)
            .execute(conn)?;
        Ok(())
    }

    fn refresh_options_count(
        app_id: i64,
        conn: &mut SqliteConnection,
    ) -> Result<i64, RepositoryError> {
        let linked: i64 = game_launch_options::table
            .filter(game_launch_options::game_app_id.eq(app_id))
            .count()
            .get_result(conn)?;

        update(games::table.find(app_id))
            .set(games::total_options_count.eq(i32::try_from(linked).unwrap_or(i32::MAX)))
            .execute(conn)?;
        Ok(linked)
    }
}

impl GameCommandRepository for CommandRepository {
    /// Saves a game, upserts its options and links them, then recomputes
    /// the game's option count, all in one transaction.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if:
    /// - A [`ConnectionPool`](RepositoryError::ConnectionPool) error occurs while acquiring a connection.
    /// - A [`Database`](RepositoryError::Database) error occurs during insert or update operations.
    fn save_game(
        &self,
        game: NewGame,
        options: Vec<NewLaunchOption>,
    ) -> Result<usize, RepositoryError> {
        self.pool.execute_in_transaction(move |conn| {
            let app_id = Self::save_game_row(game, conn)?;

            let option_ids = options
                .into_iter()
                .filter(|option| !option.command.trim().is_empty())
                .map(|option| Self::save_option(option, conn))
                .collect::<Result<Vec<_>, _>>()?;
            Self::link_options(app_id, option_ids, conn)?;

            let linked = Self::refresh_options_count(app_id, conn)?;
            Ok(usize::try_from(linked).unwrap_or(0))
        })
    }
}
