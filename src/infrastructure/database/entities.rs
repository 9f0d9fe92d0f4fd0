use crate::infrastructure::database::schema::{game_launch_options, games, launch_options};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GameDto {
    pub app_id: i64,
    pub title: String,
    pub developer: String,
    pub publisher: String,
    pub engine: String,
    pub platform: String,
    pub release_date: Option<String>,
    pub total_options_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = launch_options)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LaunchOptionDto {
    pub id: String,
    pub command: String,
    pub description: String,
    pub source: String,
    pub verified: bool,
    pub upvotes: i32,
    pub downvotes: i32,
}

/// Game columns written on import. `total_options_count` is left out and
/// recomputed from the links afterwards.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = games)]
#[diesel(primary_key(app_id))]
#[diesel(treat_none_as_null = true)]
pub struct NewGameDto {
    pub app_id: i64,
    pub title: String,
    pub developer: String,
    pub publisher: String,
    pub engine: String,
    pub platform: String,
    pub release_date: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = launch_options)]
pub struct NewLaunchOptionDto {
    pub id: String,
    pub command: String,
    pub description: String,
    pub source: String,
    pub verified: bool,
}

#[derive(Insertable)]
#[diesel(table_name = game_launch_options)]
pub struct GameLaunchOptionDto {
    pub game_app_id: i64,
    pub launch_option_id: String,
}
