use serde::Serialize;

/// A catalog entry as stored by the ingestion side.
///
/// `total_options_count` is denormalized and maintained on write; the query
/// engine only ever reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub app_id: i64,
    pub title: String,
    pub developer: String,
    pub publisher: String,
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub total_options_count: u32,
}

impl Game {
    #[must_use]
    pub const fn has_options(&self) -> bool {
        self.total_options_count > 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchOption {
    pub id: String,
    pub command: String,
    pub description: String,
    pub source: String,
    pub verified: bool,
    pub upvotes: u32,
    pub downvotes: u32,
}

impl LaunchOption {
    /// Net community score.
    #[must_use]
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

/// A game together with every launch option linked to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    #[serde(flatten)]
    pub game: Game,
    pub launch_options: Vec<LaunchOption>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewGame {
    pub app_id: i64,
    pub title: String,
    pub developer: String,
    pub publisher: String,
    pub engine: String,
    pub platform: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewLaunchOption {
    pub command: String,
    pub description: String,
    pub source: String,
    pub verified: bool,
}

/// One game and its options as produced by the scraper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapedGame {
    pub game: NewGame,
    pub options: Vec<NewLaunchOption>,
}
