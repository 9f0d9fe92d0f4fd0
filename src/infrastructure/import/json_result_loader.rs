use crate::domain::entities::game::{NewGame, NewLaunchOption, ScrapedGame};
use crate::domain::errors::import_error::ImportError;
use crate::domain::ports::secondary::scrape_result_loader::ScrapeResultLoader;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Reads scraper output: a single game object, an array of games, or a
/// report object carrying a `games` array.
pub struct JsonResultLoader;

#[derive(Deserialize)]
#[serde(untagged)]
enum ResultFile {
    Report { games: Vec<GameRecord> },
    Many(Vec<GameRecord>),
    One(GameRecord),
}

#[derive(Deserialize)]
struct GameRecord {
    #[serde(alias = "appid")]
    app_id: i64,
    #[serde(alias = "name")]
    title: String,
    #[serde(default)]
    developer: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    engine: String,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    options: Vec<OptionRecord>,
}

#[derive(Deserialize)]
struct OptionRecord {
    command: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    verified: bool,
}

impl From<GameRecord> for ScrapedGame {
    fn from(record: GameRecord) -> Self {
        Self {
            game: NewGame {
                app_id: record.app_id,
                title: record.title.trim().to_string(),
                developer: record.developer.trim().to_string(),
                publisher: record.publisher.trim().to_string(),
                engine: record.engine.trim().to_string(),
                platform: record.platform.filter(|platform| !platform.trim().is_empty()),
                release_date: record.release_date.filter(|date| !date.trim().is_empty()),
            },
            options: record
                .options
                .into_iter()
                .map(|option| NewLaunchOption {
                    command: option.command.trim().to_string(),
                    description: option.description,
                    source: option.source,
                    verified: option.verified,
                })
                .collect(),
        }
    }
}

impl JsonResultLoader {
    /// Parses scraper output already read into memory.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the content matches none of the
    /// accepted layouts.
    pub fn parse(content: &str) -> Result<Vec<ScrapedGame>, serde_json::Error> {
        let records = match serde_json::from_str::<ResultFile>(content)? {
            ResultFile::Report { games } | ResultFile::Many(games) => games,
            ResultFile::One(game) => vec![game],
        };
        Ok(records.into_iter().map(ScrapedGame::from).collect())
    }
}

impl ScrapeResultLoader for JsonResultLoader {
    fn load(&self, path: &Path) -> Result<Vec<ScrapedGame>, ImportError> {
        let content = fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ImportError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_a_single_game_file() {
        let games = JsonResultLoader::parse(
            r#"{
                "app_id": 570,
                "title": "Dota 2",
                "options": [
                    {"command": "-novid", "description": "Skip intro", "source": "PCGamingWiki"},
                    {"command": " -high ", "source": "Steam Community", "verified": true}
                ]
            }"#,
        )
        .expect("valid game file");

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].game.app_id, 570);
        assert_eq!(games[0].options.len(), 2);
        assert_eq!(games[0].options[1].command, "-high");
        assert!(games[0].options[1].verified);
    }

    #[test]
    fn accepts_scraper_field_aliases_and_reports() {
        let games = JsonResultLoader::parse(
            r#"{"games": [
                {"appid": 10, "name": "Counter-Strike", "developer": "Valve", "release_date": "1 Nov, 2000", "engine": "GoldSrc"},
                {"appid": 20, "name": "Team Fortress Classic", "release_date": ""}
            ]}"#,
        )
        .expect("valid report");

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game.title, "Counter-Strike");
        assert_eq!(games[0].game.release_date.as_deref(), Some("1 Nov, 2000"));
        assert_eq!(games[1].game.release_date, None);
        assert!(games[1].options.is_empty());
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let missing = JsonResultLoader.load(Path::new("/nonexistent/game_1.json"));
        assert!(matches!(missing, Err(ImportError::Io { .. })));

        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{{\"title\": \"no id\"}}").expect("write temp file");
        let malformed = JsonResultLoader.load(file.path());
        assert!(matches!(malformed, Err(ImportError::Parse { .. })));
    }
}
