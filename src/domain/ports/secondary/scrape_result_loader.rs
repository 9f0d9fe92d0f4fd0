use crate::domain::entities::game::ScrapedGame;
use crate::domain::errors::import_error::ImportError;
use std::path::Path;

pub trait ScrapeResultLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Vec<ScrapedGame>, ImportError>;
}
