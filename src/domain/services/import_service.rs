use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::import_use_case::{ImportSummary, ImportUseCase};
use crate::domain::ports::secondary::repositories::GameCommandRepository;
use crate::domain::ports::secondary::scrape_result_loader::ScrapeResultLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ImportService {
    command_repo: Arc<dyn GameCommandRepository>,
    loader: Arc<dyn ScrapeResultLoader>,
}

impl ImportService {
    pub fn new(
        command_repo: Arc<dyn GameCommandRepository>,
        loader: Arc<dyn ScrapeResultLoader>,
    ) -> Self {
        Self {
            command_repo,
            loader,
        }
    }
}

impl ImportUseCase for ImportService {
    fn import_files(&self, paths: &[PathBuf]) -> Result<ImportSummary, DomainError> {
        let mut summary = ImportSummary::default();

        for path in paths {
            let games = self.loader.load(path)?;
            info!(path = %path.display(), games = games.len(), "loaded scrape results");

            for scraped in games {
                let app_id = scraped.game.app_id;
                let linked = self.command_repo.save_game(scraped.game, scraped.options)?;
                debug!(app_id, linked, "saved game");

                summary.games_processed += 1;
                summary.total_options_linked += linked;
                if linked > 0 {
                    summary.games_with_options += 1;
                }
            }
        }

        Ok(summary)
    }
}
