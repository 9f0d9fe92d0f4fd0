use crate::domain::errors::domain_error::DomainError;
use serde::Serialize;
use std::path::PathBuf;

/// Totals reported after loading scrape results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub games_processed: usize,
    pub games_with_options: usize,
    pub total_options_linked: usize,
}

pub trait ImportUseCase: Send + Sync {
    /// Loads every scrape result file and saves its games and options.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - An [`Import`](DomainError::Import) error occurs while reading or parsing a file.
    /// - A [`StoreQuery`](DomainError::StoreQuery) error occurs while saving.
    fn import_files(&self, paths: &[PathBuf]) -> Result<ImportSummary, DomainError>;
}
