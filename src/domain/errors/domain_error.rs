use crate::domain::errors::import_error::ImportError;
use crate::domain::errors::repository_error::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Failed to fetch catalog: {0}")]
    StoreQuery(#[from] RepositoryError),
    #[error("Game {0} not found")]
    NotFound(i64),
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),
    #[error("Cannot render output: {0}")]
    Output(#[from] serde_json::Error),
}
