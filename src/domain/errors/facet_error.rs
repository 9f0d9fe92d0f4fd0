use crate::domain::errors::repository_error::RepositoryError;
use tokio::task::JoinError;

/// A single facet or statistics sub-query failed. Never fatal for a request.
#[derive(Debug, thiserror::Error)]
pub enum FacetError {
    #[error("{facet} facet query failed: {source}")]
    Query {
        facet: &'static str,
        #[source]
        source: RepositoryError,
    },
    #[error("{facet} facet task failed: {source}")]
    Task {
        facet: &'static str,
        #[source]
        source: JoinError,
    },
}

impl FacetError {
    pub(crate) fn query(facet: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Query { facet, source }
    }

    #[must_use]
    pub const fn facet(&self) -> &'static str {
        match self {
            Self::Query { facet, .. } | Self::Task { facet, .. } => facet,
        }
    }
}
