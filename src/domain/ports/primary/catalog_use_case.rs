use crate::domain::entities::catalog_page::CatalogPage;
use crate::domain::entities::facets::FacetDocument;
use crate::domain::entities::game::GameDetails;
use crate::domain::entities::query_params::CatalogQuery;
use crate::domain::entities::statistics::Statistics;
use crate::domain::errors::domain_error::DomainError;

#[async_trait::async_trait]
pub trait CatalogUseCase: Send + Sync {
    /// Filters, sorts and paginates the catalog, with facets and statistics.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`StoreQuery`](DomainError::StoreQuery) error occurs while fetching the primary rows.
    async fn browse(&self, query: CatalogQuery) -> Result<CatalogPage, DomainError>;

    /// Computes only the facets for the given request.
    ///
    /// Individual facets degrade to empty values instead of failing.
    async fn facets(&self, query: CatalogQuery) -> FacetDocument;

    /// Computes only the request-scoped statistics, zeroed if the store fails.
    async fn statistics(&self, query: CatalogQuery) -> Statistics;

    /// Loads one game with its launch options, best rated first.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if:
    /// - A [`NotFound`](DomainError::NotFound) error occurs when no game has this id.
    /// - A [`StoreQuery`](DomainError::StoreQuery) error occurs during query execution.
    async fn game_details(&self, app_id: i64) -> Result<GameDetails, DomainError>;
}
