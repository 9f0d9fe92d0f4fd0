use crate::domain::entities::catalog_page::{AppliedFilters, CatalogMeta, CatalogPage};
use crate::domain::entities::facets::FacetDocument;
use crate::domain::entities::filter_criteria::FilterCriteria;
use crate::domain::entities::game::Game;
use crate::domain::entities::genre::Genre;
use crate::domain::entities::statistics::Statistics;

/// Assembles the response envelope from the results of one request.
///
/// `stats` are the request-scoped statistics; the catalog-wide figures
/// travel inside `facets`.
#[must_use]
pub fn compose(
    criteria: &FilterCriteria,
    games: Vec<Game>,
    total: u64,
    facets: FacetDocument,
    stats: Statistics,
) -> CatalogPage {
    let total_pages = criteria.page.total_pages(total);
    let current_page = criteria.page.page();

    // Zero-option games in scope that the options constraint filters out.
    let hidden_without_options = if criteria.excludes_games_without_options() {
        stats.without_options
    } else {
        0
    };

    CatalogPage {
        games,
        total,
        total_pages,
        current_page,
        has_next_page: u64::from(current_page) < total_pages,
        has_prev_page: current_page > 1,
        facets,
        stats,
        meta: CatalogMeta {
            strategy: criteria.strategy,
            applied_filters: applied_filters(criteria),
            hidden_without_options,
        },
    }
}

fn applied_filters(criteria: &FilterCriteria) -> AppliedFilters {
    AppliedFilters {
        search: criteria.search.clone(),
        developer: criteria.developer.clone(),
        engine: criteria.engine.clone(),
        platform: criteria.platform.clone(),
        genre: criteria.genre.map(Genre::label).map(str::to_string),
        year: criteria.year,
        options_predicate: criteria.options_predicate,
        options_selector: criteria.options_selector,
        min_options_count: criteria.min_options_count,
        max_options_count: criteria.max_options_count,
        sort: criteria.sort,
        page: criteria.page.page(),
        limit: criteria.page.page_size(),
        corrections: criteria.corrections.clone(),
    }
}
