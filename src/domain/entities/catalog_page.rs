use crate::domain::entities::facets::FacetDocument;
use crate::domain::entities::game::Game;
use crate::domain::entities::sort::SortSpec;
use crate::domain::entities::statistics::Statistics;
use crate::domain::entities::strategy::{OptionsPredicate, OptionsSelector, Strategy};
use crate::domain::errors::validation_error::ValidationError;
use serde::Serialize;

/// The response envelope for one catalog listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub games: Vec<Game>,
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub facets: FacetDocument,
    pub stats: Statistics,
    pub meta: CatalogMeta,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    pub strategy: Strategy,
    pub applied_filters: AppliedFilters,
    /// Games in scope that the active strategy hides because they have no options.
    pub hidden_without_options: u64,
}

/// The concrete values that actually shaped the query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub options_predicate: OptionsPredicate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_selector: Option<OptionsSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_options_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_options_count: Option<u32>,
    pub sort: SortSpec,
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub corrections: Vec<ValidationError>,
}
