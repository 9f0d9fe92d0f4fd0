pub mod catalog_page;
pub mod facets;
pub mod filter_criteria;
pub mod game;
pub mod genre;
pub mod pagination;
pub mod predicate;
pub mod query_params;
pub mod sort;
pub mod statistics;
pub mod strategy;
