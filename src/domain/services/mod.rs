pub mod catalog_service;
pub mod facet_aggregator;
pub mod filter_compiler;
pub mod genre_inferencer;
pub mod import_service;
pub mod result_composer;
pub mod sort_resolver;
pub mod statistics_calculator;
pub mod strategy_resolver;
pub mod year_extractor;
