pub mod repositories;
pub mod scrape_result_loader;
