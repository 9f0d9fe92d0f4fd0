pub mod domain_error;
pub mod facet_error;
pub mod import_error;
pub mod repository_error;
pub mod validation_error;
