pub mod catalog_use_case;
pub mod import_use_case;
