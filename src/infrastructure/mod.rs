pub mod database;
pub mod import;
