pub mod command_repository;
mod conversion;
pub mod entities;
mod filters;
pub mod pool;
pub mod query_repository;
pub mod schema;
