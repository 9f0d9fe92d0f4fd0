use crate::config::constants::MIGRATIONS;
use crate::domain::errors::repository_error::RepositoryError;
use crate::infrastructure::database::filters::register_functions;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel_migrations::MigrationHarness;
use std::sync::Arc;
use tracing::info;

type DieselPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DieselConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Applied to every pooled connection, since most PRAGMAs are per connection.
const CONNECTION_PRAGMAS: [&str; 5] = [
    "PRAGMA foreign_keys = ON;",
    "PRAGMA busy_timeout = 5000;",
    "PRAGMA synchronous = NORMAL;",
    "PRAGMA cache_size = -20000;", // ~20MB cache
    "PRAGMA temp_store = MEMORY;",
];

#[derive(Debug)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        for pragma in CONNECTION_PRAGMAS {
            diesel::sql_query(pragma)
                .execute(conn)
                .map_err(diesel::r2d2::Error::QueryError)?;
        }
        register_functions(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// `:memory:` and `file::memory:` URIs without `cache=shared` give each
/// connection a separate database.
fn is_private_memory_database(database_url: &str) -> bool {
    let url = database_url.trim();
    if url.is_empty() || url == ":memory:" {
        return true;
    }
    url.starts_with("file:")
        && (url.contains(":memory:") || url.contains("mode=memory"))
        && !url.contains("cache=shared")
}

/// Core database pool and infrastructure for the `SQLite` catalog store.
///
/// Handles connection pooling, per-connection PRAGMAs and migrations.
/// Facet queries run concurrently with the main listing query, so the
/// database is opened in WAL mode to let readers proceed in parallel.
pub struct SqliteRepositoryPool {
    pool: DieselPool,
}

impl SqliteRepositoryPool {
    /// Opens the pool and brings the schema up to date.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if:
    /// - A [`ConnectionPool`](RepositoryError::ConnectionPool) error occurs while opening the database.
    /// - A [`Database`](RepositoryError::Database) error occurs while switching the journal mode.
    /// - A [`Migration`](RepositoryError::Migration) error occurs while applying migrations.
    /// - The URL is a private in-memory database ([`UnsupportedUrl`](RepositoryError::UnsupportedUrl)):
    ///   every pooled connection would open its own empty database.
    pub fn new(database_url: &str) -> Result<Arc<Self>, RepositoryError> {
        if is_private_memory_database(database_url) {
            return Err(RepositoryError::UnsupportedUrl(database_url.to_string()));
        }
        let pool = Self::create_pool(database_url)?;
        {
            let mut conn = pool.get().map_err(RepositoryError::ConnectionPool)?;
            Self::enable_wal(&mut conn)?;
            Self::run_migrations(&mut conn)?;
        }
        info!(database_url, "catalog store ready");
        Ok(Arc::new(Self { pool }))
    }

    fn create_pool(database_url: &str) -> Result<DieselPool, RepositoryError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        Pool::builder()
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(manager)
            .map_err(RepositoryError::ConnectionPool)
    }

    fn enable_wal(conn: &mut SqliteConnection) -> Result<(), RepositoryError> {
        diesel::sql_query("PRAGMA journal_mode = WAL;")
            .execute(conn)
            .map_err(RepositoryError::Database)?;
        Ok(())
    }

    fn run_migrations(conn: &mut SqliteConnection) -> Result<(), RepositoryError> {
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| RepositoryError::Migration(err.to_string()))?;
        Ok(())
    }

    /// Gets a connection from the pool.
    pub(crate) fn get_connection(&self) -> Result<DieselConnection, RepositoryError> {
        self.pool.get().map_err(RepositoryError::ConnectionPool)
    }

    /// Executes a database operation with automatic connection management.
    pub(crate) fn execute_db_operation<F, R>(&self, operation: F) -> Result<R, RepositoryError>
    where
        F: FnOnce(&mut DieselConnection) -> Result<R, RepositoryError>,
    {
        let mut conn = self.get_connection()?;
        operation(&mut conn)
    }

    /// Executes a database operation within an immediate transaction.
    ///
    /// Note: The closure receives `&mut SqliteConnection` directly because
    /// `immediate_transaction` dereferences the pooled connection.
    pub(crate) fn execute_in_transaction<F, R>(&self, operation: F) -> Result<R, RepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<R, RepositoryError>,
    {
        let mut conn = self.get_connection()?;
        conn.immediate_transaction(|conn| operation(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_private_memory_databases() {
        for url in [":memory:", "", "file::memory:", "file:catalog?mode=memory"] {
            assert!(
                matches!(SqliteRepositoryPool::new(url), Err(RepositoryError::UnsupportedUrl(_))),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_file_and_shared_memory_databases() {
        assert!(!is_private_memory_database("catalog.db"));
        assert!(!is_private_memory_database("file:catalog?mode=memory&cache=shared"));
    }
}
