use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Extracts the database name from a `key=value` connection string such as
/// `user=app password=secret dbname=exercises.db sslmode=disable`.
///
/// SQLite has no notion of users or TLS, so every key other than `dbname`
/// is ignored. A string without any `=` is taken as a bare path.
pub fn database_name(connection_string: &str) -> &str {
    if !connection_string.contains('=') {
        return connection_string.trim();
    }

    connection_string
        .split_whitespace()
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "dbname")
        .map(|(_, value)| value)
        .unwrap_or(":memory:")
}

pub fn create_pool(connection_string: &str) -> Result<DbPool, r2d2::Error> {
    let path = database_name(connection_string);

    // Every in-memory connection is its own database, so the pool must not grow.
    if path.is_empty() || path == ":memory:" {
        return create_memory_pool();
    }

    let manager = SqliteConnectionManager::file(Path::new(path));
    Pool::builder().max_size(5).build(manager)
}

pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::memory();
    Pool::builder().max_size(1).build(manager)
}
