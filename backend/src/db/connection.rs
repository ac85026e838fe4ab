use crate::config::DatabaseConfig;
use crate::db::schema::initialize_database;
use crate::error::CatalogResult;
use log::info;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Creates the connection pool for the configured database file.
///
/// Every pooled connection enables foreign keys, WAL journaling and a busy
/// timeout so concurrent writers wait instead of failing immediately.
pub fn create_connection_pool(config: &DatabaseConfig) -> CatalogResult<ConnectionPool> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let manager = SqliteConnectionManager::file(&config.path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
    });

    let pool = Pool::builder()
        .max_size(config.max_connections.max(1))
        .build(manager)?;
    Ok(pool)
}

/// Creates the pool and makes sure the schema is in place.
pub fn open_database(config: &DatabaseConfig) -> CatalogResult<ConnectionPool> {
    let pool = create_connection_pool(config)?;
    let conn = pool.get()?;
    initialize_database(&conn)?;
    info!("Database ready at {}", config.path.display());
    Ok(pool)
}
