//! Database access: the SQLite connection pool and schema bootstrap.

pub mod connection;
pub mod schema;

pub use connection::{open_database, ConnectionPool};

use crate::error::CatalogResult;
use actix_web::web;

/// Runs blocking database or filesystem work on actix's blocking thread pool.
pub async fn run_blocking<F, T>(work: F) -> CatalogResult<T>
where
    F: FnOnce() -> CatalogResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(work).await?
}
