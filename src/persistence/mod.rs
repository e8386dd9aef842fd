//! Shared `PostgreSQL` plumbing for repository adapters.
//!
//! Diesel is synchronous, so adapters offload every query to the blocking
//! thread pool via [`tokio::task::spawn_blocking`] and borrow connections
//! from a shared r2d2 pool.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

use crate::config::{ConfigError, TaskdeskSettings};
use thiserror::Error;

/// `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type for adapter use.
pub(crate) type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Errors raised while building the connection pool.
#[derive(Debug, Error)]
pub enum PoolSetupError {
    /// Settings did not name a database.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The pool could not establish its initial connections.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Builds a connection pool from the configured settings.
///
/// # Errors
///
/// Returns [`PoolSetupError::Config`] when no database URL is configured and
/// [`PoolSetupError::Pool`] when the pool cannot connect.
pub fn build_pool(settings: &TaskdeskSettings) -> Result<PgPool, PoolSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(settings.database_url()?);
    let pool = Pool::builder()
        .max_size(settings.pool_max_size)
        .build(manager)?;
    Ok(pool)
}

/// Runs a blocking task and maps join errors into the caller's error type.
pub(crate) async fn run_blocking_with<F, T, E, M>(f: F, map_err: M) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    M: FnOnce(tokio::task::JoinError) -> E,
{
    tokio::task::spawn_blocking(f).await.map_err(map_err)?
}

/// Obtains a connection from the pool with a caller-provided error mapper.
pub(crate) fn get_conn_with<E, M>(pool: &PgPool, map_err: M) -> Result<PooledConn, E>
where
    M: FnOnce(PoolError) -> E,
{
    pool.get().map_err(map_err)
}
