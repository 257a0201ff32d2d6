//! # Academy DB
//!
//! Document store access for the Academy API.
//!
//! Records are kept in PostgreSQL as JSONB documents. Each table promotes the
//! record id and its unique keys to real columns so uniqueness is enforced by
//! the store rather than by the check-then-insert sequence in the handlers.
//!
//! - [`init_db_pool`] / [`run_migrations`]: connection lifecycle
//! - [`document`]: JSONB document (de)hydration helpers
//! - [`RepositoryError`], [`InsertOutcome`], [`InsertResult`], [`DeleteResult`]:
//!   the result types every repository speaks
//!
//! # Example
//!
//! ```ignore
//! use academy_config::DatabaseConfig;
//! use academy_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! ```

pub mod document;
pub mod results;

pub use results::{DeleteResult, InsertOutcome, InsertResult, RepositoryError};
// Re-export PgPool for convenience
pub use sqlx::PgPool;

use academy_config::DatabaseConfig;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;

/// Creates the process-wide connection pool.
///
/// Call once at startup and hand the pool to the repositories through the
/// application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );
    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
