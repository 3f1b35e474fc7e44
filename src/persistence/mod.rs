//! Persistence layer: read access to stored locations.
//!
//! [`LocationStore`] is the seam between the service layer and storage.
//! [`postgres::PostgresStore`] serves production traffic through
//! `sqlx::PgPool`; [`memory::InMemoryStore`] serves a fixed set of rows
//! when persistence is disabled and backs the test suites.

pub mod memory;
pub mod models;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;

use crate::config::GalleryConfig;
use crate::domain::{Location, LocationId, LocationQuery};
use crate::error::GalleryError;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

/// Read-only access to stored locations.
#[async_trait]
pub trait LocationStore: Send + Sync + std::fmt::Debug {
    /// Returns the rows matching `query`, sorted and windowed.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Persistence`] on storage failure.
    async fn find(&self, query: &LocationQuery) -> Result<Vec<Location>, GalleryError>;

    /// Counts the rows matching `query`'s filters, ignoring its window.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Persistence`] on storage failure.
    async fn count(&self, query: &LocationQuery) -> Result<usize, GalleryError>;

    /// Looks up one row by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Persistence`] on storage failure. A missing
    /// row is `Ok(None)`.
    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, GalleryError>;

    /// Checks that the store can serve queries.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Persistence`] when the backend is unreachable.
    async fn ping(&self) -> Result<(), GalleryError>;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Builds the store selected by `config`.
///
/// With persistence enabled this connects a bounded `PgPool` and applies
/// embedded migrations when configured to. Otherwise it loads the optional
/// seed file into an [`InMemoryStore`].
///
/// # Errors
///
/// Returns [`GalleryError::Persistence`] if the database is unreachable or
/// migrations fail, and [`GalleryError::Internal`] if the seed file cannot
/// be read.
pub async fn connect(config: &GalleryConfig) -> Result<Arc<dyn LocationStore>, GalleryError> {
    if !config.persistence_enabled {
        let store = match &config.seed_file {
            Some(path) => InMemoryStore::load_seed(path).await?,
            None => InMemoryStore::default(),
        };
        if store.is_empty() {
            tracing::warn!("persistence disabled and no seed rows loaded, serving an empty gallery");
        } else {
            tracing::info!(rows = store.len(), "persistence disabled, serving from memory");
        }
        return Ok(Arc::new(store));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(config.database_connect_timeout())
        .connect(&config.database_url)
        .await
        .map_err(|e| GalleryError::Persistence(e.to_string()))?;

    let store = PostgresStore::new(pool);
    if config.run_migrations {
        store.migrate().await?;
    }
    tracing::info!(
        max_connections = config.database_max_connections,
        "connected to PostgreSQL"
    );
    Ok(Arc::new(store))
}
