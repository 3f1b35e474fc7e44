//! PostgreSQL implementation of the persistence layer.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::LocationStore;
use super::models::{LOCATION_COLUMNS, LocationRow};
use crate::domain::{Location, LocationId, LocationQuery, SortDirection, SortKey};
use crate::error::GalleryError;

/// PostgreSQL-backed location store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations in `migrations/`.
    ///
    /// # Errors
    ///
    /// Returns a [`GalleryError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), GalleryError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| GalleryError::Persistence(e.to_string()))?;
        tracing::info!("database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl LocationStore for PostgresStore {
    async fn find(&self, query: &LocationQuery) -> Result<Vec<Location>, GalleryError> {
        let mut builder = select_builder(query);
        let rows = builder
            .build_query_as::<LocationRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| GalleryError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn count(&self, query: &LocationQuery) -> Result<usize, GalleryError> {
        let mut builder = count_builder(query);
        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GalleryError::Persistence(e.to_string()))?;

        usize::try_from(total).map_err(|e| GalleryError::Internal(e.to_string()))
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, GalleryError> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GalleryError::Persistence(e.to_string()))?;

        Ok(row.map(Location::from))
    }

    async fn ping(&self) -> Result<(), GalleryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| GalleryError::Persistence(e.to_string()))?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Builds the full `SELECT` for `query`: filters, ordering, and window.
fn select_builder(query: &LocationQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {LOCATION_COLUMNS} FROM locations"));
    push_filters(&mut builder, query);
    builder.push(" ORDER BY ");
    builder.push(order_clause(query.sort, query.direction));
    if let Some(limit) = query.limit {
        builder.push(" LIMIT ");
        builder.push_bind(to_i64(limit));
    }
    if query.offset > 0 {
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(query.offset));
    }
    builder
}

/// Builds `SELECT COUNT(*)` over the rows `query` filters to.
fn count_builder(query: &LocationQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM locations");
    push_filters(&mut builder, query);
    builder
}

fn push_filters(builder: &mut QueryBuilder<'static, Postgres>, query: &LocationQuery) {
    let mut keyword = " WHERE ";
    if let Some(title) = &query.title_contains {
        builder.push(keyword);
        builder.push("title ILIKE ");
        builder.push_bind(like_pattern(title));
        builder.push(" ESCAPE '\\'");
        keyword = " AND ";
    }
    if let Some(flag) = query.marked_important {
        builder.push(keyword);
        builder.push("marked_important = ");
        builder.push_bind(flag);
    }
}

/// `ORDER BY` body. Matches [`LocationQuery::compare`] so both stores
/// return rows in the same order.
const fn order_clause(sort: SortKey, direction: SortDirection) -> &'static str {
    match (sort, direction) {
        (SortKey::CreatedAt, SortDirection::Desc) => "created_at DESC, id DESC",
        (SortKey::CreatedAt, SortDirection::Asc) => "created_at ASC, id ASC",
        (SortKey::Title, SortDirection::Asc) => "lower(title) ASC, title ASC, id ASC",
        (SortKey::Title, SortDirection::Desc) => "lower(title) DESC, title DESC, id DESC",
    }
}

/// Wraps `needle` in `%...%`, escaping `LIKE` metacharacters so the search
/// text matches literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
