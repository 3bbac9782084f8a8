use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder, Row, postgres::PgPoolOptions};
use uuid::Uuid;

use async_trait::async_trait;

use super::{StoreError, TitleStore};
use reelvault_model::{PageRequest, TitleFilters};

/// Postgres-backed title store. The verbatim document lives in a JSONB
/// column; the fields the API filters and orders on are extracted into
/// typed columns at insert time.
#[derive(Clone, Debug)]
pub struct PostgresTitleStore {
    pool: PgPool,
}

impl PostgresTitleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Append the filter conjunction as parameterized predicates. Absent
    /// filters contribute nothing; there is no wildcard form.
    fn push_predicates<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        filters: &'a TitleFilters,
    ) {
        let mut separator = " WHERE ";

        if let Some(category) = &filters.category {
            builder
                .push(separator)
                .push("category = ")
                .push_bind(category.as_str());
            separator = " AND ";
        }

        if let Some(kind) = &filters.kind {
            builder.push(separator).push("kind = ").push_bind(kind.as_str());
            separator = " AND ";
        }

        if let Some(title) = &filters.title {
            // strpos rather than LIKE: plain substring semantics, no
            // metacharacters to escape.
            builder
                .push(separator)
                .push("strpos(lower(title), lower(")
                .push_bind(title.as_str())
                .push(")) > 0");
            separator = " AND ";
        }

        if let Some(year) = filters.year {
            builder
                .push(separator)
                .push("release_year = ")
                .push_bind(year);
            separator = " AND ";
        }

        if let Some(rating_min) = filters.rating_min {
            builder
                .push(separator)
                .push("rating >= ")
                .push_bind(rating_min);
        }
    }
}

#[async_trait]
impl TitleStore for PostgresTitleStore {
    async fn find(&self, filters: &TitleFilters) -> Result<Vec<Value>, StoreError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT doc FROM titles");
        Self::push_predicates(&mut builder, filters);
        builder.push(" ORDER BY created_at DESC");

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| row.try_get("doc").map_err(StoreError::from))
            .collect()
    }

    async fn list(&self, page: &PageRequest) -> Result<Vec<Value>, StoreError> {
        let rows = sqlx::query(
            "SELECT doc FROM titles ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get("doc").map_err(StoreError::from))
            .collect()
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM titles")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn insert(&self, doc: &Value) -> Result<(), StoreError> {
        let id = required_text(doc, "id")?;
        let id: Uuid = id
            .parse()
            .map_err(|_| StoreError::InvalidDocument(format!("id is not a uuid: {id}")))?;

        let created_at = required_text(doc, "created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(created_at)
            .map_err(|err| {
                StoreError::InvalidDocument(format!("created_at: {err}"))
            })?
            .with_timezone(&Utc);

        sqlx::query(
            "INSERT INTO titles \
             (id, title, category, kind, release_year, rating, created_at, doc) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(column_text(doc, "title"))
        .bind(column_text(doc, "category"))
        .bind(column_text(doc, "type"))
        .bind(column_year(doc))
        .bind(doc.get("rating").and_then(Value::as_f64))
        .bind(created_at)
        .bind(doc)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Typed filter columns hold only values the predicates can actually
/// match: non-string fields stay NULL so the SQL predicates agree with
/// [`TitleFilters::matches`], which treats them as non-matching.
fn column_text<'a>(doc: &'a Value, field: &str) -> Option<&'a str> {
    doc.get(field).and_then(Value::as_str)
}

/// Out-of-`i32`-range years degrade to NULL rather than wrapping; the
/// verbatim value stays in the document column.
fn column_year(doc: &Value) -> Option<i32> {
    doc.get("release_year")
        .and_then(Value::as_i64)
        .and_then(|year| i32::try_from(year).ok())
}

fn required_text<'a>(doc: &'a Value, field: &str) -> Result<&'a str, StoreError> {
    column_text(doc, field)
        .ok_or_else(|| StoreError::InvalidDocument(format!("missing field: {field}")))
}
