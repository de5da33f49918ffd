//! SQLite implementation of the link store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertError, LinkStore};
use crate::error::AppError;

/// SQLite store for short link persistence.
///
/// Uniqueness of both `code` and `encoded_url` is guaranteed by UNIQUE
/// constraints in the schema, so a lost race surfaces as a classified
/// [`InsertError`] rather than a duplicate row.
pub struct SqliteLinkStore {
    pool: SqlitePool,
}

impl SqliteLinkStore {
    /// Creates a new store over a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_link(row: SqliteRow) -> Result<Link, sqlx::Error> {
    Ok(Link::new(
        row.try_get("id")?,
        row.try_get("code")?,
        row.try_get("encoded_url")?,
        row.try_get("created_at")?,
    ))
}

/// Maps an insert failure onto the store contract, telling apart which
/// UNIQUE constraint fired from the SQLite error message
/// (`UNIQUE constraint failed: links.code`).
fn classify_insert_error(e: sqlx::Error) -> InsertError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            let message = db.message().to_string();
            if message.contains("links.code") {
                return InsertError::DuplicateCode;
            }
            if message.contains("links.encoded_url") {
                return InsertError::DuplicateUrl;
            }
        }
    }

    InsertError::Store(AppError::from(e))
}

#[async_trait]
impl LinkStore for SqliteLinkStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, InsertError> {
        let created_at = Utc::now();

        let done = sqlx::query(
            r#"
            INSERT INTO links (code, encoded_url, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.encoded_url)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(classify_insert_error)?;

        Ok(Link::new(
            done.last_insert_rowid(),
            new_link.code,
            new_link.encoded_url,
            created_at,
        ))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, encoded_url, created_at
            FROM links
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_link).transpose()?)
    }

    async fn find_by_url(&self, encoded_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, encoded_url, created_at
            FROM links
            WHERE encoded_url = ?1
            "#,
        )
        .bind(encoded_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_link).transpose()?)
    }
}
