//! SQLite implementation of the stats store.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::StatsStore;
use crate::error::AppError;

/// SQLite store for the visit log and per-code counters.
pub struct SqliteStatsStore {
    pool: SqlitePool,
}

impl SqliteStatsStore {
    /// Creates a new store over a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_visit(row: SqliteRow) -> Result<Visit, sqlx::Error> {
    Ok(Visit::new(
        row.try_get("id")?,
        row.try_get("code")?,
        row.try_get("referer")?,
        row.try_get("client_ip")?,
        row.try_get("visited_at")?,
    ))
}

#[async_trait]
impl StatsStore for SqliteStatsStore {
    async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        // One transaction covers both effects; a visit is never counted
        // without its event row or vice versa.
        let mut tx = self.pool.begin().await?;

        let done = sqlx::query(
            r#"
            INSERT INTO visits (code, referer, client_ip, visited_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new_visit.code)
        .bind(&new_visit.referer)
        .bind(&new_visit.client_ip)
        .bind(&new_visit.visited_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO visit_counts (code, visits)
            VALUES (?1, 1)
            ON CONFLICT (code) DO UPDATE SET visits = visits + 1
            "#,
        )
        .bind(&new_visit.code)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Visit::new(
            done.last_insert_rowid(),
            new_visit.code,
            new_visit.referer,
            new_visit.client_ip,
            new_visit.visited_at,
        ))
    }

    async fn list_visits(&self, code: &str) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, referer, client_ip, visited_at
            FROM visits
            WHERE code = ?1
            ORDER BY id DESC
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row_to_visit(row).map_err(AppError::from))
            .collect()
    }

    async fn visit_count(&self, code: &str) -> Result<i64, AppError> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT visits FROM visit_counts WHERE code = ?1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;

        Ok(count.unwrap_or(0))
    }
}
