use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::EventResult;

/// Repository for result-table database operations
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the full collection, newest first.
    pub async fn list(&self) -> Result<Vec<EventResult>> {
        let results = sqlx::query_as::<_, EventResult>(
            r#"
            SELECT id, student_name, reg_no, group_color, event_name, event_type,
                   position, points, created_at
            FROM results
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Insert a fully formed result, returning the persisted row.
    pub async fn insert(&self, result: &EventResult) -> Result<EventResult> {
        let inserted = sqlx::query_as::<_, EventResult>(
            r#"
            INSERT INTO results (
                id, student_name, reg_no, group_color, event_name, event_type,
                position, points, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, student_name, reg_no, group_color, event_name, event_type,
                      position, points, created_at
            "#,
        )
        .bind(result.id)
        .bind(&result.student_name)
        .bind(&result.reg_no)
        .bind(result.group)
        .bind(&result.event_name)
        .bind(result.event_type)
        .bind(result.position)
        .bind(result.points)
        .bind(result.created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(inserted)
    }

    /// Delete by id. Deleting an absent id is a no-op.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
