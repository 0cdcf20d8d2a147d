//! Target repository.

use crate::error::Result;
use crate::schema::{NewTarget, Target};
use sqlx::PgPool;

#[derive(Clone)]
pub struct TargetRepository {
    pool: PgPool,
}

impl TargetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new target and return the stored row.
    pub async fn insert(&self, new: &NewTarget) -> Result<Target> {
        let target = sqlx::query_as::<_, Target>(
            r#"
            INSERT INTO targets
                (name, alternative_names, organism, category, validation_status,
                 priority, description, mechanism, notes, molecular_weight,
                 cellular_location)
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.alternative_names)
        .bind(&new.organism)
        .bind(&new.category)
        .bind(&new.validation_status)
        .bind(&new.priority)
        .bind(&new.description)
        .bind(&new.mechanism)
        .bind(&new.notes)
        .bind(new.molecular_weight)
        .bind(&new.cellular_location)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = target.id, name = %target.name, "target inserted");
        Ok(target)
    }

    /// All targets, oldest first.
    pub async fn list(&self) -> Result<Vec<Target>> {
        Ok(sqlx::query_as("SELECT * FROM targets ORDER BY id")
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Target>> {
        Ok(sqlx::query_as("SELECT * FROM targets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// (id, name) pairs for dropdowns, alphabetical.
    pub async fn options(&self) -> Result<Vec<(i32, String)>> {
        Ok(sqlx::query_as("SELECT id, name FROM targets ORDER BY name")
            .fetch_all(&self.pool)
            .await?)
    }

    /// Highest-priority targets for the dashboard card.
    pub async fn top_by_priority(&self, limit: i64) -> Result<Vec<Target>> {
        Ok(sqlx::query_as(
            r#"
            SELECT * FROM targets
            ORDER BY CASE LOWER(COALESCE(priority, ''))
                WHEN 'high' THEN 0
                WHEN 'medium' THEN 1
                WHEN 'low' THEN 2
                ELSE 3
            END, id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
