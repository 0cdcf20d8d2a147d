//! Compound repository.

use crate::error::Result;
use crate::schema::{Compound, NewCompound};
use sqlx::PgPool;

#[derive(Clone)]
pub struct CompoundRepository {
    pool: PgPool,
}

impl CompoundRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: &NewCompound) -> Result<Compound> {
        let compound = sqlx::query_as::<_, Compound>(
            r#"
            INSERT INTO compounds
                (name, smiles, molecular_formula, molecular_weight, logp,
                 development_stage, origin, patent_status, notes)
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.smiles)
        .bind(&new.molecular_formula)
        .bind(new.molecular_weight)
        .bind(new.logp)
        .bind(&new.development_stage)
        .bind(&new.origin)
        .bind(&new.patent_status)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = compound.id, name = %compound.name, "compound inserted");
        Ok(compound)
    }

    pub async fn list(&self) -> Result<Vec<Compound>> {
        Ok(sqlx::query_as("SELECT * FROM compounds ORDER BY id")
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Compound>> {
        Ok(sqlx::query_as("SELECT * FROM compounds WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn options(&self) -> Result<Vec<(i32, String)>> {
        Ok(sqlx::query_as("SELECT id, name FROM compounds ORDER BY name")
            .fetch_all(&self.pool)
            .await?)
    }

    /// Most recently added compounds for the dashboard card.
    pub async fn recent(&self, limit: i64) -> Result<Vec<Compound>> {
        Ok(
            sqlx::query_as("SELECT * FROM compounds ORDER BY id DESC LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
