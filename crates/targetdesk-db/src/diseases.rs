//! Disease repository.

use crate::error::Result;
use crate::schema::{Disease, NewDisease};
use sqlx::PgPool;

#[derive(Clone)]
pub struct DiseaseRepository {
    pool: PgPool,
}

impl DiseaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: &NewDisease) -> Result<Disease> {
        let disease = sqlx::query_as::<_, Disease>(
            r#"
            INSERT INTO diseases
                (name, category, description, etiology, prevalence,
                 patient_population, treatment_landscape, unmet_needs)
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(&new.description)
        .bind(&new.etiology)
        .bind(&new.prevalence)
        .bind(&new.patient_population)
        .bind(&new.treatment_landscape)
        .bind(&new.unmet_needs)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = disease.id, name = %disease.name, "disease inserted");
        Ok(disease)
    }

    pub async fn list(&self) -> Result<Vec<Disease>> {
        Ok(sqlx::query_as("SELECT * FROM diseases ORDER BY id")
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn options(&self) -> Result<Vec<(i32, String)>> {
        Ok(sqlx::query_as("SELECT id, name FROM diseases ORDER BY name")
            .fetch_all(&self.pool)
            .await?)
    }
}
