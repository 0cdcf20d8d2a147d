//! Structure repository.

use crate::error::Result;
use crate::schema::{NewStructure, Structure, StructureRow};
use sqlx::PgPool;

#[derive(Clone)]
pub struct StructureRepository {
    pool: PgPool,
}

impl StructureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new: &NewStructure) -> Result<Structure> {
        let structure = sqlx::query_as::<_, Structure>(
            r#"
            INSERT INTO structures
                (target_id, pdb_id, resolution, file_path, description)
            VALUES ($1,$2,$3,$4,$5)
            RETURNING *
            "#,
        )
        .bind(new.target_id)
        .bind(&new.pdb_id)
        .bind(new.resolution)
        .bind(&new.file_path)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = structure.id, pdb_id = ?structure.pdb_id, "structure inserted");
        Ok(structure)
    }

    pub async fn list(&self) -> Result<Vec<Structure>> {
        Ok(sqlx::query_as("SELECT * FROM structures ORDER BY id")
            .fetch_all(&self.pool)
            .await?)
    }

    /// Structures joined with their target name for the table view.
    pub async fn list_with_target(&self) -> Result<Vec<StructureRow>> {
        Ok(sqlx::query_as(
            r#"
            SELECT s.id, t.name AS target_name, s.pdb_id, s.resolution, s.file_path
            FROM structures s
            LEFT JOIN targets t ON t.id = s.target_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Structure>> {
        Ok(sqlx::query_as("SELECT * FROM structures WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}
