//! Join-relation repository: target↔disease links and compound activities.

use crate::error::Result;
use crate::schema::{
    CompoundActivity, CompoundActivityRow, NewCompoundActivity, TargetDiseaseLink,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct RelationRepository {
    pool: PgPool,
}

impl RelationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ── Target ↔ disease ─────────────────────────────────────────────────

    /// Replace a target's full disease set with the given one.
    ///
    /// Overwrite semantics, not merge: existing links are deleted and the
    /// selected set inserted in a single transaction, so {A,B} updated to
    /// {B,C} ends as exactly {B,C}. Concurrent updates race last-write-wins.
    pub async fn replace_target_diseases(
        &self,
        target_id: i32,
        disease_ids: &[i32],
        relationship_type: Option<&str>,
        evidence_level: Option<&str>,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM target_disease_relations WHERE target_id = $1")
            .bind(target_id)
            .execute(&mut *tx)
            .await?;

        for disease_id in disease_ids {
            sqlx::query(
                r#"
                INSERT INTO target_disease_relations
                    (target_id, disease_id, relationship_type, evidence_level)
                VALUES ($1,$2,$3,$4)
                "#,
            )
            .bind(target_id)
            .bind(disease_id)
            .bind(relationship_type)
            .bind(evidence_level)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(target_id, links = disease_ids.len(), "disease links replaced");
        Ok(())
    }

    /// Disease ids currently linked to a target.
    pub async fn diseases_for_target(&self, target_id: i32) -> Result<Vec<i32>> {
        Ok(sqlx::query_scalar(
            "SELECT disease_id FROM target_disease_relations
             WHERE target_id = $1 ORDER BY disease_id",
        )
        .bind(target_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// All links joined with target and disease names.
    pub async fn list_links(&self) -> Result<Vec<TargetDiseaseLink>> {
        Ok(sqlx::query_as(
            r#"
            SELECT r.target_id, t.name AS target_name,
                   r.disease_id, d.name AS disease_name,
                   r.relationship_type, r.evidence_level
            FROM target_disease_relations r
            JOIN targets t ON t.id = r.target_id
            JOIN diseases d ON d.id = r.disease_id
            ORDER BY t.name, d.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    pub async fn links_for_target(&self, target_id: i32) -> Result<Vec<TargetDiseaseLink>> {
        Ok(sqlx::query_as(
            r#"
            SELECT r.target_id, t.name AS target_name,
                   r.disease_id, d.name AS disease_name,
                   r.relationship_type, r.evidence_level
            FROM target_disease_relations r
            JOIN targets t ON t.id = r.target_id
            JOIN diseases d ON d.id = r.disease_id
            WHERE r.target_id = $1
            ORDER BY d.name
            "#,
        )
        .bind(target_id)
        .fetch_all(&self.pool)
        .await?)
    }

    // ── Compound activities ──────────────────────────────────────────────

    /// Append one measured activity record linking a compound to a target.
    pub async fn add_activity(&self, new: &NewCompoundActivity) -> Result<CompoundActivity> {
        let activity = sqlx::query_as::<_, CompoundActivity>(
            r#"
            INSERT INTO compound_activities
                (compound_id, target_id, activity_type, activity_value,
                 activity_unit, mechanism, reference, notes)
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
            RETURNING *
            "#,
        )
        .bind(new.compound_id)
        .bind(new.target_id)
        .bind(&new.activity_type)
        .bind(new.activity_value)
        .bind(&new.activity_unit)
        .bind(&new.mechanism)
        .bind(&new.reference)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            id = activity.id,
            compound_id = new.compound_id,
            target_id = new.target_id,
            "activity recorded"
        );
        Ok(activity)
    }

    /// All activities joined with compound and target names.
    pub async fn list_activities(&self) -> Result<Vec<CompoundActivityRow>> {
        Ok(sqlx::query_as(
            r#"
            SELECT a.id, c.name AS compound_name, t.name AS target_name,
                   a.activity_type, a.activity_value, a.activity_unit, a.reference
            FROM compound_activities a
            JOIN compounds c ON c.id = a.compound_id
            JOIN targets t ON t.id = a.target_id
            ORDER BY a.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    pub async fn activities_for_target(&self, target_id: i32) -> Result<Vec<CompoundActivityRow>> {
        Ok(sqlx::query_as(
            r#"
            SELECT a.id, c.name AS compound_name, t.name AS target_name,
                   a.activity_type, a.activity_value, a.activity_unit, a.reference
            FROM compound_activities a
            JOIN compounds c ON c.id = a.compound_id
            JOIN targets t ON t.id = a.target_id
            WHERE a.target_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(target_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
