//! Database connection and schema management.

use crate::error::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Main database handle.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with a bounded connection pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create all tables if they don't exist.
    ///
    /// Foreign keys enforce referential integrity of the join rows; there
    /// is no cascade delete and no migration machinery beyond this.
    pub async fn initialize(&self) -> Result<()> {
        for ddl in CREATE_TABLES {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        tracing::info!("database schema initialized");
        Ok(())
    }

    /// Row counts for the dashboard quick stats.
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let targets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM targets")
            .fetch_one(&self.pool)
            .await?;
        let diseases: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM diseases")
            .fetch_one(&self.pool)
            .await?;
        let compounds: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM compounds")
            .fetch_one(&self.pool)
            .await?;
        let structures: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM structures")
            .fetch_one(&self.pool)
            .await?;

        Ok(DatabaseStats {
            targets,
            diseases,
            compounds,
            structures,
        })
    }
}

/// Table counts shown in the dashboard sidebar.
#[derive(Debug, Clone, Default)]
pub struct DatabaseStats {
    pub targets: i64,
    pub diseases: i64,
    pub compounds: i64,
    pub structures: i64,
}

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS targets (
        id                SERIAL PRIMARY KEY,
        name              VARCHAR(255) NOT NULL,
        alternative_names TEXT,
        organism          VARCHAR(100),
        category          VARCHAR(100),
        validation_status VARCHAR(50),
        priority          VARCHAR(20),
        description       TEXT,
        mechanism         TEXT,
        notes             TEXT,
        molecular_weight  DOUBLE PRECISION,
        cellular_location VARCHAR(255)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS diseases (
        id                  SERIAL PRIMARY KEY,
        name                VARCHAR(255) NOT NULL,
        category            VARCHAR(100),
        description         TEXT,
        etiology            VARCHAR(100),
        prevalence          VARCHAR(255),
        patient_population  TEXT,
        treatment_landscape TEXT,
        unmet_needs         TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS compounds (
        id                SERIAL PRIMARY KEY,
        name              VARCHAR(255) NOT NULL,
        smiles            TEXT,
        molecular_formula VARCHAR(100),
        molecular_weight  DOUBLE PRECISION,
        logp              DOUBLE PRECISION,
        development_stage VARCHAR(50),
        origin            VARCHAR(100),
        patent_status     TEXT,
        notes             TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS structures (
        id          SERIAL PRIMARY KEY,
        target_id   INTEGER REFERENCES targets(id),
        pdb_id      VARCHAR(10),
        resolution  DOUBLE PRECISION,
        file_path   VARCHAR(255),
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS target_disease_relations (
        id                SERIAL PRIMARY KEY,
        target_id         INTEGER NOT NULL REFERENCES targets(id),
        disease_id        INTEGER NOT NULL REFERENCES diseases(id),
        relationship_type VARCHAR(100),
        evidence_level    VARCHAR(50)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS compound_activities (
        id             SERIAL PRIMARY KEY,
        compound_id    INTEGER NOT NULL REFERENCES compounds(id),
        target_id      INTEGER NOT NULL REFERENCES targets(id),
        activity_type  VARCHAR(50),
        activity_value DOUBLE PRECISION,
        activity_unit  VARCHAR(20),
        mechanism      VARCHAR(100),
        reference      TEXT,
        notes          TEXT
    )
    "#,
];
