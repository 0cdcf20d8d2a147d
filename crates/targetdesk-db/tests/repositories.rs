//! Repository round-trip tests.
//!
//! Requires a PostgreSQL instance. Run with:
//! ```bash
//! DATABASE_URL=postgres://postgres@localhost:5432/drug_targets \
//!   cargo test --package targetdesk-db -- --ignored --nocapture
//! ```

use targetdesk_db::{
    Database, DiseaseRepository, NewCompound, NewCompoundActivity, NewDisease, NewTarget,
    CompoundRepository, RelationRepository, TargetRepository,
};

async fn open_db() -> Database {
    let url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://postgres@localhost:5432/drug_targets".to_string());
    let db = Database::connect(&url).await.expect("connect failed");
    db.initialize().await.expect("schema init failed");
    db
}

#[tokio::test]
#[ignore] // requires database connection
async fn target_with_only_name_is_listed() {
    let db = open_db().await;
    let repo = TargetRepository::new(db.pool().clone());

    let name = format!("TEST-TGT-{}", std::process::id());
    let created = repo.insert(&NewTarget::named(&name)).await.unwrap();
    assert!(created.id > 0);
    assert!(created.category.is_none());

    let listed = repo.list().await.unwrap();
    assert!(listed.iter().any(|t| t.id == created.id && t.name == name));
}

#[tokio::test]
#[ignore] // requires database connection
async fn replace_disease_set_overwrites() {
    let db = open_db().await;
    let targets = TargetRepository::new(db.pool().clone());
    let diseases = DiseaseRepository::new(db.pool().clone());
    let relations = RelationRepository::new(db.pool().clone());

    let target = targets.insert(&NewTarget::named("TEST-LINK")).await.unwrap();
    let a = diseases.insert(&NewDisease::named("disease-a")).await.unwrap();
    let b = diseases.insert(&NewDisease::named("disease-b")).await.unwrap();
    let c = diseases.insert(&NewDisease::named("disease-c")).await.unwrap();

    relations
        .replace_target_diseases(target.id, &[a.id, b.id], Some("primary"), Some("strong"))
        .await
        .unwrap();
    assert_eq!(
        relations.diseases_for_target(target.id).await.unwrap(),
        vec![a.id, b.id]
    );

    // Overwrite, not merge: {A,B} -> {B,C} leaves exactly {B,C}.
    relations
        .replace_target_diseases(target.id, &[b.id, c.id], None, None)
        .await
        .unwrap();
    assert_eq!(
        relations.diseases_for_target(target.id).await.unwrap(),
        vec![b.id, c.id]
    );
}

#[tokio::test]
#[ignore] // requires database connection
async fn activity_append_shows_in_joined_listing() {
    let db = open_db().await;
    let targets = TargetRepository::new(db.pool().clone());
    let compounds = CompoundRepository::new(db.pool().clone());
    let relations = RelationRepository::new(db.pool().clone());

    let target = targets.insert(&NewTarget::named("TEST-ACT-TGT")).await.unwrap();
    let compound = compounds
        .insert(&NewCompound::named("TEST-ACT-CMP"))
        .await
        .unwrap();

    relations
        .add_activity(&NewCompoundActivity {
            compound_id: compound.id,
            target_id: target.id,
            activity_type: Some("IC50".into()),
            activity_value: Some(42.0),
            activity_unit: Some("nM".into()),
            reference: Some("J. Med. Chem. 2024".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let rows = relations.activities_for_target(target.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].compound_name, "TEST-ACT-CMP");
    assert_eq!(rows[0].activity_value, Some(42.0));
}
