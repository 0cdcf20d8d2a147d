//! Row types for the TargetDesk schema.
//!
//! `New*` structs carry form input for INSERTs; the plain structs mirror
//! full table rows. Everything beyond the required `name` column is
//! nullable so a record can be created from a form with only the name
//! filled in.

use serde::{Deserialize, Serialize};

// =============================================================================
// Targets
// =============================================================================

/// A drug target (protein, enzyme, receptor...).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Target {
    pub id: i32,
    pub name: String,
    pub alternative_names: Option<String>,
    pub organism: Option<String>,
    pub category: Option<String>,
    pub validation_status: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub mechanism: Option<String>,
    pub notes: Option<String>,
    pub molecular_weight: Option<f64>,
    pub cellular_location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewTarget {
    pub name: String,
    pub alternative_names: Option<String>,
    pub organism: Option<String>,
    pub category: Option<String>,
    pub validation_status: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub mechanism: Option<String>,
    pub notes: Option<String>,
    pub molecular_weight: Option<f64>,
    pub cellular_location: Option<String>,
}

impl NewTarget {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// Diseases
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Disease {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub etiology: Option<String>,
    pub prevalence: Option<String>,
    pub patient_population: Option<String>,
    pub treatment_landscape: Option<String>,
    pub unmet_needs: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewDisease {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub etiology: Option<String>,
    pub prevalence: Option<String>,
    pub patient_population: Option<String>,
    pub treatment_landscape: Option<String>,
    pub unmet_needs: Option<String>,
}

impl NewDisease {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// Compounds
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Compound {
    pub id: i32,
    pub name: String,
    pub smiles: Option<String>,
    pub molecular_formula: Option<String>,
    pub molecular_weight: Option<f64>,
    pub logp: Option<f64>,
    pub development_stage: Option<String>,
    pub origin: Option<String>,
    pub patent_status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCompound {
    pub name: String,
    pub smiles: Option<String>,
    pub molecular_formula: Option<String>,
    pub molecular_weight: Option<f64>,
    pub logp: Option<f64>,
    pub development_stage: Option<String>,
    pub origin: Option<String>,
    pub patent_status: Option<String>,
    pub notes: Option<String>,
}

impl NewCompound {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// Structures
// =============================================================================

/// An experimentally determined (or predicted) protein structure file
/// attached to a target.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Structure {
    pub id: i32,
    pub target_id: Option<i32>,
    pub pdb_id: Option<String>,
    pub resolution: Option<f64>,
    pub file_path: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewStructure {
    pub target_id: Option<i32>,
    pub pdb_id: Option<String>,
    pub resolution: Option<f64>,
    pub file_path: Option<String>,
    pub description: Option<String>,
}

/// Structure row joined with its target's name for table display.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StructureRow {
    pub id: i32,
    pub target_name: Option<String>,
    pub pdb_id: Option<String>,
    pub resolution: Option<f64>,
    pub file_path: Option<String>,
}

// =============================================================================
// Join relations
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompoundActivity {
    pub id: i32,
    pub compound_id: i32,
    pub target_id: i32,
    pub activity_type: Option<String>,
    pub activity_value: Option<f64>,
    pub activity_unit: Option<String>,
    pub mechanism: Option<String>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCompoundActivity {
    pub compound_id: i32,
    pub target_id: i32,
    pub activity_type: Option<String>,
    pub activity_value: Option<f64>,
    pub activity_unit: Option<String>,
    pub mechanism: Option<String>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

/// Target↔disease link joined with both names for table display and export.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TargetDiseaseLink {
    pub target_id: i32,
    pub target_name: String,
    pub disease_id: i32,
    pub disease_name: String,
    pub relationship_type: Option<String>,
    pub evidence_level: Option<String>,
}

/// Activity row joined with compound and target names.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CompoundActivityRow {
    pub id: i32,
    pub compound_name: String,
    pub target_name: String,
    pub activity_type: Option<String>,
    pub activity_value: Option<f64>,
    pub activity_unit: Option<String>,
    pub reference: Option<String>,
}
