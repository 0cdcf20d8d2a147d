//! TargetDesk database layer.
//!
//! PostgreSQL persistence for the four reference entities (targets,
//! diseases, compounds, structures) and the two join relations
//! (target↔disease, compound↔target activity). The schema is created
//! idempotently at startup; each entity gets a small repository over a
//! shared [`sqlx::PgPool`].

pub mod compounds;
pub mod database;
pub mod diseases;
pub mod error;
pub mod relations;
pub mod schema;
pub mod structures;
pub mod targets;

pub use compounds::CompoundRepository;
pub use database::{Database, DatabaseStats};
pub use diseases::DiseaseRepository;
pub use error::{DbError, Result};
pub use relations::RelationRepository;
pub use schema::{
    Compound, CompoundActivity, CompoundActivityRow, Disease, NewCompound,
    NewCompoundActivity, NewDisease, NewStructure, NewTarget, Structure,
    StructureRow, Target, TargetDiseaseLink,
};
pub use structures::StructureRepository;
pub use targets::TargetRepository;
