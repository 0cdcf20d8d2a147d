//! Protein structure handling for TargetDesk.
//!
//! A fixed-column PDB scanner producing atom/bond model data for the
//! browser 3D viewer widget, and a fetcher that downloads structures from
//! RCSB or AlphaFold into the local structures directory.

pub mod fetch;
pub mod pdb;

pub use fetch::StructureFetcher;
pub use pdb::{parse_pdb, Atom, ModelData};
