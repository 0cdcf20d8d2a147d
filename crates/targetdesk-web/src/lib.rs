//! targetdesk-web — server-rendered dashboard for TargetDesk.
//! Provides:
//!   - entity pages (targets, diseases, compounds, structures)
//!   - relationship manager (target↔disease, compound activities)
//!   - import/export page
//!   - JSON endpoints backing the molecule and structure viewer widgets

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
