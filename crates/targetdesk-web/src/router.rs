//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    compounds::{api_compound, compounds_create, compounds_page},
    dashboard::dashboard,
    diseases::{diseases_create, diseases_page},
    exchange::{exchange_export, exchange_import, exchange_page},
    relationships::{add_activity, relationships_page, update_disease_links},
    structures::{api_structure_model, structures_create, structures_page},
    targets::{api_target_detail, api_targets, targets_create, targets_page},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))
        .route("/targets", get(targets_page).post(targets_create))
        .route("/diseases", get(diseases_page).post(diseases_create))
        .route("/compounds", get(compounds_page).post(compounds_create))
        .route("/structures", get(structures_page).post(structures_create))
        .route("/relationships", get(relationships_page))
        .route("/relationships/diseases", post(update_disease_links))
        .route("/relationships/activity", post(add_activity))
        .route("/exchange", get(exchange_page))
        .route("/exchange/import", post(exchange_import))
        .route("/exchange/export", get(exchange_export))
        // API endpoints
        .route("/api/targets", get(api_targets))
        .route("/api/targets/{id}", get(api_target_detail))
        .route("/api/compounds/{id}", get(api_compound))
        .route("/api/structures/{id}/model", get(api_structure_model))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
