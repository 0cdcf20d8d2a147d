//! Dashboard handler — landing page with quick stats.

use axum::{extract::State, response::Html};

use crate::handlers::{cell, esc, layout};
use crate::state::SharedState;
use targetdesk_db::{Compound, CompoundRepository, Database, Target, TargetRepository};

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let db = Database::from_pool(state.db.clone());
    let stats = db.stats().await.unwrap_or_default();

    let top_targets = TargetRepository::new(state.db.clone())
        .top_by_priority(5)
        .await
        .unwrap_or_default();

    let recent_compounds = CompoundRepository::new(state.db.clone())
        .recent(5)
        .await
        .unwrap_or_default();

    Html(layout(
        "Dashboard",
        &render_dashboard(&stats, &top_targets, &recent_compounds),
    ))
}

fn render_dashboard(
    stats: &targetdesk_db::DatabaseStats,
    top_targets: &[Target],
    recent_compounds: &[Compound],
) -> String {
    let targets_html = if top_targets.is_empty() {
        r#"<tr><td colspan="3" class="text-center text-muted">No targets yet. Add one on the Targets page.</td></tr>"#.to_string()
    } else {
        top_targets
            .iter()
            .map(|t| {
                format!(
                    r#"
            <tr>
                <td><a href="/targets" class="fw-bold">{}</a></td>
                <td>{}</td>
                <td><span class="badge">{}</span></td>
            </tr>"#,
                    esc(&t.name),
                    cell(&t.category),
                    cell(&t.priority),
                )
            })
            .collect()
    };

    let compounds_html = if recent_compounds.is_empty() {
        r#"<tr><td colspan="3" class="text-center text-muted">No compounds yet.</td></tr>"#
            .to_string()
    } else {
        recent_compounds
            .iter()
            .map(|c| {
                format!(
                    r#"
            <tr>
                <td><a href="/compounds" class="fw-bold">{}</a></td>
                <td><code>{}</code></td>
                <td>{}</td>
            </tr>"#,
                    esc(&c.name),
                    cell(&c.molecular_formula),
                    cell(&c.development_stage),
                )
            })
            .collect()
    };

    format!(
        r#"
    <div class="page-header">
        <div>
            <h1 class="page-title">Drug Target Dashboard</h1>
            <p class="text-muted">Reference data for targets, diseases, compounds and structures</p>
        </div>
    </div>

    <div class="stats-grid">
        <div class="stat-card">
            <div class="stat-value">{targets}</div>
            <div class="stat-label">Targets</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{diseases}</div>
            <div class="stat-label">Diseases</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{compounds}</div>
            <div class="stat-label">Compounds</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{structures}</div>
            <div class="stat-label">Structures</div>
        </div>
    </div>

    <div class="grid-2">
        <div class="card">
            <div class="card-header">
                <div>Top Targets</div>
                <a href="/targets" class="btn btn-outline btn-sm">All Targets</a>
            </div>
            <table class="table">
                <thead><tr><th>Name</th><th>Category</th><th>Priority</th></tr></thead>
                <tbody>{targets_rows}</tbody>
            </table>
        </div>

        <div class="card">
            <div class="card-header">
                <div>Recent Compounds</div>
                <a href="/compounds" class="btn btn-outline btn-sm">All Compounds</a>
            </div>
            <table class="table">
                <thead><tr><th>Name</th><th>Formula</th><th>Stage</th></tr></thead>
                <tbody>{compounds_rows}</tbody>
            </table>
        </div>
    </div>"#,
        targets = stats.targets,
        diseases = stats.diseases,
        compounds = stats.compounds,
        structures = stats.structures,
        targets_rows = targets_html,
        compounds_rows = compounds_html,
    )
}
