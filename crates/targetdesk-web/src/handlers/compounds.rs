//! Compounds page — table, add form, and the 2D depiction widget endpoint.

use axum::{
    extract::{Path, State},
    response::Html,
    Form, Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::{alert, cell, cell_f64, esc, form_f64, form_text, layout, required_name};
use crate::state::SharedState;
use targetdesk_db::{Compound, CompoundRepository, NewCompound};

#[derive(Deserialize)]
pub struct CompoundForm {
    pub name: Option<String>,
    pub smiles: Option<String>,
    pub molecular_formula: Option<String>,
    pub molecular_weight: Option<String>,
    pub logp: Option<String>,
    pub development_stage: Option<String>,
}

pub async fn compounds_page(State(state): State<SharedState>) -> Html<String> {
    render(&state, None).await
}

pub async fn compounds_create(
    State(state): State<SharedState>,
    Form(form): Form<CompoundForm>,
) -> Html<String> {
    let Some(name) = required_name(&form.name) else {
        return render(&state, Some(alert("warning", "Compound name is required."))).await;
    };

    let new = NewCompound {
        name,
        smiles: form_text(form.smiles),
        molecular_formula: form_text(form.molecular_formula),
        molecular_weight: form_f64(&form.molecular_weight),
        logp: form_f64(&form.logp),
        development_stage: form_text(form.development_stage),
        origin: None,
        patent_status: None,
        notes: None,
    };

    let notice = match CompoundRepository::new(state.db.clone()).insert(&new).await {
        Ok(compound) => alert("success", &format!("Compound added: {}", compound.name)),
        Err(e) => {
            tracing::error!("failed to add compound: {e}");
            alert("danger", "Could not save the compound. Please try again.")
        }
    };

    render(&state, Some(notice)).await
}

async fn render(state: &SharedState, notice: Option<String>) -> Html<String> {
    let compounds = CompoundRepository::new(state.db.clone())
        .list()
        .await
        .unwrap_or_default();

    let rows_html: String = if compounds.is_empty() {
        r#"<tr><td colspan="6" class="text-center text-muted">No compounds recorded yet.</td></tr>"#
            .to_string()
    } else {
        compounds
            .iter()
            .map(|c| {
                format!(
                    r#"
            <tr>
                <td class="text-muted">{id}</td>
                <td class="fw-bold">{name}</td>
                <td><code>{formula}</code></td>
                <td>{stage}</td>
                <td>{logp}</td>
                <td><button class="btn btn-outline btn-sm" onclick="drawCompound({id})">View 2D</button></td>
            </tr>"#,
                    id = c.id,
                    name = esc(&c.name),
                    formula = cell(&c.molecular_formula),
                    stage = cell(&c.development_stage),
                    logp = cell_f64(c.logp),
                )
            })
            .collect()
    };

    let main = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Compounds</h1>
    </div>
    {notice}

    <div class="card">
        <div class="card-header">Compound List</div>
        <table class="table">
            <thead>
                <tr><th>#</th><th>Name</th><th>Formula</th><th>Stage</th><th>LogP</th><th></th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    </div>

    <div class="grid-2">
        <div class="card">
            <div class="card-header">Add New Compound</div>
            <form method="post" action="/compounds" class="form-grid">
                <label>Compound Name *
                    <input type="text" name="name" placeholder="Enter compound name">
                </label>
                <label>Molecular Formula
                    <input type="text" name="molecular_formula" placeholder="e.g., C9H8O4">
                </label>
                <label class="span-2">SMILES String
                    <input type="text" name="smiles" placeholder="Enter SMILES notation">
                </label>
                <label>Development Stage
                    <select name="development_stage">
                        <option value="">—</option>
                        <option value="Discovery">Discovery</option>
                        <option value="Preclinical">Preclinical</option>
                        <option value="Phase I">Phase I</option>
                        <option value="Phase II">Phase II</option>
                        <option value="Phase III">Phase III</option>
                        <option value="Approved">Approved</option>
                    </select>
                </label>
                <label>LogP
                    <input type="text" name="logp" placeholder="e.g., 1.2">
                </label>
                <div class="span-2">
                    <button type="submit" class="btn btn-primary">Add Compound</button>
                </div>
            </form>
        </div>

        <div class="card">
            <div class="card-header">Structure Preview</div>
            <p class="text-muted">2D depiction rendered in the browser from the stored SMILES string.</p>
            <canvas id="compound-canvas" width="400" height="300"></canvas>
        </div>
    </div>
    <script src="https://unpkg.com/smiles-drawer@2.0.1/dist/smiles-drawer.min.js"></script>
    <script src="/static/js/compound-viewer.js"></script>"#,
        notice = notice.unwrap_or_default(),
        rows = rows_html,
    );

    Html(layout("Compounds", &main))
}

/// GET /api/compounds/{id} — record JSON for the depiction widget.
pub async fn api_compound(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<Compound>, ApiError> {
    let compound = CompoundRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("compound {id}")))?;
    Ok(Json(compound))
}
