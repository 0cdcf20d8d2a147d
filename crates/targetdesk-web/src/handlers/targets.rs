//! Targets page — table, add form, and JSON endpoints.

use axum::{
    extract::{Path, State},
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::{alert, cell, cell_f64, esc, form_f64, form_text, layout, required_name};
use crate::state::SharedState;
use targetdesk_db::{
    CompoundActivityRow, NewTarget, RelationRepository, Target, TargetDiseaseLink,
    TargetRepository,
};

#[derive(Deserialize)]
pub struct TargetForm {
    pub name: Option<String>,
    pub alternative_names: Option<String>,
    pub organism: Option<String>,
    pub category: Option<String>,
    pub validation_status: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub mechanism: Option<String>,
    pub molecular_weight: Option<String>,
    pub cellular_location: Option<String>,
}

impl TargetForm {
    fn into_new(self, name: String) -> NewTarget {
        NewTarget {
            name,
            alternative_names: form_text(self.alternative_names),
            organism: form_text(self.organism),
            category: form_text(self.category),
            validation_status: form_text(self.validation_status),
            priority: form_text(self.priority),
            description: form_text(self.description),
            mechanism: form_text(self.mechanism),
            notes: None,
            molecular_weight: form_f64(&self.molecular_weight),
            cellular_location: form_text(self.cellular_location),
        }
    }
}

pub async fn targets_page(State(state): State<SharedState>) -> Html<String> {
    render(&state, None).await
}

pub async fn targets_create(
    State(state): State<SharedState>,
    Form(form): Form<TargetForm>,
) -> Html<String> {
    let Some(name) = required_name(&form.name) else {
        return render(&state, Some(alert("warning", "Target name is required."))).await;
    };

    let repo = TargetRepository::new(state.db.clone());
    let notice = match repo.insert(&form.into_new(name)).await {
        Ok(target) => alert("success", &format!("Target added: {}", target.name)),
        Err(e) => {
            tracing::error!("failed to add target: {e}");
            alert("danger", "Could not save the target. Please try again.")
        }
    };

    render(&state, Some(notice)).await
}

async fn render(state: &SharedState, notice: Option<String>) -> Html<String> {
    let targets = TargetRepository::new(state.db.clone())
        .list()
        .await
        .unwrap_or_default();

    let rows_html: String = if targets.is_empty() {
        r#"<tr><td colspan="7" class="text-center text-muted">No targets recorded yet.</td></tr>"#
            .to_string()
    } else {
        targets
            .iter()
            .map(|t| {
                format!(
                    r#"
            <tr>
                <td class="text-muted">{}</td>
                <td class="fw-bold">{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td><span class="badge">{}</span></td>
                <td>{}</td>
            </tr>"#,
                    t.id,
                    esc(&t.name),
                    cell(&t.category),
                    cell(&t.organism),
                    cell(&t.validation_status),
                    cell(&t.priority),
                    cell_f64(t.molecular_weight),
                )
            })
            .collect()
    };

    let main = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Targets</h1>
    </div>
    {notice}

    <div class="card">
        <div class="card-header">Target List</div>
        <table class="table">
            <thead>
                <tr>
                    <th>#</th><th>Name</th><th>Category</th><th>Organism</th>
                    <th>Validation</th><th>Priority</th><th>MW (kDa)</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    </div>

    <div class="card">
        <div class="card-header">Add New Target</div>
        <form method="post" action="/targets" class="form-grid">
            <label>Target Name *
                <input type="text" name="name" placeholder="Enter target name">
            </label>
            <label>Category
                <input type="text" name="category" placeholder="e.g., Kinase, GPCR">
            </label>
            <label>Organism
                <input type="text" name="organism" placeholder="e.g., human, viral">
            </label>
            <label>Validation Status
                <select name="validation_status">
                    <option value="">—</option>
                    <option value="Validated">Validated</option>
                    <option value="Emerging">Emerging</option>
                    <option value="Putative">Putative</option>
                </select>
            </label>
            <label>Priority
                <select name="priority">
                    <option value="">—</option>
                    <option value="High">High</option>
                    <option value="Medium">Medium</option>
                    <option value="Low">Low</option>
                </select>
            </label>
            <label>Molecular Weight (kDa)
                <input type="text" name="molecular_weight" placeholder="e.g., 21.6">
            </label>
            <label class="span-2">Description
                <textarea name="description" rows="4" placeholder="Enter target description"></textarea>
            </label>
            <label class="span-2">Mechanism
                <textarea name="mechanism" rows="4" placeholder="Enter target mechanism"></textarea>
            </label>
            <div class="span-2">
                <button type="submit" class="btn btn-primary">Add Target</button>
            </div>
        </form>
    </div>"#,
        notice = notice.unwrap_or_default(),
        rows = rows_html,
    );

    Html(layout("Targets", &main))
}

// === JSON API (used by the UI widgets) ===

#[derive(Serialize)]
pub struct ApiTargetDetail {
    #[serde(flatten)]
    pub target: Target,
    pub diseases: Vec<TargetDiseaseLink>,
    pub activities: Vec<CompoundActivityRow>,
}

/// GET /api/targets — full target list.
pub async fn api_targets(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Target>>, ApiError> {
    let targets = TargetRepository::new(state.db.clone()).list().await?;
    Ok(Json(targets))
}

/// GET /api/targets/{id} — one target with its linked diseases and activities.
pub async fn api_target_detail(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiTargetDetail>, ApiError> {
    let target = TargetRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("target {id}")))?;

    let relations = RelationRepository::new(state.db.clone());
    let diseases = relations.links_for_target(id).await?;
    let activities = relations.activities_for_target(id).await?;

    Ok(Json(ApiTargetDetail {
        target,
        diseases,
        activities,
    }))
}
