//! Relationship manager — target↔disease links and compound activities.

use axum::{extract::State, response::Html};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::handlers::{
    alert, cell, cell_f64, esc, form_f64, form_i32, form_text, layout, options_html,
};
use crate::state::SharedState;
use targetdesk_db::{
    CompoundRepository, DiseaseRepository, NewCompoundActivity, RelationRepository,
    TargetRepository,
};

/// Multi-select form: `disease_ids` repeats once per selected option.
#[derive(Deserialize)]
pub struct DiseaseLinkForm {
    pub target_id: Option<String>,
    #[serde(default)]
    pub disease_ids: Vec<i32>,
    pub relationship_type: Option<String>,
    pub evidence_level: Option<String>,
}

#[derive(Deserialize)]
pub struct ActivityForm {
    pub compound_id: Option<String>,
    pub target_id: Option<String>,
    pub activity_type: Option<String>,
    pub activity_value: Option<String>,
    pub activity_unit: Option<String>,
    pub reference: Option<String>,
}

pub async fn relationships_page(State(state): State<SharedState>) -> Html<String> {
    render(&state, None, None).await
}

/// POST /relationships/diseases — replace a target's full disease set with
/// the selected one (overwrite, not merge).
pub async fn update_disease_links(
    State(state): State<SharedState>,
    Form(form): Form<DiseaseLinkForm>,
) -> Html<String> {
    let Some(target_id) = form_i32(&form.target_id) else {
        return render(
            &state,
            Some(alert("warning", "Select a target to update.")),
            None,
        )
        .await;
    };

    let targets = TargetRepository::new(state.db.clone());
    let target = match targets.find_by_id(target_id).await {
        Ok(Some(target)) => target,
        Ok(None) => {
            return render(&state, Some(alert("danger", "Target not found.")), None).await;
        }
        Err(e) => {
            tracing::error!("target lookup failed: {e}");
            return render(
                &state,
                Some(alert("danger", "Could not update relationships.")),
                None,
            )
            .await;
        }
    };

    let result = RelationRepository::new(state.db.clone())
        .replace_target_diseases(
            target_id,
            &form.disease_ids,
            form_text(form.relationship_type).as_deref(),
            form_text(form.evidence_level).as_deref(),
        )
        .await;

    let notice = match result {
        Ok(()) => alert(
            "success",
            &format!("Disease relationships updated for target: {}", target.name),
        ),
        Err(e) => {
            tracing::error!("failed to update disease links: {e}");
            alert("danger", "Could not update relationships. Please try again.")
        }
    };

    render(&state, Some(notice), None).await
}

/// POST /relationships/activity — append one compound-activity record.
pub async fn add_activity(
    State(state): State<SharedState>,
    Form(form): Form<ActivityForm>,
) -> Html<String> {
    let (Some(compound_id), Some(target_id)) = (form_i32(&form.compound_id), form_i32(&form.target_id))
    else {
        return render(
            &state,
            None,
            Some(alert("warning", "Compound and target are required.")),
        )
        .await;
    };

    let new = NewCompoundActivity {
        compound_id,
        target_id,
        activity_type: form_text(form.activity_type),
        activity_value: form_f64(&form.activity_value),
        activity_unit: form_text(form.activity_unit),
        mechanism: None,
        reference: form_text(form.reference),
        notes: None,
    };

    let notice = match RelationRepository::new(state.db.clone()).add_activity(&new).await {
        Ok(_) => alert("success", "Activity data recorded."),
        Err(e) => {
            tracing::error!("failed to add activity: {e}");
            alert("danger", "Could not record activity data. Please try again.")
        }
    };

    render(&state, None, Some(notice)).await
}

async fn render(
    state: &SharedState,
    disease_notice: Option<String>,
    activity_notice: Option<String>,
) -> Html<String> {
    let relations = RelationRepository::new(state.db.clone());

    let target_options = TargetRepository::new(state.db.clone())
        .options()
        .await
        .unwrap_or_default();
    let disease_options = DiseaseRepository::new(state.db.clone())
        .options()
        .await
        .unwrap_or_default();
    let compound_options = CompoundRepository::new(state.db.clone())
        .options()
        .await
        .unwrap_or_default();

    let links = relations.list_links().await.unwrap_or_default();
    let activities = relations.list_activities().await.unwrap_or_default();

    let links_html: String = if links.is_empty() {
        r#"<tr><td colspan="4" class="text-center text-muted">No target-disease relationships found.</td></tr>"#
            .to_string()
    } else {
        links
            .iter()
            .map(|l| {
                format!(
                    r#"
            <tr>
                <td class="fw-bold">{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
            </tr>"#,
                    esc(&l.target_name),
                    esc(&l.disease_name),
                    cell(&l.relationship_type),
                    cell(&l.evidence_level),
                )
            })
            .collect()
    };

    let activities_html: String = if activities.is_empty() {
        r#"<tr><td colspan="5" class="text-center text-muted">No compound activity data found.</td></tr>"#
            .to_string()
    } else {
        activities
            .iter()
            .map(|a| {
                format!(
                    r#"
            <tr>
                <td class="fw-bold">{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{} {}</td>
                <td>{}</td>
            </tr>"#,
                    esc(&a.compound_name),
                    esc(&a.target_name),
                    cell(&a.activity_type),
                    cell_f64(a.activity_value),
                    a.activity_unit.as_deref().map(esc).unwrap_or_default(),
                    cell(&a.reference),
                )
            })
            .collect()
    };

    let main = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Relationship Management</h1>
    </div>

    <div class="card">
        <div class="card-header">Target-Disease Relationships</div>
        {disease_notice}
        <form method="post" action="/relationships/diseases" class="form-grid">
            <label>Select Target:
                <select name="target_id">
                    <option value="">Select a target...</option>
                    {targets}
                </select>
            </label>
            <label>Linked Diseases:
                <select name="disease_ids" multiple size="6">
                    {diseases}
                </select>
            </label>
            <label>Relationship Type
                <select name="relationship_type">
                    <option value="">—</option>
                    <option value="primary">Primary</option>
                    <option value="secondary">Secondary</option>
                    <option value="exploratory">Exploratory</option>
                </select>
            </label>
            <label>Evidence Level
                <select name="evidence_level">
                    <option value="">—</option>
                    <option value="strong">Strong</option>
                    <option value="moderate">Moderate</option>
                    <option value="hypothetical">Hypothetical</option>
                </select>
            </label>
            <div class="span-2">
                <button type="submit" class="btn btn-primary">Update Relationships</button>
            </div>
        </form>

        <h3>Current Target-Disease Relationships</h3>
        <table class="table">
            <thead>
                <tr><th>Target</th><th>Disease</th><th>Type</th><th>Evidence</th></tr>
            </thead>
            <tbody>{links_rows}</tbody>
        </table>
    </div>

    <div class="card">
        <div class="card-header">Compound Activity Data</div>
        {activity_notice}
        <form method="post" action="/relationships/activity" class="form-grid">
            <label>Select Compound:
                <select name="compound_id">
                    <option value="">Select a compound...</option>
                    {compounds}
                </select>
            </label>
            <label>Target:
                <select name="target_id">
                    <option value="">Select a target...</option>
                    {targets}
                </select>
            </label>
            <label>Activity Type:
                <input type="text" name="activity_type" placeholder="e.g., IC50, EC50, Ki">
            </label>
            <label>Activity Value:
                <input type="text" name="activity_value" placeholder="Enter value">
            </label>
            <label>Unit:
                <input type="text" name="activity_unit" placeholder="e.g., nM, µM">
            </label>
            <label>Reference:
                <input type="text" name="reference" placeholder="Publication or reference">
            </label>
            <div class="span-2">
                <button type="submit" class="btn btn-primary">Add Activity Data</button>
            </div>
        </form>

        <h3>Current Compound Activity Data</h3>
        <table class="table">
            <thead>
                <tr><th>Compound</th><th>Target</th><th>Activity Type</th><th>Value</th><th>Reference</th></tr>
            </thead>
            <tbody>{activity_rows}</tbody>
        </table>
    </div>"#,
        disease_notice = disease_notice.unwrap_or_default(),
        activity_notice = activity_notice.unwrap_or_default(),
        targets = options_html(&target_options, None),
        diseases = options_html(&disease_options, None),
        compounds = options_html(&compound_options, None),
        links_rows = links_html,
        activity_rows = activities_html,
    );

    Html(layout("Relationships", &main))
}
