//! Diseases page — table and add form.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::handlers::{alert, cell, esc, form_text, layout, required_name};
use crate::state::SharedState;
use targetdesk_db::{DiseaseRepository, NewDisease};

#[derive(Deserialize)]
pub struct DiseaseForm {
    pub name: Option<String>,
    pub category: Option<String>,
    pub etiology: Option<String>,
    pub prevalence: Option<String>,
    pub treatment_landscape: Option<String>,
    pub unmet_needs: Option<String>,
}

pub async fn diseases_page(State(state): State<SharedState>) -> Html<String> {
    render(&state, None).await
}

pub async fn diseases_create(
    State(state): State<SharedState>,
    Form(form): Form<DiseaseForm>,
) -> Html<String> {
    let Some(name) = required_name(&form.name) else {
        return render(&state, Some(alert("warning", "Disease name is required."))).await;
    };

    let new = NewDisease {
        name,
        category: form_text(form.category),
        description: None,
        etiology: form_text(form.etiology),
        prevalence: form_text(form.prevalence),
        patient_population: None,
        treatment_landscape: form_text(form.treatment_landscape),
        unmet_needs: form_text(form.unmet_needs),
    };

    let notice = match DiseaseRepository::new(state.db.clone()).insert(&new).await {
        Ok(disease) => alert("success", &format!("Disease added: {}", disease.name)),
        Err(e) => {
            tracing::error!("failed to add disease: {e}");
            alert("danger", "Could not save the disease. Please try again.")
        }
    };

    render(&state, Some(notice)).await
}

async fn render(state: &SharedState, notice: Option<String>) -> Html<String> {
    let diseases = DiseaseRepository::new(state.db.clone())
        .list()
        .await
        .unwrap_or_default();

    let rows_html: String = if diseases.is_empty() {
        r#"<tr><td colspan="5" class="text-center text-muted">No diseases recorded yet.</td></tr>"#
            .to_string()
    } else {
        diseases
            .iter()
            .map(|d| {
                format!(
                    r#"
            <tr>
                <td class="text-muted">{}</td>
                <td class="fw-bold">{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
            </tr>"#,
                    d.id,
                    esc(&d.name),
                    cell(&d.category),
                    cell(&d.etiology),
                    cell(&d.prevalence),
                )
            })
            .collect()
    };

    let main = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Diseases</h1>
    </div>
    {notice}

    <div class="card">
        <div class="card-header">Disease List</div>
        <table class="table">
            <thead>
                <tr><th>#</th><th>Name</th><th>Category</th><th>Etiology</th><th>Prevalence</th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    </div>

    <div class="card">
        <div class="card-header">Add New Disease</div>
        <form method="post" action="/diseases" class="form-grid">
            <label>Disease Name *
                <input type="text" name="name" placeholder="Enter disease name">
            </label>
            <label>Category
                <input type="text" name="category" placeholder="e.g., Infectious, Neurological">
            </label>
            <label>Prevalence
                <input type="text" name="prevalence" placeholder="e.g., 1 in 1000">
            </label>
            <label class="span-2">Etiology
                <textarea name="etiology" rows="3" placeholder="Enter disease etiology"></textarea>
            </label>
            <label class="span-2">Treatment Landscape
                <textarea name="treatment_landscape" rows="3" placeholder="Enter treatment landscape"></textarea>
            </label>
            <label class="span-2">Unmet Needs
                <textarea name="unmet_needs" rows="3" placeholder="Enter unmet medical needs"></textarea>
            </label>
            <div class="span-2">
                <button type="submit" class="btn btn-primary">Add Disease</button>
            </div>
        </form>
    </div>"#,
        notice = notice.unwrap_or_default(),
        rows = rows_html,
    );

    Html(layout("Diseases", &main))
}
