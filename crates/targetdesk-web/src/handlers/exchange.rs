//! Import/export page, CSV import upload and CSV export download.

use axum::{
    extract::{Multipart, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::{alert, layout};
use crate::state::SharedState;
use targetdesk_db::{
    CompoundRepository, DiseaseRepository, RelationRepository, StructureRepository,
    TargetRepository,
};
use targetdesk_exchange::csv_io::{
    self, activities_to_csv, compounds_to_csv, diseases_to_csv, links_to_csv, structures_to_csv,
    targets_to_csv,
};
use targetdesk_exchange::ExportKind;

const KIND_OPTIONS: &str = r#"
                    <option value="targets">Targets</option>
                    <option value="diseases">Diseases</option>
                    <option value="compounds">Compounds</option>
                    <option value="structures">Structures</option>
                    <option value="target_diseases">Target-Disease Relationships</option>
                    <option value="compound_activities">Compound Activities</option>"#;

pub async fn exchange_page(State(_state): State<SharedState>) -> Html<String> {
    Html(render(None))
}

/// POST /exchange/import — store the uploaded CSV and count its data rows.
/// Mapping rows onto entities is not implemented.
pub async fn exchange_import(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Html<String> {
    let mut kind = "targets".to_string();
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("malformed import upload: {e}");
                return Html(render(Some(alert("danger", "Upload could not be read."))));
            }
        };

        match field.name().unwrap_or("") {
            "kind" => {
                if let Ok(v) = field.text().await {
                    kind = v;
                }
            }
            "file" => {
                file_name = field.file_name().map(str::to_string);
                file_bytes = field.bytes().await.ok().map(|b| b.to_vec());
            }
            _ => {}
        }
    }

    let (Some(name), Some(bytes)) = (file_name, file_bytes) else {
        return Html(render(Some(alert("warning", "Choose a CSV file to import."))));
    };

    match state.uploads.store_import(&kind, &name, &bytes).await {
        Ok(path) => {
            let notice = match csv_io::count_csv_rows(&bytes) {
                Ok(rows) => {
                    tracing::info!(rows, kind, path = %path.display(), "import received");
                    alert(
                        "success",
                        &format!("Successfully imported {rows} rows for {kind}"),
                    )
                }
                Err(e) => {
                    tracing::error!("import parse failed: {e}");
                    alert("danger", "The uploaded file could not be parsed as CSV.")
                }
            };
            Html(render(Some(notice)))
        }
        Err(e) => {
            tracing::error!("import rejected: {e}");
            Html(render(Some(alert("danger", &format!("Import rejected: {e}")))))
        }
    }
}

#[derive(Deserialize)]
pub struct ExportQuery {
    pub kind: String,
}

/// GET /exchange/export?kind=... — full-table CSV as an attachment.
pub async fn exchange_export(
    State(state): State<SharedState>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let kind =
        ExportKind::from_str(&query.kind).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let csv = match kind {
        ExportKind::Targets => {
            targets_to_csv(&TargetRepository::new(state.db.clone()).list().await?)
        }
        ExportKind::Diseases => {
            diseases_to_csv(&DiseaseRepository::new(state.db.clone()).list().await?)
        }
        ExportKind::Compounds => {
            compounds_to_csv(&CompoundRepository::new(state.db.clone()).list().await?)
        }
        ExportKind::Structures => {
            structures_to_csv(&StructureRepository::new(state.db.clone()).list().await?)
        }
        ExportKind::TargetDiseases => {
            links_to_csv(&RelationRepository::new(state.db.clone()).list_links().await?)
        }
        ExportKind::CompoundActivities => activities_to_csv(
            &RelationRepository::new(state.db.clone())
                .list_activities()
                .await?,
        ),
    }
    .map_err(|e| ApiError::Internal(anyhow::anyhow!("export failed: {e}")))?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{}_{}.csv", kind.as_str(), stamp);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|_| ApiError::Internal(anyhow::anyhow!("invalid export filename")))?,
    );

    Ok((StatusCode::OK, headers, csv))
}

fn render(notice: Option<String>) -> String {
    let main = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Data Import &amp; Export</h1>
    </div>
    {notice}

    <div class="grid-2">
        <div class="card">
            <div class="card-header">Import</div>
            <form method="post" action="/exchange/import" enctype="multipart/form-data" class="form-grid">
                <label class="span-2">Select data to import:
                    <select name="kind">{kinds}
                    </select>
                </label>
                <label class="span-2">CSV File
                    <input type="file" name="file" accept=".csv">
                </label>
                <div class="span-2">
                    <button type="submit" class="btn btn-primary">Import CSV</button>
                </div>
            </form>
        </div>

        <div class="card">
            <div class="card-header">Export</div>
            <form method="get" action="/exchange/export" class="form-grid">
                <label class="span-2">Select data to export:
                    <select name="kind">{kinds}
                    </select>
                </label>
                <div class="span-2">
                    <button type="submit" class="btn btn-primary">Export CSV</button>
                </div>
            </form>
        </div>
    </div>"#,
        notice = notice.unwrap_or_default(),
        kinds = KIND_OPTIONS,
    );

    layout("Import / Export", &main)
}
