//! Structures page — table, multipart add form, and the 3D viewer model API.

use axum::{
    extract::{Multipart, Path, State},
    response::Html,
    Json,
};

use crate::error::ApiError;
use crate::handlers::{alert, cell, cell_f64, layout, options_html};
use crate::state::SharedState;
use targetdesk_db::{NewStructure, StructureRepository, TargetRepository};
use targetdesk_structures::{parse_pdb, ModelData, StructureFetcher};

pub async fn structures_page(State(state): State<SharedState>) -> Html<String> {
    render(&state, None).await
}

/// POST /structures — multipart: target_id, pdb_id, resolution, description
/// and an optional PDB file stored under `uploads/structures/`.
pub async fn structures_create(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Html<String> {
    let mut target_id: Option<i32> = None;
    let mut pdb_id: Option<String> = None;
    let mut resolution: Option<f64> = None;
    let mut description: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut fetch_rcsb = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("malformed structure upload: {e}");
                return render(&state, Some(alert("danger", "Upload could not be read."))).await;
            }
        };

        let key = field.name().unwrap_or("").to_string();
        match key.as_str() {
            "target_id" => {
                target_id = field.text().await.ok().and_then(|v| v.trim().parse().ok());
            }
            "pdb_id" => {
                pdb_id = field
                    .text()
                    .await
                    .ok()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty());
            }
            "resolution" => {
                resolution = field.text().await.ok().and_then(|v| v.trim().parse().ok());
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .ok()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty());
            }
            "fetch_rcsb" => {
                fetch_rcsb = field.text().await.map(|v| v == "on").unwrap_or(false);
            }
            "file" => {
                let name = field.file_name().unwrap_or("").to_string();
                if let Ok(bytes) = field.bytes().await {
                    if !name.is_empty() && !bytes.is_empty() {
                        file_name = Some(name);
                        file_bytes = Some(bytes.to_vec());
                    }
                }
            }
            _ => {}
        }
    }

    let Some(target_id) = target_id else {
        return render(&state, Some(alert("warning", "A target must be selected."))).await;
    };

    // Store the uploaded file first so a rejected extension never creates a row.
    let mut file_path = None;
    if let (Some(name), Some(bytes)) = (file_name, file_bytes) {
        match state.uploads.store(&name, &bytes).await {
            Ok(path) => file_path = Some(path.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::error!("structure file rejected: {e}");
                return render(&state, Some(alert("danger", &format!("File rejected: {e}")))).await;
            }
        }
    } else if fetch_rcsb {
        let Some(pdb_id) = pdb_id.as_deref() else {
            return render(
                &state,
                Some(alert("warning", "A PDB ID is required to fetch from RCSB.")),
            )
            .await;
        };
        let fetcher = StructureFetcher::new(state.uploads.structures_dir());
        match fetcher.fetch_pdb(pdb_id).await {
            Ok(path) => file_path = Some(path.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::error!("RCSB fetch failed for {pdb_id}: {e}");
                return render(
                    &state,
                    Some(alert("danger", &format!("Could not fetch {pdb_id} from RCSB."))),
                )
                .await;
            }
        }
    }

    let new = NewStructure {
        target_id: Some(target_id),
        pdb_id,
        resolution,
        file_path,
        description,
    };

    let notice = match StructureRepository::new(state.db.clone()).insert(&new).await {
        Ok(structure) => alert("success", &format!("Structure #{} added.", structure.id)),
        Err(e) => {
            tracing::error!("failed to add structure: {e}");
            alert("danger", "Could not save the structure. Please try again.")
        }
    };

    render(&state, Some(notice)).await
}

async fn render(state: &SharedState, notice: Option<String>) -> Html<String> {
    let structures = StructureRepository::new(state.db.clone())
        .list_with_target()
        .await
        .unwrap_or_default();

    let target_options = TargetRepository::new(state.db.clone())
        .options()
        .await
        .unwrap_or_default();

    let rows_html: String = if structures.is_empty() {
        r#"<tr><td colspan="5" class="text-center text-muted">No structures recorded yet.</td></tr>"#
            .to_string()
    } else {
        structures
            .iter()
            .map(|s| {
                let view = if s.file_path.is_some() {
                    format!(
                        r#"<button class="btn btn-outline btn-sm" onclick="viewStructure({})">View 3D</button>"#,
                        s.id
                    )
                } else {
                    String::new()
                };
                format!(
                    r#"
            <tr>
                <td class="text-muted">{}</td>
                <td class="fw-bold">{}</td>
                <td><code>{}</code></td>
                <td>{}</td>
                <td>{}</td>
            </tr>"#,
                    s.id,
                    cell(&s.target_name),
                    cell(&s.pdb_id),
                    cell_f64(s.resolution),
                    view,
                )
            })
            .collect()
    };

    let main = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Protein Structures</h1>
    </div>
    {notice}

    <div class="card">
        <div class="card-header">Structure List</div>
        <table class="table">
            <thead>
                <tr><th>#</th><th>Target</th><th>PDB ID</th><th>Resolution (Å)</th><th></th></tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    </div>

    <div class="grid-2">
        <div class="card">
            <div class="card-header">Add New Structure</div>
            <form method="post" action="/structures" enctype="multipart/form-data" class="form-grid">
                <label>Target *
                    <select name="target_id">
                        <option value="">Select a target...</option>
                        {targets}
                    </select>
                </label>
                <label>PDB ID
                    <input type="text" name="pdb_id" placeholder="e.g., 1XYZ">
                </label>
                <label>Resolution (Å)
                    <input type="text" name="resolution" placeholder="e.g., 2.1">
                </label>
                <label>Upload PDB File
                    <input type="file" name="file" accept=".pdb">
                </label>
                <label>Or fetch from RCSB
                    <input type="checkbox" name="fetch_rcsb">
                </label>
                <label class="span-2">Description
                    <textarea name="description" rows="3"></textarea>
                </label>
                <div class="span-2">
                    <button type="submit" class="btn btn-primary">Add Structure</button>
                </div>
            </form>
        </div>

        <div class="card">
            <div class="card-header">Structure Visualization</div>
            <p class="text-muted">3D rendering of the stored PDB file.</p>
            <div id="structure-viewer" style="height: 400px; position: relative;"></div>
        </div>
    </div>
    <script src="https://unpkg.com/3dmol@2.0.4/build/3Dmol-min.js"></script>
    <script src="/static/js/structure-viewer.js"></script>"#,
        notice = notice.unwrap_or_default(),
        rows = rows_html,
        targets = options_html(&target_options, None),
    );

    Html(layout("Structures", &main))
}

/// GET /api/structures/{id}/model — parsed atom/bond model for the viewer.
pub async fn api_structure_model(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ModelData>, ApiError> {
    let structure = StructureRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("structure {id}")))?;

    let path = structure
        .file_path
        .ok_or_else(|| ApiError::NotFound(format!("structure {id} has no stored file")))?;

    let text = tokio::fs::read_to_string(&path).await?;
    Ok(Json(parse_pdb(&text)))
}
