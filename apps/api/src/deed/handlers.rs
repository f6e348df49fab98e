//! Axum route handlers for deed generation and retrieval.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::deed::fields::SaleDeedFields;
use crate::deed::template;
use crate::errors::AppError;
use crate::layout::{paginate, HelveticaMetrics};
use crate::pdf::{self, Logo};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub document_id: Uuid,
    pub page_count: usize,
}

/// POST /generate-pdf
///
/// Full generation pipeline: validate fields → render template → paginate →
/// assemble PDF → store. Validation failures abort before any rendering or
/// drawing work; nothing partial is ever stored.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(fields): Json<SaleDeedFields>,
) -> Result<Json<GenerateResponse>, AppError> {
    if let Some(field) = fields.first_missing() {
        return Err(AppError::MissingField(field));
    }

    let text = template::sanitize(&template::render(&fields));

    let logo_bytes = tokio::fs::read(&state.config.logo_path).await.map_err(|e| {
        AppError::Asset(format!(
            "failed to read logo '{}': {e}",
            state.config.logo_path
        ))
    })?;
    let logo = Logo::from_png_bytes(&logo_bytes)?;

    // Pagination + assembly are CPU-bound; keep them off the async executor.
    let params = state.layout.clone();
    let (pdf_bytes, page_count) = tokio::task::spawn_blocking(move || {
        let lines = template::source_lines(&text);
        let start_cursor = params.top_cursor() - logo.display_height - pdf::LOGO_GAP;
        let layout = paginate(&lines, &params, &HelveticaMetrics, start_cursor);
        let bytes = pdf::assemble(&layout, &params, &logo);
        (bytes, layout.page_count)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("pdf assembly task failed: {e}")))?;

    let document_id = state.store.insert(pdf_bytes).await?;
    info!(%document_id, page_count, "sale deed generated and stored");

    Ok(Json(GenerateResponse {
        success: true,
        document_id,
        page_count,
    }))
}

/// GET /download-pdf/:id
///
/// The path segment must be a well-formed UUID before the store is queried;
/// a well-formed but unknown id is a 404.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidId(id))?;

    let deed = state
        .store
        .fetch(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"sale_deed_{id}.pdf\""),
        ),
    ];
    Ok((headers, Bytes::from(deed.pdf_data)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
