//! Axum route handlers for the résumé API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::{ApiPath, AppError};
use crate::models::resume::{ResumeRecord, ResumeSummary};
use crate::resumes::upload::{process_upload, read_upload};
use crate::state::AppState;

/// POST /upload/
///
/// Stores the uploaded file, extracts fields, asks the LLM for a review,
/// and persists the result. Sub-step failures that are reported as data
/// (`{"error": ...}`) still produce a 200.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    let record = process_upload(&state, upload).await?;
    Ok(Json(record))
}

/// GET /resumes/
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

/// GET /resumes/:id
///
/// Unknown ids answer `200 {}` rather than 404.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>, AppError> {
    let body = match state.store.get(id).await? {
        Some(record) => serde_json::to_value(record).map_err(anyhow::Error::from)?,
        None => json!({}),
    };
    Ok(Json(body))
}
