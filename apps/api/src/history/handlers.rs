//! Axum route handlers for the draft/history API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::store;
use crate::models::record::{PolicyRecordRow, RECORD_TYPE_DRAFT, RECORD_TYPE_POLICY};
use crate::policy::export::export_filename;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    /// Raw AnswerSet JSON as the wizard holds it — may be mid-step, stored
    /// opaquely and never re-validated on save.
    pub data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePolicyRequest {
    pub data: Value,
    pub policy_content: String,
    pub generated_at: String,
}

/// POST /api/v1/users/:user_id/drafts
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<SaveDraftRequest>,
) -> Result<Json<PolicyRecordRow>, AppError> {
    let record =
        store::insert_record(&state.db, user_id, RECORD_TYPE_DRAFT, request.data, None, None)
            .await?;
    info!("Saved draft {} for user {user_id}", record.id);
    Ok(Json(record))
}

/// GET /api/v1/users/:user_id/drafts/latest
///
/// `null` body when the user has no draft yet — a normal precondition for a
/// fresh session, not an error.
pub async fn handle_latest_draft(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Option<PolicyRecordRow>>, AppError> {
    let draft = store::latest_draft(&state.db, user_id).await?;
    Ok(Json(draft))
}

/// POST /api/v1/users/:user_id/policies
pub async fn handle_save_policy(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<SavePolicyRequest>,
) -> Result<Json<PolicyRecordRow>, AppError> {
    if request.policy_content.trim().is_empty() {
        return Err(AppError::Validation(
            "policyContent cannot be empty".to_string(),
        ));
    }

    let record = store::insert_record(
        &state.db,
        user_id,
        RECORD_TYPE_POLICY,
        request.data,
        Some(request.policy_content),
        Some(request.generated_at),
    )
    .await?;
    info!("Saved policy {} for user {user_id}", record.id);
    Ok(Json(record))
}

/// GET /api/v1/users/:user_id/history
pub async fn handle_history(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<PolicyRecordRow>>, AppError> {
    let records = store::list_records(&state.db, user_id).await?;
    Ok(Json(records))
}

/// DELETE /api/v1/users/:user_id/records/:record_id
pub async fn handle_delete_record(
    State(state): State<AppState>,
    Path((user_id, record_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let deleted = store::delete_record(&state.db, user_id, record_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Record {record_id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/:user_id/records/:record_id/export
///
/// Downloads a stored policy as a Markdown file named from the sanitized
/// project-name slug plus the record's creation date.
pub async fn handle_export(
    State(state): State<AppState>,
    Path((user_id, record_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, AppError> {
    let record = store::get_record(&state.db, user_id, record_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Record {record_id} not found")))?;

    let content = record.policy_content.ok_or_else(|| {
        AppError::Validation("Record has no generated policy to export".to_string())
    })?;

    let project_name = record
        .data
        .get("projectName")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let filename = export_filename(project_name, record.created_at.date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content,
    )
        .into_response())
}
