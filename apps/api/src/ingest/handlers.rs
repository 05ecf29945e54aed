use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Requester;
use crate::errors::AppError;
use crate::ingest::{ingest_resume, IngestParams};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeRequest {
    pub resume_text: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeResponse {
    pub resume_id: Uuid,
}

/// POST /api/ai/upload-resume
///
/// Extracts structured fields from raw resume text and stores them as a new
/// resume owned by the authenticated requester.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Requester(owner_id): Requester,
    payload: Result<Json<UploadResumeRequest>, JsonRejection>,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let Json(request) = payload?;

    let resume_id = ingest_resume(
        state.llm.as_ref(),
        state.store.as_ref(),
        IngestParams {
            owner_id,
            title: request.title.as_deref(),
            resume_text: request.resume_text.as_deref(),
            model: &state.config.gemini_model,
        },
    )
    .await?;

    Ok(Json(UploadResumeResponse { resume_id }))
}
