use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::{enhance, EnhancementKind};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementRequest {
    pub user_content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResponse {
    pub enhanced_content: String,
}

/// POST /api/ai/enhance-pro-sum
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
    payload: Result<Json<EnhancementRequest>, JsonRejection>,
) -> Result<Json<EnhancementResponse>, AppError> {
    run(EnhancementKind::ProfessionalSummary, &state, payload).await
}

/// POST /api/ai/enhance-job-desc
pub async fn handle_enhance_job_description(
    State(state): State<AppState>,
    payload: Result<Json<EnhancementRequest>, JsonRejection>,
) -> Result<Json<EnhancementResponse>, AppError> {
    run(EnhancementKind::JobDescription, &state, payload).await
}

async fn run(
    kind: EnhancementKind,
    state: &AppState,
    payload: Result<Json<EnhancementRequest>, JsonRejection>,
) -> Result<Json<EnhancementResponse>, AppError> {
    let Json(request) = payload?;
    let enhanced_content = enhance(
        kind,
        request.user_content.as_deref(),
        state.llm.as_ref(),
        &state.config.gemini_model,
    )
    .await?;
    Ok(Json(EnhancementResponse { enhanced_content }))
}
