pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::enhance::handlers::{handle_enhance_job_description, handle_enhance_summary};
use crate::errors::collapse_to_bad_request;
use crate::ingest::handlers::handle_upload_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let legacy_error_status = state.config.legacy_error_status;

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ai/enhance-pro-sum", post(handle_enhance_summary))
        .route("/api/ai/enhance-job-desc", post(handle_enhance_job_description))
        .route("/api/ai/upload-resume", post(handle_upload_resume))
        .with_state(state);

    if legacy_error_status {
        router.layer(middleware::map_response(collapse_to_bad_request))
    } else {
        router
    }
}
