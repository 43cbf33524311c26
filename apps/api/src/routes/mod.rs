pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and the job description on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/text", post(handlers::handle_analyze_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
