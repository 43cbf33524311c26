use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner with the available endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "ATS Resume Scorer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/analyze": "POST - Analyze resume against job description",
            "/api/v1/analyze/text": "POST - Analyze plain-text resume against job description",
            "/health": "GET - Health check"
        }
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ATS Resume Scorer"
    }))
}
