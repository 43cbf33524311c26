//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{PlainTextExtractor, TextExtractor};
use crate::scoring::report::AnalysisReport;
use crate::state::AppState;

const BYTES_PER_MB: usize = 1024 * 1024;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub job_description: String,
}

struct UploadedResume {
    filename: String,
    bytes: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Multipart form with a `resume` PDF file and a `job_description` text field.
/// Returns the full ATS report, or 422 when no text can be extracted from the PDF.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume: Option<UploadedResume> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(invalid_form)?;
                resume = Some(UploadedResume {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            Some("job_description") => {
                job_description = Some(field.text().await.map_err(invalid_form)?);
            }
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("A resume PDF file is required.".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("A job description is required.".to_string()))?;

    info!(
        "Received analyze request - Filename: {}, Size: {:.2} MB",
        resume.filename,
        resume.bytes.len() as f64 / BYTES_PER_MB as f64
    );

    if !resume.filename.to_lowercase().ends_with(".pdf") {
        warn!("Invalid file type: {}", resume.filename);
        return Err(AppError::Validation(
            "Only PDF files are supported. Please upload a PDF resume.".to_string(),
        ));
    }

    let max_bytes = state.config.max_upload_bytes;
    if resume.bytes.len() > max_bytes {
        warn!("File too large: {} bytes", resume.bytes.len());
        return Err(AppError::Validation(format!(
            "File size too large. Maximum size is {}MB.",
            max_bytes / BYTES_PER_MB
        )));
    }

    validate_job_description(&job_description, state.config.min_job_description_chars)?;

    let extractor = state.extractor.clone();
    run_analysis(&state, resume.bytes, job_description, extractor).await
}

/// POST /api/v1/analyze/text
///
/// Same analysis for callers that already hold the resume as plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    validate_job_description(
        &request.job_description,
        state.config.min_job_description_chars,
    )?;

    run_analysis(
        &state,
        request.resume_text.into_bytes(),
        request.job_description,
        Arc::new(PlainTextExtractor),
    )
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs extraction + scoring on the blocking pool; a failed report becomes a 422.
async fn run_analysis(
    state: &AppState,
    document: Vec<u8>,
    job_description: String,
    extractor: Arc<dyn TextExtractor>,
) -> Result<Json<AnalysisReport>, AppError> {
    let analysis_id = Uuid::new_v4();
    let span = info_span!("analysis", %analysis_id);
    let scorer = state.scorer.clone();

    let report = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        scorer.analyze_document(&document, &job_description, extractor.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;

    if !report.success {
        let message = report
            .error
            .unwrap_or_else(|| "Error analyzing resume".to_string());
        warn!(%analysis_id, "Extraction failed: {message}");
        return Err(AppError::Extraction(message));
    }

    info!(%analysis_id, "Analysis complete. Score: {}", report.overall_score);
    Ok(Json(report))
}

fn validate_job_description(job_description: &str, min_chars: usize) -> Result<(), AppError> {
    let length = job_description.trim().chars().count();
    if length < min_chars {
        warn!("Job description too short: {length} characters");
        return Err(AppError::Validation(
            "Job description is too short. Please provide a detailed job description."
                .to_string(),
        ));
    }
    Ok(())
}

fn invalid_form(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart form: {e}"))
}
