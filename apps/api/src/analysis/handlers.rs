//! Axum route handlers for resume scoring and batch ranking.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::{
    analyze_resume, is_resume, rank_resumes, ScoreReport, ScoredResume, BEST_RESUME_LIMIT,
};
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::{collect_files, ScopedUpload, UploadedFile};

const RESUME_FIELD: &str = "resume";
const RESUMES_FIELD: &str = "resumes";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: i32,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BestResumesResponse {
    pub best_resumes: Vec<ScoredResume>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /score
///
/// Scores a single resume uploaded under the `resume` field.
pub async fn handle_score(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let missing = || AppError::MissingUpload("No resume uploaded".to_string());
    let multipart = multipart.map_err(|_| missing())?;
    let upload = collect_files(multipart, RESUME_FIELD)
        .await?
        .into_iter()
        .next()
        .ok_or_else(missing)?;

    let report = score_upload(&state, &upload).await?.ok_or_else(|| {
        debug!("Rejected {}: no resume keywords", upload.filename);
        AppError::InvalidResume
    })?;

    let urgent = report
        .suggestions
        .iter()
        .filter(|s| s.priority.rank() == 1)
        .count();
    info!(
        "Scored {}: {} ({} suggestions, {urgent} high priority)",
        upload.filename,
        report.score,
        report.suggestions.len()
    );
    Ok(Json(ScoreResponse {
        score: report.score,
        suggestions: report.suggestion_texts(),
    }))
}

/// POST /best5
///
/// Scores every file under the `resumes` field and returns the top five.
/// Files that fail extraction or validation are skipped without being reported.
pub async fn handle_best_resumes(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BestResumesResponse>, AppError> {
    let missing = || AppError::MissingUpload("No resumes uploaded".to_string());
    let multipart = multipart.map_err(|_| missing())?;
    let uploads = collect_files(multipart, RESUMES_FIELD).await?;
    if uploads.is_empty() {
        return Err(missing());
    }

    let submitted = uploads.len();
    let mut scored = Vec::with_capacity(submitted);
    for upload in uploads {
        match score_upload(&state, &upload).await {
            Ok(Some(report)) => scored.push(ScoredResume {
                suggestions: report.suggestion_texts(),
                filename: upload.filename,
                score: report.score,
            }),
            Ok(None) => debug!("Skipping {}: no resume keywords", upload.filename),
            Err(e) => warn!("Skipping {}: {e}", upload.filename),
        }
    }

    info!("Ranked {} of {submitted} submitted resumes", scored.len());
    Ok(Json(BestResumesResponse {
        best_resumes: rank_resumes(scored, BEST_RESUME_LIMIT),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Extracts and scores one upload. `Ok(None)` means the text is not a resume.
async fn score_upload(
    state: &AppState,
    upload: &UploadedFile,
) -> Result<Option<ScoreReport>, AppError> {
    let text = extract_upload_text(state, upload).await?;
    if !is_resume(&text) {
        return Ok(None);
    }
    Ok(Some(analyze_resume(&text)))
}

/// Copies the upload to a scoped temp file and extracts its text on the blocking pool.
/// The temp file is gone when this returns, whatever the outcome.
async fn extract_upload_text(state: &AppState, upload: &UploadedFile) -> Result<String, AppError> {
    let dir = state.config.upload_dir.clone();
    let extractor = Arc::clone(&state.extractor);
    let upload = upload.clone();

    tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let scoped = ScopedUpload::write(&dir, &upload)?;
        let text = extractor.extract(scoped.path())?;
        if let Err(e) = scoped.close() {
            warn!("Failed to remove temp file for {}: {e}", upload.filename);
        }
        Ok(text)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
