//! Axum route handlers for the optimize endpoint.

use axum::{extract::State, http::StatusCode, Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::gateway::prompts::build_optimize_prompt;
use crate::state::AppState;

/// Returned with 400 when either field is absent or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "CV et description du poste requis";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    #[serde(default)]
    pub resume: Option<Value>,
    #[serde(default)]
    pub job_description: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub optimized_resume: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/optimize
///
/// Presence check only: no trimming, no length limits, no type checks. A body that
/// is not a JSON object is treated as if both fields were missing.
pub async fn handle_optimize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OptimizeResponse>, AppError> {
    let request: OptimizeRequest = serde_json::from_slice(&body).unwrap_or_default();

    let (resume, job_description) = match (
        present(request.resume),
        present(request.job_description),
    ) {
        (Some(resume), Some(job_description)) => (resume, job_description),
        _ => return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
    };

    info!(
        resume_len = resume.len(),
        job_description_len = job_description.len(),
        "Optimizing resume"
    );

    let prompt = build_optimize_prompt(&resume, &job_description);
    let optimized_resume = state.generator.generate(&prompt).await?;

    info!(
        optimized_len = optimized_resume.len(),
        "Resume optimized"
    );

    Ok(Json(OptimizeResponse { optimized_resume }))
}

/// OPTIONS /api/optimize
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /api/optimize.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Truthiness check: `null`, `false`, `0` and `""` count as missing.
/// Other scalars are stringified; arrays and objects keep their JSON text.
fn present(field: Option<Value>) -> Option<String> {
    match field? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) => (!text.is_empty()).then_some(text),
        Value::Number(n) => (n.as_f64() != Some(0.0)).then(|| n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        other => Some(other.to_string()),
    }
}
