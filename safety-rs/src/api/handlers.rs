//! API request handlers

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::SafetyError;
use crate::scoring::{SafetyScorer, ScoreResult};

/// Static text served at the root path
pub const WELCOME_MESSAGE: &str = "Welcome to the Email Safety Checker API";

/// Shared application state
pub struct AppState {
    pub scorer: SafetyScorer,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

impl IntoResponse for SafetyError {
    fn into_response(self) -> Response {
        let status = match self {
            SafetyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ApiError::new(&self.to_string()))).into_response()
    }
}

/// GET / - Welcome text
pub async fn index() -> &'static str {
    WELCOME_MESSAGE
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "safety-rs",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /check_email - Score the `email_content` field of a JSON body
pub async fn check_email(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ScoreResult>, SafetyError> {
    let request: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected check_email body: {}", e);
        SafetyError::InvalidRequest(format!("body is not valid JSON: {}", e))
    })?;

    let content = email_content(&request);
    let assessment = state.scorer.assess(&content);

    debug!(
        score = assessment.score,
        band = ?assessment.band,
        deductions = assessment.deductions.len(),
        sender = ?assessment.sender_domain,
        "Scored email content ({} chars)",
        content.chars().count()
    );

    Ok(Json(assessment.into()))
}

/// Lower-cased `email_content`; absent or non-string values read as empty
pub fn email_content(request: &Value) -> String {
    request
        .get("email_content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase()
}
