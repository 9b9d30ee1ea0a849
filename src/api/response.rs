//! Response types for the wage compliance API.
//!
//! This module defines the success body for `/classify` and the error
//! response structure used for rejected requests.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CaseRecord, Diagnostic};
use crate::report::ComplianceReport;

/// Response body for a successful `/classify` call.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    /// Unique identifier for this analysis.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// Aggregated counts and ranked employers.
    pub report: ComplianceReport,
    /// One classified record per accepted case.
    pub records: Vec<CaseRecord>,
    /// Diagnostics produced while classifying.
    pub diagnostics: Vec<Diagnostic>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an empty batch error response.
    pub fn empty_batch() -> Self {
        Self::with_details(
            "EMPTY_BATCH",
            "No cases to classify",
            "The request contained no cases, or none passed the case filter",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}
