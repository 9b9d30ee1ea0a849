//! HTTP request handlers for the wage compliance API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::TracingSink;
use crate::config::CaseFilter;
use crate::models::CaseRow;
use crate::pipeline::analyze_cases;
use crate::tables::CaseTable;

use super::request::ClassifyRequest;
use super::response::{ApiError, ApiErrorResponse, ClassifyResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .with_state(state)
}

/// Handler for POST /classify endpoint.
///
/// Classifies a batch of case rows against the reference indexes loaded
/// at startup and returns the records, report and diagnostics.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    // Generate an analysis ID for request tracking
    let analysis_id = Uuid::new_v4();
    info!(analysis_id = %analysis_id, "Processing classification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        analysis_id = %analysis_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        analysis_id = %analysis_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let filter = request.apply_filter.then(|| &state.config().filter);
    let cases = case_table(request.cases, filter);
    if cases.rows.is_empty() {
        warn!(
            analysis_id = %analysis_id,
            rows_read = cases.rows_read,
            "No cases left to classify"
        );
        return ApiErrorResponse::bad_request(ApiError::empty_batch()).into_response();
    }

    let mut sink = TracingSink::default();
    let analysis = analyze_cases(&cases, state.reference(), &state.config().report, &mut sink);
    let diagnostics = sink.into_diagnostics();

    info!(
        analysis_id = %analysis_id,
        records = analysis.records.len(),
        met = analysis.report.met_records,
        diagnostics = diagnostics.len(),
        "Classification completed successfully"
    );

    let response = ClassifyResponse {
        analysis_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        report: analysis.report,
        records: analysis.records,
        diagnostics,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

fn case_table(rows: Vec<CaseRow>, filter: Option<&CaseFilter>) -> CaseTable {
    let rows_read = rows.len();
    let rows: Vec<_> = match filter {
        Some(filter) => rows.into_iter().filter(|row| filter.accepts(row)).collect(),
        None => rows,
    };
    CaseTable {
        rows_filtered_out: rows_read - rows.len(),
        rows_read,
        rows,
    }
}
