//! Request types for the wage compliance API.
//!
//! This module defines the JSON request structure for the `/classify` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::CaseRow;

/// Request body for the `/classify` endpoint.
///
/// # Example
///
/// ```
/// use wage_compliance::api::ClassifyRequest;
///
/// let request: ClassifyRequest = serde_json::from_str(r#"{"cases": []}"#).unwrap();
/// assert!(request.apply_filter);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Case rows keyed by their table column names.
    pub cases: Vec<CaseRow>,
    /// Drop rows that fail the configured visa class / full-time filter
    /// before classifying. Defaults to true.
    #[serde(default = "default_apply_filter")]
    pub apply_filter: bool,
}

fn default_apply_filter() -> bool {
    true
}
