//! Application state for the wage compliance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::pipeline::ReferenceData;

/// Shared application state.
///
/// The reference indexes are built once at startup and only read by
/// handlers, so they are shared without locking.
#[derive(Clone)]
pub struct AppState {
    reference: Arc<ReferenceData>,
    config: Arc<AnalysisConfig>,
}

impl AppState {
    /// Creates a new application state from built indexes and configuration.
    pub fn new(reference: ReferenceData, config: AnalysisConfig) -> Self {
        Self {
            reference: Arc::new(reference),
            config: Arc::new(config),
        }
    }

    /// Returns the reference indexes.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Returns the analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_reference_data() {
        let state = AppState::new(ReferenceData::default(), AnalysisConfig::default());
        let clone = state.clone();
        assert!(std::ptr::eq(state.reference(), clone.reference()));
    }
}
