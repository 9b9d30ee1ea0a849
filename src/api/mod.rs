//! HTTP API module for the wage compliance engine.
//!
//! This module provides the REST endpoint for classifying case batches
//! against reference indexes loaded once at startup.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ClassifyRequest;
pub use response::{ApiError, ClassifyResponse};
pub use state::AppState;
