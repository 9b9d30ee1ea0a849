//! Configuration loading and management for the wage compliance engine.
//!
//! This module provides functionality to load an analysis configuration
//! from YAML: input table locations, the case filter, report options and
//! the side log location.
//!
//! # Example
//!
//! ```no_run
//! use wage_compliance::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./fixtures/analysis.yaml").unwrap();
//! println!("Top employers: {}", loader.config().report.top_employers);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AnalysisConfig, CaseFilter, DEFAULT_TOP_EMPLOYERS, ReportConfig, TablePaths};
