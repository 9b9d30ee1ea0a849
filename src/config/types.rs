//! Configuration types for an analysis run.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML analysis file. Every field has a
//! default, so an empty file describes the standard run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::CaseRow;

/// Default number of employers listed in the report.
pub const DEFAULT_TOP_EMPLOYERS: usize = 20;

/// Locations of the input tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablePaths {
    /// Geography reference table.
    pub geography: PathBuf,
    /// Wage-scale reference tables, layered in order (later files win).
    pub wage_scales: Vec<PathBuf>,
    /// Case input table.
    pub cases: PathBuf,
}

impl Default for TablePaths {
    fn default() -> Self {
        Self {
            geography: PathBuf::from("Geography.csv"),
            wage_scales: vec![PathBuf::from("ALC_Export.csv")],
            cases: PathBuf::from("h1b.csv"),
        }
    }
}

/// Which case rows are classified. Rows failing the filter are dropped
/// silently before classification.
///
/// # Example
///
/// ```
/// use wage_compliance::config::CaseFilter;
/// use wage_compliance::models::CaseRow;
///
/// let filter = CaseFilter::default();
/// let row = CaseRow {
///     visa_class: "H-1B".to_string(),
///     full_time_position: "Y".to_string(),
///     ..Default::default()
/// };
/// assert!(filter.accepts(&row));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseFilter {
    /// Required `VISA_CLASS` value (exact match).
    pub visa_class: String,
    /// Required `FULL_TIME_POSITION` value (exact match).
    pub full_time_position: String,
}

impl Default for CaseFilter {
    fn default() -> Self {
        Self {
            visa_class: "H-1B".to_string(),
            full_time_position: "Y".to_string(),
        }
    }
}

impl CaseFilter {
    /// Returns true if the row should be classified.
    pub fn accepts(&self, row: &CaseRow) -> bool {
        row.visa_class == self.visa_class && row.full_time_position == self.full_time_position
    }
}

/// Report options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// How many employers to list, ranked by total.
    pub top_employers: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_employers: DEFAULT_TOP_EMPLOYERS,
        }
    }
}

/// The complete analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Input table locations.
    pub tables: TablePaths,
    /// Case row filter.
    pub filter: CaseFilter,
    /// Report options.
    pub report: ReportConfig,
    /// Side log receiving diagnostics; truncated at the start of a run.
    pub log_file: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tables: TablePaths::default(),
            filter: CaseFilter::default(),
            report: ReportConfig::default(),
            log_file: PathBuf::from("error.log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: AnalysisConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.report.top_employers, 20);
        assert_eq!(config.filter.visa_class, "H-1B");
    }

    #[test]
    fn test_partial_yaml_overrides_fields() {
        let yaml = r#"
tables:
  wage_scales: [ALC_Export.csv, EDC_Export.csv]
report:
  top_employers: 5
"#;
        let config: AnalysisConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.tables.wage_scales.len(), 2);
        assert_eq!(config.tables.geography, PathBuf::from("Geography.csv"));
        assert_eq!(config.report.top_employers, 5);
        assert_eq!(config.log_file, PathBuf::from("error.log"));
    }

    #[test]
    fn test_filter_requires_exact_match() {
        let filter = CaseFilter::default();
        let row = CaseRow {
            visa_class: "h-1b".to_string(),
            full_time_position: "Y".to_string(),
            ..Default::default()
        };
        assert!(!filter.accepts(&row));
    }
}
