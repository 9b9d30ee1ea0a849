//! Error types for the wage compliance engine.
//!
//! Every error here is a load-time failure: a missing configuration file,
//! an unreadable table, or a table whose header lacks a required column.
//! Classification itself never fails; see [`crate::models::Degradation`]
//! for how individual records degrade instead.

use thiserror::Error;

/// The main error type for the wage compliance engine.
///
/// # Example
///
/// ```
/// use wage_compliance::error::EngineError;
///
/// let error = EngineError::MissingColumn {
///     table: "geography".to_string(),
///     column: "StateAb".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Table 'geography' is missing required column 'StateAb'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A reference or case table could not be opened.
    #[error("Table file not found: {path}")]
    TableNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A table could not be read as delimited rows.
    #[error("Failed to read table '{table}': {message}")]
    TableParseError {
        /// The logical table name (e.g. "geography").
        table: String,
        /// A description of the read error.
        message: String,
    },

    /// A table header lacks a column the engine requires.
    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn {
        /// The logical table name.
        table: String,
        /// The header name that was not present.
        column: String,
    },

    /// The diagnostics log file could not be created.
    #[error("Failed to open log file '{path}': {message}")]
    LogFileError {
        /// The log file path.
        path: String,
        /// The underlying I/O error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/analysis.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/analysis.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field() {
        let error = EngineError::InvalidConfig {
            field: "report.top_employers".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for 'report.top_employers': must be at least 1"
        );
    }

    #[test]
    fn test_table_errors_display_context() {
        let not_found = EngineError::TableNotFound {
            path: "Geography.csv".to_string(),
        };
        assert_eq!(not_found.to_string(), "Table file not found: Geography.csv");

        let parse = EngineError::TableParseError {
            table: "cases".to_string(),
            message: "unequal lengths".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "Failed to read table 'cases': unequal lengths"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_column() -> EngineResult<()> {
            Err(EngineError::MissingColumn {
                table: "wage_scale".to_string(),
                column: "Level4".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_column()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
