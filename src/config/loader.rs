//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading an analysis
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::AnalysisConfig;

/// Loads and validates an analysis configuration.
///
/// Relative table and log paths are resolved against the directory that
/// contains the configuration file, so a run does not depend on the
/// current working directory.
///
/// # Example
///
/// ```no_run
/// use wage_compliance::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./fixtures/analysis.yaml")?;
/// println!("Cases: {}", loader.config().tables.cases.display());
/// # Ok::<(), wage_compliance::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AnalysisConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: AnalysisConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_config(config, base_dir)
    }

    /// Validates an in-memory configuration, resolving relative paths
    /// against `base_dir`.
    pub fn from_config(mut config: AnalysisConfig, base_dir: &Path) -> EngineResult<Self> {
        Self::validate(&config)?;

        let tables = &mut config.tables;
        tables.geography = resolve(base_dir, &tables.geography);
        tables.cases = resolve(base_dir, &tables.cases);
        for wage_scale in &mut tables.wage_scales {
            *wage_scale = resolve(base_dir, wage_scale);
        }
        config.log_file = resolve(base_dir, &config.log_file);

        Ok(Self { config })
    }

    /// Returns the validated configuration with resolved paths.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AnalysisConfig {
        self.config
    }

    fn validate(config: &AnalysisConfig) -> EngineResult<()> {
        if config.report.top_employers == 0 {
            return Err(EngineError::InvalidConfig {
                field: "report.top_employers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.tables.wage_scales.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "tables.wage_scales".to_string(),
                message: "at least one wage scale table is required".to_string(),
            });
        }
        Ok(())
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_path() -> &'static str {
        "./fixtures/analysis.yaml"
    }

    #[test]
    fn test_load_fixture_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.report.top_employers, 20);
        assert!(config.tables.geography.ends_with("Geography.csv"));
        assert!(config.tables.geography.starts_with("./fixtures"));
        assert_eq!(config.tables.wage_scales.len(), 2);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/analysis.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("analysis.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "report: [unclosed").unwrap();

        let result = ConfigLoader::load(file.path());
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_zero_top_employers_rejected() {
        let mut config = AnalysisConfig::default();
        config.report.top_employers = 0;

        let result = ConfigLoader::from_config(config, Path::new("."));
        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "report.top_employers");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let mut config = AnalysisConfig::default();
        config.tables.cases = PathBuf::from("/data/h1b.csv");

        let loader = ConfigLoader::from_config(config, Path::new("/etc/wage")).unwrap();
        assert_eq!(loader.config().tables.cases, PathBuf::from("/data/h1b.csv"));
        assert_eq!(
            loader.config().tables.geography,
            PathBuf::from("/etc/wage/Geography.csv")
        );
        assert_eq!(loader.config().log_file, PathBuf::from("/etc/wage/error.log"));
    }
}
