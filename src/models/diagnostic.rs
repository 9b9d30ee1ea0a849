//! Diagnostics produced while building indexes and classifying cases.
//!
//! Tag strings (`STA`, `CNT`, `ARE`, `SOC`, `LEV`, `WAG`) are stable and
//! appear as `[TAG]` prefixes in the side log, so downstream tooling can
//! grep for them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    /// Informational; the record is still excluded but nothing looks wrong.
    Info,
    /// Reference data is missing or a field is malformed.
    Warning,
}

/// What kind of lookup or parse produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticTag {
    /// State not present in the geography index.
    #[serde(rename = "STA")]
    StateNotFound,
    /// County not present under a known state.
    #[serde(rename = "CNT")]
    CountyNotFound,
    /// Area code not present in the wage scale.
    #[serde(rename = "ARE")]
    AreaNotFound,
    /// Occupation code not present under a known area.
    #[serde(rename = "SOC")]
    SocNotFound,
    /// Wage level outside 1..=4.
    #[serde(rename = "LEV")]
    IllegalLevel,
    /// A wage figure that could not be parsed.
    #[serde(rename = "WAG")]
    MalformedWage,
}

impl DiagnosticTag {
    /// The three-letter tag written to the log.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StateNotFound => "STA",
            Self::CountyNotFound => "CNT",
            Self::AreaNotFound => "ARE",
            Self::SocNotFound => "SOC",
            Self::IllegalLevel => "LEV",
            Self::MalformedWage => "WAG",
        }
    }

    /// The level this tag is logged at. Only `SOC` is informational.
    pub fn level(self) -> DiagnosticLevel {
        match self {
            Self::SocNotFound => DiagnosticLevel::Info,
            _ => DiagnosticLevel::Warning,
        }
    }
}

impl fmt::Display for DiagnosticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic entry.
///
/// # Example
///
/// ```
/// use wage_compliance::models::{Diagnostic, DiagnosticLevel, DiagnosticTag};
///
/// let diagnostic = Diagnostic::new(DiagnosticTag::StateNotFound, "State \"ZZ\" not found in DB");
/// assert_eq!(diagnostic.level, DiagnosticLevel::Warning);
/// assert_eq!(diagnostic.to_string(), "[STA] State \"ZZ\" not found in DB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity, derived from the tag.
    pub level: DiagnosticLevel,
    /// The stable tag.
    pub tag: DiagnosticTag,
    /// Human-readable detail.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic at the tag's default level.
    pub fn new(tag: DiagnosticTag, message: impl Into<String>) -> Self {
        Self {
            level: tag.level(),
            tag,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tag, self.message)
    }
}
