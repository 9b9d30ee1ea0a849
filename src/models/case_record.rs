//! Classified case records.
//!
//! A [`CaseRecord`] is built once per input row by
//! [`crate::classification::classify_case`] and is not modified afterwards.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Marker written in place of an unresolved area code.
pub const UNRESOLVED_AREA_SENTINEL: i64 = -1;

/// Three-valued compliance outcome for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No definite comparison could be made.
    Unknown,
    /// Offered hourly wage is at or above the prevailing hourly wage.
    Met,
    /// Offered hourly wage is below the prevailing hourly wage.
    NotMet,
}

impl Verdict {
    /// Returns true for `Met` and `NotMet`.
    pub fn is_definite(self) -> bool {
        self != Self::Unknown
    }
}

/// Why a record ended with an `Unknown` verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    /// State, county, area or occupation absent from an index.
    ReferenceMissing,
    /// Wage level outside 1..=4.
    InvalidLevel,
    /// Offered or prevailing hourly wage is zero.
    MissingWageData,
}

/// The area code a case resolved to.
///
/// Serializes as the code string, or as `-1` when unresolved.
///
/// # Example
///
/// ```
/// use wage_compliance::models::AreaCode;
///
/// assert_eq!(AreaCode::Resolved("123".to_string()).to_string(), "123");
/// assert_eq!(AreaCode::Unresolved.to_string(), "-1");
/// assert_eq!(AreaCode::Unresolved.as_resolved(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AreaCode {
    /// Geography lookup succeeded.
    Resolved(String),
    /// State or county missing from the geography index.
    Unresolved,
}

impl AreaCode {
    /// The resolved code, if any.
    pub fn as_resolved(&self) -> Option<&str> {
        match self {
            Self::Resolved(code) => Some(code),
            Self::Unresolved => None,
        }
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(code) => f.write_str(code),
            Self::Unresolved => write!(f, "{}", UNRESOLVED_AREA_SENTINEL),
        }
    }
}

impl Serialize for AreaCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Resolved(code) => serializer.serialize_str(code),
            Self::Unresolved => serializer.serialize_i64(UNRESOLVED_AREA_SENTINEL),
        }
    }
}

/// A case row after normalization, reference joins and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    /// Offered wage normalized to an hourly rate.
    pub hourly_wage: Decimal,
    /// Prevailing wage text as filed. Not used in the comparison.
    pub prevailing_wage: String,
    /// Wage level derived from the level text; may be out of range.
    pub level: usize,
    /// Occupation (SOC) code.
    pub occupation_code: String,
    /// Upper-cased state code.
    pub state: String,
    /// Normalized county name.
    pub county: String,
    /// Worksite postal code.
    pub postal_code: String,
    /// Normalized employer name.
    pub employer: String,
    /// Area the worksite resolved to.
    pub area_code: AreaCode,
    /// Prevailing wage for the resolved tier, normalized to hourly.
    pub prevailing_hourly: Option<Decimal>,
    /// Compliance outcome.
    pub verdict: Verdict,
    /// Set exactly when `verdict` is `Unknown`.
    pub degradation: Option<Degradation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_is_definite() {
        assert!(!Verdict::Unknown.is_definite());
        assert!(Verdict::Met.is_definite());
        assert!(Verdict::NotMet.is_definite());
    }

    #[test]
    fn test_verdict_serialization() {
        assert_eq!(serde_json::to_string(&Verdict::NotMet).unwrap(), "\"not_met\"");
        assert_eq!(
            serde_json::from_str::<Verdict>("\"met\"").unwrap(),
            Verdict::Met
        );
    }

    #[test]
    fn test_area_code_serializes_sentinel() {
        assert_eq!(serde_json::to_string(&AreaCode::Unresolved).unwrap(), "-1");
        assert_eq!(
            serde_json::to_string(&AreaCode::Resolved("41940".to_string())).unwrap(),
            "\"41940\""
        );
    }

    #[test]
    fn test_degradation_serialization() {
        assert_eq!(
            serde_json::to_string(&Degradation::MissingWageData).unwrap(),
            "\"missing_wage_data\""
        );
    }
}
