//! Case classification.
//!
//! Turns a raw [`CaseRow`] into a [`CaseRecord`] by normalizing its
//! fields, joining against the geography index and wage scale, and
//! comparing offered and prevailing hourly wages.
//!
//! Classification never fails. Every missing or malformed piece of data
//! degrades the verdict to [`Verdict::Unknown`] and emits a diagnostic;
//! one bad row never aborts a batch.

use rust_decimal::Decimal;

use crate::models::{
    AreaCode, CaseRecord, CaseRow, Degradation, Diagnostic, DiagnosticTag, GeographyIndex,
    Verdict, WageScale,
};

use super::normalize::{normalize_county, normalize_employer, normalize_state};
use super::sink::DiagnosticSink;
use super::wage::{normalize_wage, parse_wage};

/// Highest valid wage level.
pub const MAX_WAGE_LEVEL: usize = 4;

/// Derives a wage level from its text.
///
/// `"IV"` is level 4; any other text yields its character count. That
/// maps "I", "II" and "III" correctly and gives every other vocabulary a
/// nominal level, which is rejected later if it falls outside 1..=4.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::resolve_level;
///
/// assert_eq!(resolve_level("I"), 1);
/// assert_eq!(resolve_level("III"), 3);
/// assert_eq!(resolve_level("IV"), 4);
/// assert_eq!(resolve_level("Level 2"), 7);
/// assert_eq!(resolve_level(""), 0);
/// ```
pub fn resolve_level(level: &str) -> usize {
    if level == "IV" {
        MAX_WAGE_LEVEL
    } else {
        level.chars().count()
    }
}

/// Classifies a single case row.
///
/// # Arguments
///
/// * `row` - The raw case row
/// * `geography` - State → county → area code index
/// * `wage_scale` - Area → occupation → level wage lookup
/// * `sink` - Receives `STA`, `CNT`, `ARE`, `SOC`, `LEV` and `WAG` diagnostics
///
/// # Example
///
/// ```
/// use wage_compliance::classification::{build_geography_index, build_wage_scale, classify_case};
/// use wage_compliance::models::{CaseRow, Diagnostic, GeographyRow, Verdict, WageScaleRow};
/// use rust_decimal::Decimal;
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let geography = build_geography_index(&[GeographyRow::new("123", "CA", "Santa Clara County")]);
/// let wage_scale = build_wage_scale(
///     &[WageScaleRow::new("123", "15-1132", ["40.0", "50.0", "", "70.0"])],
///     &mut diagnostics,
/// );
///
/// let row = CaseRow {
///     wage_rate_of_pay_from: "72.0".to_string(),
///     pw_wage_level: "IV".to_string(),
///     employer_name: "Acme Corp.".to_string(),
///     soc_code: "15-1132".to_string(),
///     worksite_state: "ca".to_string(),
///     worksite_county: "Santa Clara County".to_string(),
///     ..Default::default()
/// };
///
/// let record = classify_case(&row, &geography, &wage_scale, &mut diagnostics);
/// assert_eq!(record.level, 4);
/// assert_eq!(record.hourly_wage, Decimal::new(72, 0));
/// assert_eq!(record.verdict, Verdict::Met);
/// assert!(diagnostics.is_empty());
/// ```
pub fn classify_case(
    row: &CaseRow,
    geography: &GeographyIndex,
    wage_scale: &WageScale,
    sink: &mut dyn DiagnosticSink,
) -> CaseRecord {
    let employer = normalize_employer(&row.employer_name);
    let hourly_wage = match parse_wage(&row.wage_rate_of_pay_from) {
        Some(wage) => normalize_wage(wage),
        None => {
            sink.emit(Diagnostic::new(
                DiagnosticTag::MalformedWage,
                format!(
                    "Offered wage \"{}\" for employer {} is not a number",
                    row.wage_rate_of_pay_from, employer
                ),
            ));
            Decimal::ZERO
        }
    };

    let level = resolve_level(&row.pw_wage_level);
    let state = normalize_state(&row.worksite_state);
    let county = normalize_county(&row.worksite_county);

    let area_code = resolve_area(geography, &state, &county, sink);

    let outcome = match area_code.as_resolved() {
        Some(area) => resolve_verdict(wage_scale, area, &row.soc_code, level, hourly_wage, sink),
        None => Outcome::degraded(Degradation::ReferenceMissing),
    };

    CaseRecord {
        hourly_wage,
        prevailing_wage: row.prevailing_wage.clone(),
        level,
        occupation_code: row.soc_code.clone(),
        state,
        county,
        postal_code: row.worksite_postal_code.clone(),
        employer,
        area_code,
        prevailing_hourly: outcome.prevailing_hourly,
        verdict: outcome.verdict,
        degradation: outcome.degradation,
    }
}

/// Classifies every row in order.
pub fn classify_batch(
    rows: &[CaseRow],
    geography: &GeographyIndex,
    wage_scale: &WageScale,
    sink: &mut dyn DiagnosticSink,
) -> Vec<CaseRecord> {
    rows.iter()
        .map(|row| classify_case(row, geography, wage_scale, sink))
        .collect()
}

struct Outcome {
    verdict: Verdict,
    prevailing_hourly: Option<Decimal>,
    degradation: Option<Degradation>,
}

impl Outcome {
    fn degraded(degradation: Degradation) -> Self {
        Self {
            verdict: Verdict::Unknown,
            prevailing_hourly: None,
            degradation: Some(degradation),
        }
    }
}

fn resolve_area(
    geography: &GeographyIndex,
    state: &str,
    county: &str,
    sink: &mut dyn DiagnosticSink,
) -> AreaCode {
    let Some(counties) = geography.state(state) else {
        sink.emit(Diagnostic::new(
            DiagnosticTag::StateNotFound,
            format!("State \"{}\" not found in DB", state),
        ));
        return AreaCode::Unresolved;
    };

    match counties.get(county) {
        Some(area) => AreaCode::Resolved(area.clone()),
        None => {
            sink.emit(Diagnostic::new(
                DiagnosticTag::CountyNotFound,
                format!("County \"{}\" not found in DB for state {}", county, state),
            ));
            AreaCode::Unresolved
        }
    }
}

fn resolve_verdict(
    wage_scale: &WageScale,
    area: &str,
    soc_code: &str,
    level: usize,
    hourly_wage: Decimal,
    sink: &mut dyn DiagnosticSink,
) -> Outcome {
    let Some(occupations) = wage_scale.area(area) else {
        sink.emit(Diagnostic::new(
            DiagnosticTag::AreaNotFound,
            format!("Area code {} not found in DB", area),
        ));
        return Outcome::degraded(Degradation::ReferenceMissing);
    };

    let Some(levels) = occupations.get(soc_code) else {
        sink.emit(Diagnostic::new(
            DiagnosticTag::SocNotFound,
            format!("SOC code {} not found in DB for area {}", soc_code, area),
        ));
        return Outcome::degraded(Degradation::ReferenceMissing);
    };

    let Some(prevailing) = levels.level(level) else {
        sink.emit(Diagnostic::new(
            DiagnosticTag::IllegalLevel,
            format!("Got illegal level {}", level),
        ));
        return Outcome::degraded(Degradation::InvalidLevel);
    };

    let prevailing_hourly = normalize_wage(prevailing);
    if prevailing_hourly <= Decimal::ZERO || hourly_wage <= Decimal::ZERO {
        return Outcome {
            prevailing_hourly: Some(prevailing_hourly),
            ..Outcome::degraded(Degradation::MissingWageData)
        };
    }

    let verdict = if hourly_wage >= prevailing_hourly {
        Verdict::Met
    } else {
        Verdict::NotMet
    };
    Outcome {
        verdict,
        prevailing_hourly: Some(prevailing_hourly),
        degradation: None,
    }
}
