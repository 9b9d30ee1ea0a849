//! Compliance report construction and rendering.
//!
//! Counts and percentages cover only records with a definite verdict;
//! `Unknown` records appear solely in the breakdown counters.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{CaseRecord, Degradation, EmployerAggregate, Verdict};

/// One line of the ranked employer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployerSummary {
    /// Normalized employer name.
    pub employer: String,
    /// Records with a definite verdict.
    pub total: u64,
    /// Records that met the prevailing wage.
    pub passed: u64,
    /// `passed / total * 100`, rounded to two decimals.
    pub percentage: Decimal,
}

impl From<&EmployerAggregate> for EmployerSummary {
    fn from(aggregate: &EmployerAggregate) -> Self {
        Self {
            employer: aggregate.employer.clone(),
            total: aggregate.total,
            passed: aggregate.passed,
            percentage: aggregate
                .pass_percentage()
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        }
    }
}

/// Why records were left without a verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnknownBreakdown {
    /// A state, county, area or occupation lookup failed.
    pub reference_missing: usize,
    /// The wage level was outside 1..=4.
    pub invalid_level: usize,
    /// The offered or prevailing wage was zero.
    pub missing_wage_data: usize,
}

/// Row counts from reading the case table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputCounts {
    /// Data rows read.
    pub rows_read: usize,
    /// Rows dropped by the case filter.
    pub rows_filtered_out: usize,
}

/// The outcome of an analysis run.
///
/// # Example
///
/// ```
/// use wage_compliance::report::{ComplianceReport, InputCounts};
///
/// let report = ComplianceReport::build(&[], vec![], 20, InputCounts::default());
/// assert_eq!(report.total_records, 0);
/// assert!(report.to_string().starts_with("total records:  0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    /// Case table counts.
    pub input: InputCounts,
    /// Records classified (after filtering).
    pub records_classified: usize,
    /// Records with a definite verdict.
    pub total_records: usize,
    /// Records whose verdict is `Met`.
    pub met_records: usize,
    /// Breakdown of records without a verdict.
    pub unknown: UnknownBreakdown,
    /// The top employers by total, highest first.
    pub top_employers: Vec<EmployerSummary>,
}

impl ComplianceReport {
    /// Builds the report from classified records and a ranked employer list.
    ///
    /// Only the first `top_employers` entries of `ranked` are kept.
    pub fn build(
        records: &[CaseRecord],
        ranked: Vec<EmployerAggregate>,
        top_employers: usize,
        input: InputCounts,
    ) -> Self {
        let mut unknown = UnknownBreakdown::default();
        let mut total_records = 0;
        let mut met_records = 0;

        for record in records {
            match record.verdict {
                Verdict::Met => {
                    total_records += 1;
                    met_records += 1;
                }
                Verdict::NotMet => total_records += 1,
                Verdict::Unknown => match record.degradation {
                    Some(Degradation::InvalidLevel) => unknown.invalid_level += 1,
                    Some(Degradation::MissingWageData) => unknown.missing_wage_data += 1,
                    Some(Degradation::ReferenceMissing) | None => unknown.reference_missing += 1,
                },
            }
        }

        Self {
            input,
            records_classified: records.len(),
            total_records,
            met_records,
            unknown,
            top_employers: ranked
                .iter()
                .take(top_employers)
                .map(EmployerSummary::from)
                .collect(),
        }
    }
}

impl fmt::Display for ComplianceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "total records:  {}   meet new requirement:  {}",
            self.total_records, self.met_records
        )?;
        writeln!(f)?;
        writeln!(f, "Total\tPassed\tPercent\tEmployer")?;
        for summary in &self.top_employers {
            writeln!(
                f,
                "{}\t{}\t{}%\t{}",
                summary.total,
                summary.passed,
                format_percentage(summary.percentage),
                summary.employer
            )?;
        }
        Ok(())
    }
}

/// Formats a percentage with two decimals, zero-padded to width 5
/// (`7.5` → `07.50`).
pub fn format_percentage(percentage: Decimal) -> String {
    let hundredths = (percentage * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);
    format!("{:02}.{:02}", hundredths / 100, hundredths % 100)
}
