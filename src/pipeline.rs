//! End-to-end analysis: reference tables → indexes → classifier →
//! aggregator → report.
//!
//! [`analyze_cases`] is the pure core: given built indexes and case rows
//! it returns classified records and a report, reporting diagnostics to
//! the sink it is handed. [`run_analysis`] adds file loading around it.

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::classification::{
    DiagnosticSink, TracingSink, build_geography_index, classify_batch, extend_wage_scale,
    rank_employers,
};
use crate::config::{AnalysisConfig, ReportConfig, TablePaths};
use crate::error::EngineResult;
use crate::models::{CaseRecord, Diagnostic, GeographyIndex, GeographyRow, WageScale, WageScaleRow};
use crate::report::{ComplianceReport, InputCounts};
use crate::tables::{CaseTable, load_cases, load_geography, load_wage_scale};

/// The two read-only reference indexes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    /// State → county → area code.
    pub geography: GeographyIndex,
    /// Area → occupation → level wages.
    pub wage_scale: WageScale,
}

impl ReferenceData {
    /// Builds both indexes from parsed rows. Wage-scale tables are
    /// layered in order, later tables replacing earlier entries.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_compliance::models::{Diagnostic, GeographyRow, WageScaleRow};
    /// use wage_compliance::pipeline::ReferenceData;
    ///
    /// let mut diagnostics: Vec<Diagnostic> = Vec::new();
    /// let reference = ReferenceData::build(
    ///     &[GeographyRow::new("123", "CA", "Santa Clara County")],
    ///     &[vec![WageScaleRow::new("123", "15-1132", ["40", "50", "60", "70"])]],
    ///     &mut diagnostics,
    /// );
    /// assert_eq!(reference.geography.len(), 1);
    /// assert_eq!(reference.wage_scale.len(), 1);
    /// ```
    pub fn build(
        geography_rows: &[GeographyRow],
        wage_scale_tables: &[Vec<WageScaleRow>],
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let geography = build_geography_index(geography_rows);
        let mut wage_scale = WageScale::default();
        for rows in wage_scale_tables {
            extend_wage_scale(&mut wage_scale, rows, sink);
        }
        info!(
            states = geography.state_count(),
            counties = geography.len(),
            areas = wage_scale.area_count(),
            occupations = wage_scale.len(),
            "Reference indexes built"
        );
        Self {
            geography,
            wage_scale,
        }
    }

    /// Reads the geography and wage-scale tables named in `tables` and
    /// builds both indexes.
    pub fn load(tables: &TablePaths, sink: &mut dyn DiagnosticSink) -> EngineResult<Self> {
        let geography_rows = load_geography(&tables.geography)?;
        let wage_scale_tables = tables
            .wage_scales
            .iter()
            .map(|path| load_wage_scale(path))
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(Self::build(&geography_rows, &wage_scale_tables, sink))
    }
}

/// Classified records and the report built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// One record per accepted case row, in input order.
    pub records: Vec<CaseRecord>,
    /// Aggregated counts and the ranked employer table.
    pub report: ComplianceReport,
}

/// An [`Analysis`] together with every diagnostic the run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisOutcome {
    /// Records and report.
    pub analysis: Analysis,
    /// Diagnostics from index building and classification, in order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Classifies the accepted case rows and builds the report.
///
/// Re-running with the same inputs yields identical records and reports.
pub fn analyze_cases(
    cases: &CaseTable,
    reference: &ReferenceData,
    report_config: &ReportConfig,
    sink: &mut dyn DiagnosticSink,
) -> Analysis {
    let start_time = Instant::now();
    let records = classify_batch(
        &cases.rows,
        &reference.geography,
        &reference.wage_scale,
        sink,
    );
    let ranked = rank_employers(&records);
    let report = ComplianceReport::build(
        &records,
        ranked,
        report_config.top_employers,
        InputCounts {
            rows_read: cases.rows_read,
            rows_filtered_out: cases.rows_filtered_out,
        },
    );
    info!(
        records = records.len(),
        definite = report.total_records,
        met = report.met_records,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Batch classified"
    );
    Analysis { records, report }
}

/// Loads every table named in `config` and runs the full analysis.
///
/// Diagnostics are forwarded to `tracing` as they occur and also
/// returned in the outcome.
pub fn run_analysis(config: &AnalysisConfig) -> EngineResult<AnalysisOutcome> {
    let mut sink = TracingSink::default();
    let reference = ReferenceData::load(&config.tables, &mut sink)?;
    let cases = load_cases(&config.tables.cases, &config.filter)?;
    let analysis = analyze_cases(&cases, &reference, &config.report, &mut sink);
    Ok(AnalysisOutcome {
        analysis,
        diagnostics: sink.into_diagnostics(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaseRow, DiagnosticTag, Verdict};

    fn create_reference() -> ReferenceData {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        ReferenceData::build(
            &[GeographyRow::new("123", "CA", "Santa Clara County")],
            &[
                vec![WageScaleRow::new("123", "15-1132", ["40", "50", "", "70"])],
                vec![WageScaleRow::new("123", "15-1132", ["40", "50", "", "75"])],
            ],
            &mut diagnostics,
        )
    }

    fn create_row(employer: &str, wage: &str, state: &str) -> CaseRow {
        CaseRow {
            wage_rate_of_pay_from: wage.to_string(),
            pw_wage_level: "IV".to_string(),
            employer_name: employer.to_string(),
            visa_class: "H-1B".to_string(),
            full_time_position: "Y".to_string(),
            soc_code: "15-1132".to_string(),
            worksite_state: state.to_string(),
            worksite_county: "Santa Clara".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_later_wage_table_wins() {
        let reference = create_reference();
        let levels = reference.wage_scale.levels("123", "15-1132").unwrap();
        assert_eq!(levels.level(4), Some(rust_decimal::Decimal::new(75, 0)));
    }

    #[test]
    fn test_analyze_cases_end_to_end() {
        let reference = create_reference();
        let cases = CaseTable {
            rows: vec![
                create_row("Acme", "80", "CA"),
                create_row("Acme", "72", "CA"),
                create_row("Globex", "76", "ca"),
                create_row("Initech", "90", "ZZ"),
            ],
            rows_read: 6,
            rows_filtered_out: 2,
        };
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let analysis = analyze_cases(
            &cases,
            &reference,
            &ReportConfig::default(),
            &mut diagnostics,
        );

        let verdicts: Vec<Verdict> = analysis.records.iter().map(|r| r.verdict).collect();
        assert_eq!(
            verdicts,
            vec![Verdict::Met, Verdict::NotMet, Verdict::Met, Verdict::Unknown]
        );
        assert_eq!(analysis.report.total_records, 3);
        assert_eq!(analysis.report.met_records, 2);
        assert_eq!(analysis.report.input.rows_read, 6);
        assert_eq!(analysis.report.top_employers.len(), 2);
        assert_eq!(analysis.report.top_employers[0].employer, "ACME");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].tag, DiagnosticTag::StateNotFound);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let reference = create_reference();
        let cases = CaseTable {
            rows: vec![create_row("Acme", "80", "CA"), create_row("Globex", "10", "CA")],
            rows_read: 2,
            rows_filtered_out: 0,
        };

        let mut first_diagnostics: Vec<Diagnostic> = Vec::new();
        let mut second_diagnostics: Vec<Diagnostic> = Vec::new();
        let first = analyze_cases(&cases, &reference, &ReportConfig::default(), &mut first_diagnostics);
        let second = analyze_cases(&cases, &reference, &ReportConfig::default(), &mut second_diagnostics);

        assert_eq!(first, second);
        assert_eq!(first_diagnostics, second_diagnostics);
    }
}
