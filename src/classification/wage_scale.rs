//! Wage scale construction.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Diagnostic, DiagnosticTag, WageLevels, WageScale, WageScaleRow};

use super::sink::DiagnosticSink;
use super::wage::parse_wage;

/// Builds the area → occupation → level wage lookup.
///
/// Blank level cells become zero ("no data"). A non-blank cell that does
/// not parse also becomes zero and emits a `WAG` diagnostic. A later row
/// for the same (area, occupation) replaces the earlier one entirely.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::build_wage_scale;
/// use wage_compliance::models::{Diagnostic, WageScaleRow};
/// use rust_decimal::Decimal;
///
/// let rows = vec![WageScaleRow::new("123", "15-1132", ["40.0", "50.0", "", "70.0"])];
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let scale = build_wage_scale(&rows, &mut diagnostics);
///
/// let levels = scale.levels("123", "15-1132").unwrap();
/// assert_eq!(levels.level(3), Some(Decimal::ZERO));
/// assert_eq!(levels.level(4), Some(Decimal::new(70, 0)));
/// assert!(diagnostics.is_empty());
/// ```
pub fn build_wage_scale(rows: &[WageScaleRow], sink: &mut dyn DiagnosticSink) -> WageScale {
    let mut scale = WageScale::default();
    extend_wage_scale(&mut scale, rows, sink);
    scale
}

/// Adds rows to an existing scale, replacing entries with the same key.
/// Returns the number of entries that were replaced.
///
/// Used to layer several wage-scale tables in order.
pub fn extend_wage_scale(
    scale: &mut WageScale,
    rows: &[WageScaleRow],
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let mut replaced = 0;
    for row in rows {
        let mut levels = [Decimal::ZERO; 4];
        for (level, (slot, cell)) in levels.iter_mut().zip(row.levels.iter()).enumerate() {
            *slot = parse_level_cell(row, level + 1, cell, sink);
        }
        if scale
            .insert(&row.area, &row.soc_code, WageLevels::new(levels))
            .is_some()
        {
            replaced += 1;
        }
    }
    if replaced > 0 {
        debug!(replaced, "Wage scale entries overwritten by later rows");
    }
    replaced
}

fn parse_level_cell(
    row: &WageScaleRow,
    level: usize,
    cell: &str,
    sink: &mut dyn DiagnosticSink,
) -> Decimal {
    if cell.trim().is_empty() {
        return Decimal::ZERO;
    }
    match parse_wage(cell) {
        Some(wage) => wage,
        None => {
            sink.emit(Diagnostic::new(
                DiagnosticTag::MalformedWage,
                format!(
                    "Level {} wage \"{}\" for SOC code {} in area {} is not a number",
                    level, cell, row.soc_code, row.area
                ),
            ));
            Decimal::ZERO
        }
    }
}
