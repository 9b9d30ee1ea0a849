//! Core data models for the wage compliance engine.
//!
//! This module contains the raw table rows, the two reference indexes,
//! classified case records, employer tallies and diagnostics.

mod case_record;
mod diagnostic;
mod employer;
mod geography;
mod rows;
mod wage_scale;

pub use case_record::{AreaCode, CaseRecord, Degradation, UNRESOLVED_AREA_SENTINEL, Verdict};
pub use diagnostic::{Diagnostic, DiagnosticLevel, DiagnosticTag};
pub use employer::{EmployerAggregate, EmployerTally};
pub use geography::GeographyIndex;
pub use rows::{CaseRow, GeographyRow, WageScaleRow};
pub use wage_scale::{WAGE_LEVEL_COUNT, WageLevels, WageScale};
