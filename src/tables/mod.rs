//! Delimited-file ingestion for reference and case tables.
//!
//! Headers are resolved to column positions once per table and checked
//! for every required column before any row is processed.

mod reader;
mod schema;

pub use reader::{
    CaseTable, load_cases, load_geography, load_wage_scale, read_cases, read_geography,
    read_wage_scale,
};
pub use schema::{CASE_COLUMNS, ColumnIndex, GEOGRAPHY_COLUMNS, WAGE_SCALE_COLUMNS};
