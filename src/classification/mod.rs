//! Classification logic for the wage compliance engine.
//!
//! This module contains the reference index builders, name and wage
//! normalization, the per-case classifier, the employer aggregator, and
//! the diagnostics sinks those components report into.

mod aggregator;
mod classifier;
mod geography_index;
mod normalize;
mod sink;
mod wage;
mod wage_scale;

pub use aggregator::{aggregate_employers, rank_employers};
pub use classifier::{MAX_WAGE_LEVEL, classify_batch, classify_case, resolve_level};
pub use geography_index::{build_geography_index, extend_geography_index};
pub use normalize::{COUNTY_SUFFIXES, normalize_county, normalize_employer, normalize_state};
pub use sink::{DiagnosticSink, TracingSink};
pub use wage::{
    ANNUAL_WAGE_THRESHOLD, HOURS_PER_WEEK, WEEKS_PER_YEAR, normalize_wage, parse_wage,
};
pub use wage_scale::{build_wage_scale, extend_wage_scale};
