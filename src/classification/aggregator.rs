//! Employer aggregation over classified records.

use crate::models::{CaseRecord, EmployerAggregate, EmployerTally};

/// Folds classified records into per-employer tallies.
///
/// Records with an `Unknown` verdict are skipped entirely; they neither
/// create an aggregate nor count toward one.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::aggregate_employers;
///
/// let tally = aggregate_employers(&[]);
/// assert!(tally.is_empty());
/// ```
pub fn aggregate_employers(records: &[CaseRecord]) -> EmployerTally {
    let mut tally = EmployerTally::default();
    for record in records {
        tally.record(&record.employer, record.verdict);
    }
    tally
}

/// Aggregates and ranks employers by `total`, descending.
///
/// Employers with equal totals stay in the order they first appeared.
pub fn rank_employers(records: &[CaseRecord]) -> Vec<EmployerAggregate> {
    aggregate_employers(records).ranked()
}
