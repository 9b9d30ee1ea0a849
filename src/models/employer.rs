//! Per-employer compliance tallies.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::Verdict;

/// Compliance counts for one normalized employer name.
///
/// `total` counts records with a definite verdict; `passed` counts the
/// `Met` ones among them, so `0 <= passed <= total` always holds.
///
/// # Example
///
/// ```
/// use wage_compliance::models::EmployerAggregate;
/// use rust_decimal::Decimal;
///
/// let aggregate = EmployerAggregate {
///     employer: "ACME CORP".to_string(),
///     total: 8,
///     passed: 6,
/// };
/// assert_eq!(aggregate.pass_percentage(), Decimal::new(75, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployerAggregate {
    /// Normalized employer name.
    pub employer: String,
    /// Records with a definite verdict.
    pub total: u64,
    /// Records whose verdict is `Met`.
    pub passed: u64,
}

impl EmployerAggregate {
    fn new(employer: &str) -> Self {
        Self {
            employer: employer.to_string(),
            total: 0,
            passed: 0,
        }
    }

    /// `passed / total * 100`. Aggregates only exist once a definite
    /// verdict was counted, so `total` is never zero in a tally; a
    /// hand-built zero aggregate yields zero.
    pub fn pass_percentage(&self) -> Decimal {
        if self.total == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.passed) * Decimal::ONE_HUNDRED / Decimal::from(self.total)
    }
}

/// Employer aggregates in first-seen order.
///
/// Aggregates are created lazily on the first definite verdict for an
/// employer; `Unknown` verdicts never create or touch an aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployerTally {
    aggregates: Vec<EmployerAggregate>,
    positions: HashMap<String, usize>,
}

impl EmployerTally {
    /// Counts one verdict for an employer. Returns false for `Unknown`.
    pub fn record(&mut self, employer: &str, verdict: Verdict) -> bool {
        if !verdict.is_definite() {
            return false;
        }
        let aggregate = self.entry(employer);
        aggregate.total += 1;
        if verdict == Verdict::Met {
            aggregate.passed += 1;
        }
        true
    }

    /// Folds another tally into this one.
    ///
    /// Counts are added per employer, so merging shard tallies in any
    /// grouping yields the same counts. Employers first seen in `other`
    /// are appended after this tally's employers.
    pub fn merge(&mut self, other: EmployerTally) {
        for incoming in other.aggregates {
            let aggregate = self.entry(&incoming.employer);
            aggregate.total += incoming.total;
            aggregate.passed += incoming.passed;
        }
    }

    /// Looks up an employer's aggregate.
    pub fn get(&self, employer: &str) -> Option<&EmployerAggregate> {
        self.positions.get(employer).map(|&i| &self.aggregates[i])
    }

    /// Aggregates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployerAggregate> {
        self.aggregates.iter()
    }

    /// Number of employers with at least one definite verdict.
    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    /// Returns true if no definite verdict has been counted.
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    /// Consumes the tally into a list ordered by `total` descending.
    /// Equal totals keep first-seen order.
    pub fn ranked(self) -> Vec<EmployerAggregate> {
        let mut ranked = self.aggregates;
        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked
    }

    fn entry(&mut self, employer: &str) -> &mut EmployerAggregate {
        let index = match self.positions.get(employer) {
            Some(&index) => index,
            None => {
                self.aggregates.push(EmployerAggregate::new(employer));
                let index = self.aggregates.len() - 1;
                self.positions.insert(employer.to_string(), index);
                index
            }
        };
        &mut self.aggregates[index]
    }
}
