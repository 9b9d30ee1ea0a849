//! Wage parsing and hourly normalization.
//!
//! The source tables carry no unit flag, so the unit is guessed from the
//! magnitude: anything above [`ANNUAL_WAGE_THRESHOLD`] is taken to be an
//! annual salary. An annual salary at or below the threshold is therefore
//! read as hourly; that is a known ambiguity in the source data.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Wages strictly above this are treated as annual salaries.
pub const ANNUAL_WAGE_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Working weeks per year used to convert annual salaries.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Working hours per week used to convert annual salaries.
pub const HOURS_PER_WEEK: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Converts a wage figure to an hourly rate.
///
/// # Examples
///
/// ```
/// use wage_compliance::classification::normalize_wage;
/// use rust_decimal::Decimal;
///
/// // Already hourly
/// assert_eq!(normalize_wage(Decimal::new(72, 0)), Decimal::new(72, 0));
/// // Exactly at the threshold is still hourly
/// assert_eq!(normalize_wage(Decimal::new(5000, 0)), Decimal::new(5000, 0));
/// // Annual: 100000 / 50 / 40
/// assert_eq!(normalize_wage(Decimal::new(100_000, 0)), Decimal::new(50, 0));
/// ```
pub fn normalize_wage(wage: Decimal) -> Decimal {
    if wage > ANNUAL_WAGE_THRESHOLD {
        wage / WEEKS_PER_YEAR / HOURS_PER_WEEK
    } else {
        wage
    }
}

/// Parses a wage cell. Accepts plain and scientific notation, ignoring
/// surrounding whitespace. Returns `None` for blank or malformed text.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::parse_wage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_wage(" 72.50 "), Some(Decimal::new(7250, 2)));
/// assert_eq!(parse_wage("1.2e5"), Some(Decimal::new(120_000, 0)));
/// assert_eq!(parse_wage(""), None);
/// assert_eq!(parse_wage("n/a"), None);
/// ```
pub fn parse_wage(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
