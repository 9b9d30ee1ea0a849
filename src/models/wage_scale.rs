//! The area → occupation → wage level lookup.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

/// Number of prevailing wage levels.
pub const WAGE_LEVEL_COUNT: usize = 4;

/// Prevailing wages for levels 1 through 4 of one (area, occupation) pair.
///
/// A zero slot means "no data", not a zero prevailing wage.
///
/// # Example
///
/// ```
/// use wage_compliance::models::WageLevels;
/// use rust_decimal::Decimal;
///
/// let levels = WageLevels::new([
///     Decimal::new(40, 0),
///     Decimal::new(50, 0),
///     Decimal::ZERO,
///     Decimal::new(70, 0),
/// ]);
/// assert_eq!(levels.level(4), Some(Decimal::new(70, 0)));
/// assert_eq!(levels.level(0), None);
/// assert_eq!(levels.level(5), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WageLevels([Decimal; WAGE_LEVEL_COUNT]);

impl WageLevels {
    /// Creates the level slots in level order.
    pub fn new(levels: [Decimal; WAGE_LEVEL_COUNT]) -> Self {
        Self(levels)
    }

    /// Returns the wage for a 1-based level, or `None` outside 1..=4.
    pub fn level(&self, level: usize) -> Option<Decimal> {
        level
            .checked_sub(1)
            .and_then(|slot| self.0.get(slot))
            .copied()
    }
}

/// Prevailing wage lookup built from one or more wage-scale tables.
///
/// Unlike [`crate::models::GeographyIndex`], a later entry for the same
/// (area, occupation) pair replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WageScale {
    areas: HashMap<String, HashMap<String, WageLevels>>,
}

impl WageScale {
    /// Stores the levels for an (area, occupation) pair, replacing any
    /// previous entry. Returns the replaced levels, if any.
    pub fn insert(&mut self, area: &str, soc_code: &str, levels: WageLevels) -> Option<WageLevels> {
        self.areas
            .entry(area.to_string())
            .or_default()
            .insert(soc_code.to_string(), levels)
    }

    /// Returns the occupations known for an area.
    pub fn area(&self, area: &str) -> Option<&HashMap<String, WageLevels>> {
        self.areas.get(area)
    }

    /// Looks up the levels for an (area, occupation) pair.
    pub fn levels(&self, area: &str, soc_code: &str) -> Option<&WageLevels> {
        self.area(area).and_then(|occupations| occupations.get(soc_code))
    }

    /// Number of areas in the scale.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Total number of (area, occupation) entries.
    pub fn len(&self) -> usize {
        self.areas.values().map(HashMap::len).sum()
    }

    /// Returns true if the scale has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(values: [i64; 4]) -> WageLevels {
        WageLevels::new(values.map(|v| Decimal::new(v, 0)))
    }

    #[test]
    fn test_later_insert_replaces_earlier() {
        let mut scale = WageScale::default();
        assert!(scale.insert("123", "15-1132", levels([1, 2, 3, 4])).is_none());

        let replaced = scale.insert("123", "15-1132", levels([10, 20, 30, 40]));
        assert_eq!(replaced, Some(levels([1, 2, 3, 4])));
        assert_eq!(
            scale.levels("123", "15-1132").unwrap().level(1),
            Some(Decimal::new(10, 0))
        );
        assert_eq!(scale.len(), 1);
    }

    #[test]
    fn test_level_slots_are_one_based() {
        let l = levels([40, 50, 0, 70]);
        assert_eq!(l.level(1), Some(Decimal::new(40, 0)));
        assert_eq!(l.level(3), Some(Decimal::ZERO));
        assert_eq!(l.level(0), None);
        assert_eq!(l.level(usize::MAX), None);
    }

    #[test]
    fn test_missing_area_and_occupation() {
        let mut scale = WageScale::default();
        scale.insert("123", "15-1132", levels([1, 2, 3, 4]));

        assert!(scale.area("999").is_none());
        assert!(scale.levels("123", "11-1011").is_none());
        assert_eq!(scale.area_count(), 1);
    }
}
