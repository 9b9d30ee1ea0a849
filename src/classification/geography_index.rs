//! Geography index construction.

use tracing::debug;

use crate::models::{GeographyIndex, GeographyRow};

use super::normalize::{normalize_county, normalize_state};

/// Builds the state → county → area code index.
///
/// State codes are upper-cased and county names normalized with
/// [`normalize_county`]. When two rows share a normalized (state, county)
/// pair the first row's area code is kept and later rows are skipped.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::build_geography_index;
/// use wage_compliance::models::GeographyRow;
///
/// let rows = vec![GeographyRow::new("123", "CA", "Santa Clara County")];
/// let index = build_geography_index(&rows);
///
/// assert_eq!(index.area_code("CA", "SANTA CLARA"), Some("123"));
/// ```
pub fn build_geography_index(rows: &[GeographyRow]) -> GeographyIndex {
    let mut index = GeographyIndex::default();
    extend_geography_index(&mut index, rows);
    index
}

/// Adds rows to an existing index with the same first-wins rule.
/// Returns the number of rows that were skipped as duplicates.
pub fn extend_geography_index(index: &mut GeographyIndex, rows: &[GeographyRow]) -> usize {
    let mut skipped = 0;
    for row in rows {
        let state = normalize_state(&row.state_ab);
        let county = normalize_county(&row.county_town_name);
        if !index.insert(&state, &county, &row.area) {
            skipped += 1;
        }
    }
    if skipped > 0 {
        debug!(skipped, "Duplicate geography rows ignored");
    }
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_normalized_entry() {
        let rows = vec![GeographyRow::new("123", "CA", "Santa Clara County")];
        let index = build_geography_index(&rows);

        assert_eq!(index.area_code("CA", "SANTA CLARA"), Some("123"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_duplicate_rows_keep_first_code() {
        let rows = vec![
            GeographyRow::new("111", "VA", "Richmond (city)"),
            GeographyRow::new("222", "VA", "Richmond"),
            GeographyRow::new("333", "va", "Richmond County"),
        ];
        let mut index = GeographyIndex::default();
        let skipped = extend_geography_index(&mut index, &rows);

        assert_eq!(skipped, 2);
        assert_eq!(index.area_code("VA", "RICHMOND"), Some("111"));
    }

    #[test]
    fn test_lowercase_state_is_upper_cased() {
        let rows = vec![GeographyRow::new("12420", "tx", "Travis County")];
        let index = build_geography_index(&rows);

        assert_eq!(index.area_code("TX", "TRAVIS"), Some("12420"));
    }

    #[test]
    fn test_empty_table_builds_empty_index() {
        let index = build_geography_index(&[]);
        assert!(index.is_empty());
    }
}
