//! Header name → column position resolution.
//!
//! Each table's header is resolved once, before any data row is read.
//! Every required column must be present; column order is irrelevant and
//! extra columns are ignored.

use std::collections::HashMap;

use csv::StringRecord;

use crate::error::{EngineError, EngineResult};

/// Columns of the geography reference table.
pub const GEOGRAPHY_COLUMNS: [&str; 3] = ["Area", "StateAb", "CountyTownName"];

/// Columns of a wage-scale reference table.
pub const WAGE_SCALE_COLUMNS: [&str; 6] =
    ["Area", "SocCode", "Level1", "Level2", "Level3", "Level4"];

/// Columns of the case input table.
pub const CASE_COLUMNS: [&str; 10] = [
    "WAGE_RATE_OF_PAY_FROM",
    "PW_WAGE_LEVEL",
    "WORKSITE_POSTAL_CODE",
    "FULL_TIME_POSITION",
    "EMPLOYER_NAME",
    "VISA_CLASS",
    "SOC_CODE",
    "PREVAILING_WAGE",
    "WORKSITE_STATE",
    "WORKSITE_COUNTY",
];

/// Resolved positions of a table's required columns.
///
/// # Example
///
/// ```
/// use csv::StringRecord;
/// use wage_compliance::tables::{ColumnIndex, GEOGRAPHY_COLUMNS};
///
/// let header = StringRecord::from(vec!["CountyTownName", "Extra", "Area", "StateAb"]);
/// let columns = ColumnIndex::resolve("geography", &header, &GEOGRAPHY_COLUMNS).unwrap();
///
/// let row = StringRecord::from(vec!["Travis County", "x", "12420", "TX"]);
/// assert_eq!(columns.get(&row, "Area"), "12420");
/// assert_eq!(columns.get(&row, "StateAb"), "TX");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Maps each required column to its position in `header`.
    ///
    /// When a name appears more than once the last occurrence is used.
    /// Fails with [`EngineError::MissingColumn`] naming the first absent
    /// column.
    pub fn resolve(
        table: &str,
        header: &StringRecord,
        required: &[&'static str],
    ) -> EngineResult<Self> {
        let names: Vec<&str> = header
            .iter()
            .map(|name| name.trim_start_matches('\u{feff}').trim())
            .collect();

        let mut positions = HashMap::with_capacity(required.len());
        for &column in required {
            let position = names.iter().rposition(|&name| name == column).ok_or_else(|| {
                EngineError::MissingColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                }
            })?;
            positions.insert(column, position);
        }
        Ok(Self { positions })
    }

    /// Returns a cell by column name. Cells missing from a short row,
    /// and columns that were never resolved, read as empty.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&position| record.get(position))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let header = StringRecord::from(vec!["Area", "SocCode", "Level1", "Level2", "Level3"]);
        let result = ColumnIndex::resolve("wage_scale", &header, &WAGE_SCALE_COLUMNS);

        match result {
            Err(EngineError::MissingColumn { table, column }) => {
                assert_eq!(table, "wage_scale");
                assert_eq!(column, "Level4");
            }
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_bom_and_padding_ignored_in_header() {
        let header = StringRecord::from(vec!["\u{feff}Area", " StateAb ", "CountyTownName"]);
        let columns = ColumnIndex::resolve("geography", &header, &GEOGRAPHY_COLUMNS).unwrap();

        let row = StringRecord::from(vec!["1", "CA", "Alameda"]);
        assert_eq!(columns.get(&row, "Area"), "1");
        assert_eq!(columns.get(&row, "StateAb"), "CA");
    }

    #[test]
    fn test_duplicate_header_uses_last_occurrence() {
        let header = StringRecord::from(vec!["Area", "StateAb", "Area", "CountyTownName"]);
        let columns = ColumnIndex::resolve("geography", &header, &GEOGRAPHY_COLUMNS).unwrap();

        let row = StringRecord::from(vec!["old", "CA", "41940", "Santa Clara County"]);
        assert_eq!(columns.get(&row, "Area"), "41940");
    }

    #[test]
    fn test_short_row_reads_empty() {
        let header = StringRecord::from(vec!["Area", "StateAb", "CountyTownName"]);
        let columns = ColumnIndex::resolve("geography", &header, &GEOGRAPHY_COLUMNS).unwrap();

        let row = StringRecord::from(vec!["1", "CA"]);
        assert_eq!(columns.get(&row, "CountyTownName"), "");
        assert_eq!(columns.get(&row, "NotAColumn"), "");
    }
}
