//! Delimited table readers.
//!
//! Each reader resolves its header with [`ColumnIndex`] and then turns
//! every data row into a typed row. Rows are not validated here; blank
//! or malformed cells are left for the builders and classifier to degrade.
//!
//! Cells are decoded lossily: bytes that are not UTF-8 (common in
//! Windows-1252 exports) become U+FFFD instead of failing the table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::config::CaseFilter;
use crate::error::{EngineError, EngineResult};
use crate::models::{CaseRow, GeographyRow, WageScaleRow};

use super::schema::{CASE_COLUMNS, ColumnIndex, GEOGRAPHY_COLUMNS, WAGE_SCALE_COLUMNS};

/// Case rows that passed the filter, with counts for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTable {
    /// Rows accepted by the filter, in file order.
    pub rows: Vec<CaseRow>,
    /// Data rows read from the table.
    pub rows_read: usize,
    /// Rows dropped by the filter.
    pub rows_filtered_out: usize,
}

/// Reads geography rows from delimited text.
///
/// # Example
///
/// ```
/// use wage_compliance::tables::read_geography;
///
/// let data = "Area,StateAb,CountyTownName\n123,CA,Santa Clara County\n";
/// let rows = read_geography(data.as_bytes()).unwrap();
/// assert_eq!(rows[0].area, "123");
/// ```
pub fn read_geography<R: Read>(reader: R) -> EngineResult<Vec<GeographyRow>> {
    read_rows("geography", reader, &GEOGRAPHY_COLUMNS, |columns, record| {
        GeographyRow::new(
            columns.get(record, "Area"),
            columns.get(record, "StateAb"),
            columns.get(record, "CountyTownName"),
        )
    })
}

/// Reads wage-scale rows from delimited text.
pub fn read_wage_scale<R: Read>(reader: R) -> EngineResult<Vec<WageScaleRow>> {
    read_rows("wage_scale", reader, &WAGE_SCALE_COLUMNS, |columns, record| {
        WageScaleRow::new(
            columns.get(record, "Area"),
            columns.get(record, "SocCode"),
            [
                columns.get(record, "Level1"),
                columns.get(record, "Level2"),
                columns.get(record, "Level3"),
                columns.get(record, "Level4"),
            ],
        )
    })
}

/// Reads case rows and keeps only those the filter accepts.
///
/// Dropped rows are not an error; they are only counted.
pub fn read_cases<R: Read>(reader: R, filter: &CaseFilter) -> EngineResult<CaseTable> {
    let all = read_rows("cases", reader, &CASE_COLUMNS, |columns, record| CaseRow {
        wage_rate_of_pay_from: columns.get(record, "WAGE_RATE_OF_PAY_FROM").to_string(),
        pw_wage_level: columns.get(record, "PW_WAGE_LEVEL").to_string(),
        worksite_postal_code: columns.get(record, "WORKSITE_POSTAL_CODE").to_string(),
        full_time_position: columns.get(record, "FULL_TIME_POSITION").to_string(),
        employer_name: columns.get(record, "EMPLOYER_NAME").to_string(),
        visa_class: columns.get(record, "VISA_CLASS").to_string(),
        soc_code: columns.get(record, "SOC_CODE").to_string(),
        prevailing_wage: columns.get(record, "PREVAILING_WAGE").to_string(),
        worksite_state: columns.get(record, "WORKSITE_STATE").to_string(),
        worksite_county: columns.get(record, "WORKSITE_COUNTY").to_string(),
    })?;

    let rows_read = all.len();
    let rows: Vec<CaseRow> = all.into_iter().filter(|row| filter.accepts(row)).collect();
    Ok(CaseTable {
        rows_filtered_out: rows_read - rows.len(),
        rows_read,
        rows,
    })
}

/// Opens and reads the geography table at `path`.
pub fn load_geography(path: &Path) -> EngineResult<Vec<GeographyRow>> {
    let rows = read_geography(open(path)?)?;
    info!(path = %path.display(), rows = rows.len(), "Loaded geography table");
    Ok(rows)
}

/// Opens and reads a wage-scale table at `path`.
pub fn load_wage_scale(path: &Path) -> EngineResult<Vec<WageScaleRow>> {
    let rows = read_wage_scale(open(path)?)?;
    info!(path = %path.display(), rows = rows.len(), "Loaded wage scale table");
    Ok(rows)
}

/// Opens and reads the case table at `path`, applying `filter`.
pub fn load_cases(path: &Path, filter: &CaseFilter) -> EngineResult<CaseTable> {
    let table = read_cases(open(path)?, filter)?;
    info!(
        path = %path.display(),
        rows_read = table.rows_read,
        rows_kept = table.rows.len(),
        "Loaded case table"
    );
    Ok(table)
}

fn open(path: &Path) -> EngineResult<File> {
    File::open(path).map_err(|_| EngineError::TableNotFound {
        path: path.display().to_string(),
    })
}

fn read_rows<R, T, F>(
    table: &str,
    reader: R,
    required: &[&'static str],
    mut build: F,
) -> EngineResult<Vec<T>>
where
    R: Read,
    F: FnMut(&ColumnIndex, &StringRecord) -> T,
{
    let parse_error = |e: csv::Error| EngineError::TableParseError {
        table: table.to_string(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = StringRecord::from_byte_record_lossy(
        reader.byte_headers().map_err(parse_error)?.clone(),
    );
    let columns = ColumnIndex::resolve(table, &header, required)?;

    let mut rows = Vec::new();
    let mut lossy = 0;
    for record in reader.byte_records() {
        let record = record.map_err(parse_error)?;
        if std::str::from_utf8(record.as_slice()).is_err() {
            lossy += 1;
        }
        rows.push(build(&columns, &StringRecord::from_byte_record_lossy(record)));
    }
    if lossy > 0 {
        debug!(table, rows = lossy, "Replaced invalid UTF-8 in table rows");
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CASE_HEADER: &str = "VISA_CLASS,EMPLOYER_NAME,FULL_TIME_POSITION,WAGE_RATE_OF_PAY_FROM,\
PW_WAGE_LEVEL,SOC_CODE,PREVAILING_WAGE,WORKSITE_STATE,WORKSITE_COUNTY,WORKSITE_POSTAL_CODE";

    fn filter() -> CaseFilter {
        CaseFilter::default()
    }

    #[test]
    fn test_geography_columns_resolved_by_name() {
        let data = "CountyTownName,Area,StateAb\nTravis County,12420,TX\n";
        let rows = read_geography(data.as_bytes()).unwrap();

        assert_eq!(rows, vec![GeographyRow::new("12420", "TX", "Travis County")]);
    }

    #[test]
    fn test_wage_scale_blank_levels_kept_as_text() {
        let data = "Area,SocCode,GeoLvl,Level1,Level2,Level3,Level4\n\
                    123,15-1132,1,40.0,50.0,,70.0\n";
        let rows = read_wage_scale(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].levels, ["40.0", "50.0", "", "70.0"].map(str::to_string));
    }

    #[test]
    fn test_missing_header_fails_before_rows() {
        let data = "Area,StateAb\n123,CA\n";
        let result = read_geography(data.as_bytes());

        match result {
            Err(EngineError::MissingColumn { table, column }) => {
                assert_eq!(table, "geography");
                assert_eq!(column, "CountyTownName");
            }
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_cases_filtered_by_visa_class_and_full_time() {
        let data = format!(
            "{}\n\
             H-1B,Acme,Y,72.0,IV,15-1132,70.0,CA,Santa Clara,95054\n\
             E-3 Australian,Acme,Y,72.0,IV,15-1132,70.0,CA,Santa Clara,95054\n\
             H-1B,Acme,N,72.0,IV,15-1132,70.0,CA,Santa Clara,95054\n\
             H-1B,\"Globex, Inc.\",Y,100000,II,15-1132,90000,CA,Alameda,94501\n",
            CASE_HEADER
        );
        let table = read_cases(data.as_bytes(), &filter()).unwrap();

        assert_eq!(table.rows_read, 4);
        assert_eq!(table.rows_filtered_out, 2);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].employer_name, "Globex, Inc.");
        assert_eq!(table.rows[1].worksite_postal_code, "94501");
    }

    #[test]
    fn test_invalid_utf8_cell_decoded_lossily() {
        let mut data = format!(
            "{}\nH-1B,Acme,Y,72.0,IV,15-1132,70.0,CA,Santa Clara,95054\n",
            CASE_HEADER
        )
        .into_bytes();
        data.extend_from_slice(b"H-1B,Caf\xe9 Corp,Y,56.0,II,15-1132,50.0,CA,Alameda,94501\n");

        let table = read_cases(data.as_slice(), &filter()).unwrap();

        assert_eq!(table.rows_read, 2);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].employer_name, "Acme");
        assert_eq!(table.rows[1].employer_name, "Caf\u{FFFD} Corp");
        assert_eq!(table.rows[1].worksite_county, "Alameda");
    }

    #[test]
    fn test_load_missing_file_returns_table_not_found() {
        let result = load_geography(Path::new("/nonexistent/Geography.csv"));
        match result {
            Err(EngineError::TableNotFound { path }) => {
                assert!(path.contains("Geography.csv"));
            }
            other => panic!("Expected TableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Area,SocCode,Level1,Level2,Level3,Level4").unwrap();
        writeln!(file, "123,15-1132,40,50,60,70").unwrap();

        let rows = load_wage_scale(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].soc_code, "15-1132");
    }
}
