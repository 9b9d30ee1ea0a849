//! Raw table rows.
//!
//! These are the already-parsed, still-unnormalized rows handed to the
//! index builders and the classifier. The [`crate::tables`] module
//! produces them from delimited files; the API accepts [`CaseRow`] as JSON.

use serde::{Deserialize, Serialize};

/// A row from the geography reference table (`Area`, `StateAb`, `CountyTownName`).
///
/// # Example
///
/// ```
/// use wage_compliance::models::GeographyRow;
///
/// let row = GeographyRow::new("123", "CA", "Santa Clara County");
/// assert_eq!(row.county_town_name, "Santa Clara County");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographyRow {
    /// Opaque area code linking this geography to wage-scale entries.
    pub area: String,
    /// State abbreviation as written in the table.
    pub state_ab: String,
    /// County or town name as written in the table.
    pub county_town_name: String,
}

impl GeographyRow {
    /// Creates a row from its three column values.
    pub fn new(
        area: impl Into<String>,
        state_ab: impl Into<String>,
        county_town_name: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            state_ab: state_ab.into(),
            county_town_name: county_town_name.into(),
        }
    }
}

/// A row from a wage-scale reference table (`Area`, `SocCode`, `Level1..Level4`).
///
/// Level cells are kept as text; blank means "no data" and is resolved
/// by [`crate::classification::build_wage_scale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageScaleRow {
    /// Area code.
    pub area: String,
    /// Occupation (SOC) code.
    pub soc_code: String,
    /// Raw wage cells for levels 1 through 4.
    pub levels: [String; 4],
}

impl WageScaleRow {
    /// Creates a row from its column values.
    pub fn new(area: impl Into<String>, soc_code: impl Into<String>, levels: [&str; 4]) -> Self {
        Self {
            area: area.into(),
            soc_code: soc_code.into(),
            levels: levels.map(str::to_string),
        }
    }
}

/// A row from the case input table.
///
/// Field names follow the upper-case column headers of the source table,
/// so the same shape deserializes from JSON request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CaseRow {
    /// Offered wage (`WAGE_RATE_OF_PAY_FROM`), hourly or annual.
    pub wage_rate_of_pay_from: String,
    /// Wage level text (`PW_WAGE_LEVEL`), e.g. "I" .. "IV".
    pub pw_wage_level: String,
    /// Worksite postal code.
    #[serde(default)]
    pub worksite_postal_code: String,
    /// "Y" for full-time positions.
    #[serde(default)]
    pub full_time_position: String,
    /// Employer name as filed.
    pub employer_name: String,
    /// Visa class, e.g. "H-1B".
    #[serde(default)]
    pub visa_class: String,
    /// Occupation (SOC) code.
    pub soc_code: String,
    /// Prevailing wage as filed; carried for reporting only.
    #[serde(default)]
    pub prevailing_wage: String,
    /// Worksite state abbreviation.
    pub worksite_state: String,
    /// Worksite county name.
    pub worksite_county: String,
}
