//! Name normalization shared by the geography builder and the classifier.
//!
//! Both sides of the geography join must normalize identically, otherwise
//! a county written as "Santa Clara County" in the case table would never
//! meet "SANTA CLARA" in the reference table.

/// Trailing words removed from county names, applied in this order.
pub const COUNTY_SUFFIXES: [&str; 4] = ["COUNTY", "TOWN", "PARISH", "(CITY)"];

/// Upper-cases a state code.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::normalize_state;
///
/// assert_eq!(normalize_state("ca"), "CA");
/// ```
pub fn normalize_state(state: &str) -> String {
    state.trim().to_uppercase()
}

/// Normalizes a county or town name for lookup.
///
/// Upper-cases, removes periods, collapses whitespace runs, then strips
/// each of [`COUNTY_SUFFIXES`] when it appears as a trailing word.
/// A suffix embedded in a word ("COUNTYLINE") is left alone.
///
/// # Examples
///
/// ```
/// use wage_compliance::classification::normalize_county;
///
/// assert_eq!(normalize_county("Santa Clara County"), "SANTA CLARA");
/// assert_eq!(normalize_county("St.  Louis"), "ST LOUIS");
/// assert_eq!(normalize_county("Richmond (city)"), "RICHMOND");
/// assert_eq!(normalize_county("Orleans Parish"), "ORLEANS");
/// assert_eq!(normalize_county("Countyline"), "COUNTYLINE");
/// ```
pub fn normalize_county(county: &str) -> String {
    let mut name = collapse_whitespace(&county.to_uppercase().replace('.', ""));
    for suffix in COUNTY_SUFFIXES {
        let stem_len = name
            .strip_suffix(suffix)
            .and_then(|stem| stem.strip_suffix(' '))
            .map(str::len);
        if let Some(len) = stem_len {
            name.truncate(len);
        }
    }
    name
}

/// Normalizes an employer name for grouping.
///
/// # Example
///
/// ```
/// use wage_compliance::classification::normalize_employer;
///
/// assert_eq!(normalize_employer("Acme  Corp., Inc."), "ACME CORP, INC");
/// ```
pub fn normalize_employer(employer: &str) -> String {
    collapse_whitespace(&employer.to_uppercase().replace('.', ""))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_suffix_stripped_as_trailing_word() {
        assert_eq!(normalize_county("Santa Clara County"), "SANTA CLARA");
        assert_eq!(normalize_county("Greenwich Town"), "GREENWICH");
        assert_eq!(normalize_county("Jefferson Parish"), "JEFFERSON");
        assert_eq!(normalize_county("Alexandria (City)"), "ALEXANDRIA");
    }

    #[test]
    fn test_county_suffix_not_stripped_as_substring() {
        assert_eq!(normalize_county("Georgetown"), "GEORGETOWN");
        assert_eq!(normalize_county("County"), "COUNTY");
    }

    #[test]
    fn test_county_suffixes_applied_in_order() {
        // "TOWN" is checked after "COUNTY" has already been removed.
        assert_eq!(normalize_county("Allen Town County"), "ALLEN");
        // "COUNTY" is checked first, so it cannot be exposed by a later strip.
        assert_eq!(normalize_county("Jackson County Parish"), "JACKSON COUNTY");
    }

    #[test]
    fn test_county_periods_and_spaces() {
        assert_eq!(normalize_county("St. Mary's  Parish"), "ST MARY'S");
        assert_eq!(normalize_county("  Santa   Clara  "), "SANTA CLARA");
    }

    #[test]
    fn test_employer_normalization() {
        assert_eq!(normalize_employer("Google Inc."), "GOOGLE INC");
        assert_eq!(normalize_employer("Infosys  Limited"), "INFOSYS LIMITED");
        assert_eq!(normalize_employer("infosys limited"), "INFOSYS LIMITED");
    }

    #[test]
    fn test_state_normalization() {
        assert_eq!(normalize_state("tx"), "TX");
        assert_eq!(normalize_state(" Ny "), "NY");
    }
}
