//! The state → county → area code lookup.

use std::collections::HashMap;

use serde::Serialize;

/// Normalized geography lookup built from the geography reference table.
///
/// Keys are stored already normalized: state codes upper-cased, county
/// names normalized by [`crate::classification::normalize_county`].
/// A (state, county) pair maps to at most one area code and the first
/// inserted code wins.
///
/// # Example
///
/// ```
/// use wage_compliance::models::GeographyIndex;
///
/// let mut index = GeographyIndex::default();
/// assert!(index.insert("CA", "SANTA CLARA", "123"));
/// assert!(!index.insert("CA", "SANTA CLARA", "999"));
/// assert_eq!(index.area_code("CA", "SANTA CLARA"), Some("123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeographyIndex {
    states: HashMap<String, HashMap<String, String>>,
}

impl GeographyIndex {
    /// Inserts an area code unless the (state, county) pair already has one.
    ///
    /// Returns `true` when the code was stored, `false` when an earlier
    /// entry was kept.
    pub fn insert(&mut self, state: &str, county: &str, area: &str) -> bool {
        let counties = self.states.entry(state.to_string()).or_default();
        if counties.contains_key(county) {
            return false;
        }
        counties.insert(county.to_string(), area.to_string());
        true
    }

    /// Returns the county map for a state, if the state is known.
    pub fn state(&self, state: &str) -> Option<&HashMap<String, String>> {
        self.states.get(state)
    }

    /// Looks up the area code for a normalized (state, county) pair.
    pub fn area_code(&self, state: &str, county: &str) -> Option<&str> {
        self.state(state)
            .and_then(|counties| counties.get(county))
            .map(String::as_str)
    }

    /// Number of states in the index.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of (state, county) entries.
    pub fn len(&self) -> usize {
        self.states.values().map(HashMap::len).sum()
    }

    /// Returns true if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
