//! Country records as returned by the external country data source.
//!
//! The payload uses camelCase keys and a nested flag object with small/large
//! image URIs. Records are fetched once per session and read-only after.

use serde::{Deserialize, Serialize};

/// Flag image URIs for a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryFlags {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// One country as delivered by the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,

    pub alpha2_code: String,

    pub alpha3_code: String,

    pub capital: Option<String>,

    pub population: u64,

    pub region: String,

    pub flags: CountryFlags,

    pub alt_spellings: Vec<String>,

    /// Surface area in square kilometres, when known.
    pub area: Option<f64>,

    /// Alpha-3 codes of bordering countries.
    pub borders: Vec<String>,
}

impl CountryRecord {
    /// The small flag URI, when present.
    pub fn flag(&self) -> Option<&str> {
        self.flags.small.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_v2_payload_shape() {
        let json = r#"{
            "name": "United States of America",
            "alpha2Code": "US",
            "alpha3Code": "USA",
            "capital": "Washington, D.C.",
            "population": 329484123,
            "region": "Americas",
            "flags": {"small": "https://flags.example/us-small.png", "large": "https://flags.example/us-large.png"},
            "altSpellings": ["US", "USA"],
            "area": 9629091.0,
            "borders": ["CAN", "MEX"]
        }"#;

        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.alpha2_code, "US");
        assert_eq!(record.borders, vec!["CAN", "MEX"]);
        assert_eq!(record.flag(), Some("https://flags.example/us-small.png"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let record: CountryRecord =
            serde_json::from_str(r#"{"name": "Nowhere", "alpha2Code": "NW"}"#).unwrap();
        assert_eq!(record.capital, None);
        assert_eq!(record.population, 0);
        assert!(record.borders.is_empty());
        assert_eq!(record.flag(), None);
    }
}
