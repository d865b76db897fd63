//! Shared fixtures for unit tests.

use crate::core::{CountryFlags, CountryRecord, FormValues, Gender};

/// A profile that passes every rule in the default set.
pub fn valid_values() -> FormValues {
    FormValues {
        name: "John".to_string(),
        age: Some(25),
        email: "john@x.com".to_string(),
        password: "StrongPass123!".to_string(),
        confirm_password: "StrongPass123!".to_string(),
        gender: Gender::Male,
        terms: true,
        image_data: String::new(),
        country: "United States".to_string(),
    }
}

fn country(name: &str, alpha2: &str, alpha3: &str, region: &str) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        alpha2_code: alpha2.to_string(),
        alpha3_code: alpha3.to_string(),
        region: region.to_string(),
        flags: CountryFlags {
            small: Some(format!(
                "https://flags.example/{}-small.png",
                alpha2.to_lowercase()
            )),
            large: None,
        },
        ..Default::default()
    }
}

/// Ten countries in a fixed order.
pub fn fixture_countries() -> Vec<CountryRecord> {
    vec![
        country("United States", "US", "USA", "Americas"),
        country("Canada", "CA", "CAN", "Americas"),
        country("Australia", "AU", "AUS", "Oceania"),
        country("Austria", "AT", "AUT", "Europe"),
        country("France", "FR", "FRA", "Europe"),
        country("Germany", "DE", "DEU", "Europe"),
        country("Japan", "JP", "JPN", "Asia"),
        country("Mexico", "MX", "MEX", "Americas"),
        country("Brazil", "BR", "BRA", "Americas"),
        country("Tanzania", "TZ", "TZA", "Africa"),
    ]
}
