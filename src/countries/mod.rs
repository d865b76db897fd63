//! Country directory: external data sources plus the autocomplete filter.

pub mod filter;
pub mod provider;

pub use filter::{filter_countries, MAX_RESULTS};
pub use provider::{
    CountryDirectory, CountryError, CountrySource, FileSource, RestSource, DEFAULT_ENDPOINT,
};
