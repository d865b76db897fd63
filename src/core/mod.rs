//! Core data structures for Formwork.
//!
//! This module contains the foundational types used throughout the crate:
//! - The profile value bundle and its patch overlay
//! - Field identifiers and the per-field error map
//! - Country records from the external data source

pub mod country;
pub mod errors;
pub mod field;
pub mod values;

pub use country::{CountryFlags, CountryRecord};
pub use errors::ValidationErrors;
pub use field::Field;
pub use values::{FormPatch, FormValues, Gender};
