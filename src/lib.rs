//! Formwork: a profile-form engine with declarative validation.
//!
//! The library models a sign-up style profile form end to end: a rule set
//! over typed field values, two controller variants (continuous feedback vs
//! submit-time validation), a per-variant value store, a country directory
//! with an autocomplete filter, and image-to-data-URI conversion.

pub mod controller;
pub mod core;
pub mod countries;
pub mod image;
pub mod store;
pub mod util;
pub mod validate;

#[cfg(test)]
pub mod test_support;

pub use crate::controller::{
    ControlledForm, FormController, FormPhase, SubmitOutcome, UncontrolledForm,
};
pub use crate::core::{CountryRecord, Field, FormPatch, FormValues, Gender, ValidationErrors};
pub use crate::countries::{filter_countries, CountryDirectory, FileSource, RestSource};
pub use crate::store::{FormStore, Variant};
pub use crate::util::{AppContext, Config};
pub use crate::validate::RuleSet;
