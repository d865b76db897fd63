//! Per-field validation error map.
//!
//! Ephemeral by design: recomputed on every validation pass, cleared per
//! field when that field becomes valid. This is a value, not an exception;
//! expected-invalid input never produces an `Err` further up the stack.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::core::field::Field;

/// Mapping from field to the first failing rule's message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field unless one is already present.
    ///
    /// First failing rule wins; rule order is the documented precedence.
    pub fn insert_first(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Replace the message for a field (or set it fresh).
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the error for a field, if any.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate (field, message) pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn into_pairs(self) -> Vec<(Field, String)> {
        self.errors.into_iter().collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {field}: {message}")?;
        }
        Ok(())
    }
}
