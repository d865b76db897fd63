//! In-memory form value store.
//!
//! Holds the last-submitted (or in-progress) value bundle per form variant
//! so a reopened form can pre-fill. Merges are shallow replace-by-key; there
//! is no versioning, no undo, and no persistence beyond process lifetime.
//!
//! The store is deliberately not global: it is owned by an
//! [`AppContext`](crate::util::AppContext) (or a test) and passed to
//! controllers explicitly.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{FormPatch, FormValues};

/// Which form implementation a store slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Continuous (per-change) validation.
    Controlled,
    /// Submit-time validation.
    Uncontrolled,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Controlled => "controlled",
            Variant::Uncontrolled => "uncontrolled",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "controlled" => Ok(Variant::Controlled),
            "uncontrolled" => Ok(Variant::Uncontrolled),
            other => Err(format!("unknown form variant: {other}")),
        }
    }
}

/// Keyed store of form value bundles.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    slots: HashMap<Variant, FormValues>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current bundle for a variant (empty defaults if never merged).
    pub fn get(&self, variant: Variant) -> FormValues {
        self.slots.get(&variant).cloned().unwrap_or_default()
    }

    /// Shallow merge: keys present in `patch` overwrite, absent keys retain
    /// their prior values.
    pub fn merge(&mut self, variant: Variant, patch: &FormPatch) {
        self.slots.entry(variant).or_default().apply(patch);
    }

    /// Whether a variant has ever been merged into.
    pub fn has(&self, variant: Variant) -> bool {
        self.slots.contains_key(&variant)
    }
}
