//! Continuous-validation form controller.
//!
//! Every edit and blur re-runs partial validation for the touched field (and
//! its password pair), so the error display tracks the current values. The
//! submit action is enabled only while a full pass over all values succeeds.

use std::path::Path;
use std::time::Instant;

use crate::controller::{
    attach_image_value, highlight_open, FormController, FormPhase, SubmitOutcome,
};
use crate::core::{Field, FormPatch, FormValues, ValidationErrors};
use crate::store::{FormStore, Variant};
use crate::validate::RuleSet;

/// Variant A: field-level incremental feedback.
pub struct ControlledForm {
    rules: RuleSet,
    values: FormValues,
    errors: ValidationErrors,
    phase: FormPhase,
    processing: bool,
    submitted_at: Option<Instant>,
}

impl ControlledForm {
    /// Mount an empty form.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_values(rules, FormValues::default())
    }

    /// Mount pre-filled from previously stored values.
    pub fn with_values(rules: RuleSet, values: FormValues) -> Self {
        ControlledForm {
            rules,
            values,
            errors: ValidationErrors::new(),
            phase: FormPhase::Pristine,
            processing: false,
            submitted_at: None,
        }
    }

    /// Mount pre-filled from the store slot for this variant.
    pub fn from_store(rules: RuleSet, store: &FormStore) -> Self {
        Self::with_values(rules, store.get(Variant::Controlled))
    }

    /// Re-check one field and refresh its error display.
    fn refresh_field(&mut self, field: Field) {
        match self.rules.check_field(field, &self.values) {
            Some(message) => self.errors.set(field, message),
            None => self.errors.clear(field),
        }
    }

    /// Recompute the valid/invalid phase from the full value set.
    fn refresh_phase(&mut self) {
        self.phase = if self.rules.is_valid(&self.values) {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        };
    }
}

impl FormController for ControlledForm {
    fn variant(&self) -> Variant {
        Variant::Controlled
    }

    fn phase(&self) -> FormPhase {
        self.phase
    }

    fn values(&self) -> &FormValues {
        &self.values
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn is_processing(&self) -> bool {
        self.processing
    }

    fn can_submit(&self) -> bool {
        self.rules.is_valid(&self.values)
    }

    fn edit(&mut self, patch: FormPatch) {
        if patch.is_empty() {
            return;
        }

        self.values.apply(&patch);

        // Changed fields plus their cross-field pairs get fresh feedback.
        let mut touched = patch.fields();
        for field in patch.fields() {
            if let Some(pair) = field.paired() {
                if !touched.contains(&pair) {
                    touched.push(pair);
                }
            }
        }
        for field in touched {
            self.refresh_field(field);
        }

        self.refresh_phase();
    }

    fn blur(&mut self, field: Field) {
        self.refresh_field(field);
        if let Some(pair) = field.paired() {
            self.refresh_field(pair);
        }
        self.refresh_phase();
    }

    fn attach_image(&mut self, path: &Path) {
        match attach_image_value(&mut self.values, &mut self.processing, path) {
            Some(message) => self.errors.set(Field::Image, message),
            None => self.refresh_field(Field::Image),
        }
        self.refresh_phase();
    }

    fn submit(
        &mut self,
        store: &mut FormStore,
        on_submit: &mut dyn FnMut(&FormValues),
    ) -> SubmitOutcome {
        self.phase = FormPhase::Submitting;

        match self.rules.validate(&self.values) {
            Ok(validated) => {
                store.merge(Variant::Controlled, &validated.as_patch());
                on_submit(&validated);
                self.errors.clear_all();
                self.submitted_at = Some(Instant::now());
                self.phase = FormPhase::Submitted;
                tracing::info!("controlled form submitted");
                SubmitOutcome::Submitted
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = FormPhase::Rejected;
                SubmitOutcome::Rejected
            }
        }
    }

    fn highlight_active(&self) -> bool {
        highlight_open(self.submitted_at)
    }
}
