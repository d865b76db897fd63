//! Submit-time-validation form controller.
//!
//! Edits are recorded with no validation feedback and the submit action is
//! always enabled. The full rule set runs once at submit: a failure
//! populates every field error and leaves the store and callback untouched;
//! a success merges, invokes the callback, and clears the error map.

use std::path::Path;
use std::time::Instant;

use crate::controller::{
    attach_image_value, highlight_open, FormController, FormPhase, SubmitOutcome,
};
use crate::core::{Field, FormPatch, FormValues, ValidationErrors};
use crate::store::{FormStore, Variant};
use crate::validate::RuleSet;

/// Variant B: bulk validation at submit only.
pub struct UncontrolledForm {
    rules: RuleSet,
    values: FormValues,
    errors: ValidationErrors,
    phase: FormPhase,
    processing: bool,
    submitted_at: Option<Instant>,
}

impl UncontrolledForm {
    /// Mount an empty form.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_values(rules, FormValues::default())
    }

    /// Mount pre-filled from previously stored values.
    pub fn with_values(rules: RuleSet, values: FormValues) -> Self {
        UncontrolledForm {
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
        Self::with_values(rules, store.get(Variant::Uncontrolled))
    }
}

impl FormController for UncontrolledForm {
    fn variant(&self) -> Variant {
        Variant::Uncontrolled
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
        // Always enabled; validation happens inside submit.
        true
    }

    fn edit(&mut self, patch: FormPatch) {
        if patch.is_empty() {
            return;
        }
        self.values.apply(&patch);
        self.phase = FormPhase::Editing;
    }

    fn blur(&mut self, _field: Field) {
        // No per-field feedback in this variant.
    }

    fn attach_image(&mut self, path: &Path) {
        match attach_image_value(&mut self.values, &mut self.processing, path) {
            Some(message) => self.errors.set(Field::Image, message),
            None => self.errors.clear(Field::Image),
        }
        self.phase = FormPhase::Editing;
    }

    fn submit(
        &mut self,
        store: &mut FormStore,
        on_submit: &mut dyn FnMut(&FormValues),
    ) -> SubmitOutcome {
        self.phase = FormPhase::Submitting;

        match self.rules.validate(&self.values) {
            Ok(validated) => {
                store.merge(Variant::Uncontrolled, &validated.as_patch());
                on_submit(&validated);
                self.errors.clear_all();
                self.submitted_at = Some(Instant::now());
                self.phase = FormPhase::Submitted;
                tracing::info!("uncontrolled form submitted");
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
