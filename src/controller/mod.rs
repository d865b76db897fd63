//! Form controllers: the seam between field state and the rule set.
//!
//! One trait, two concrete implementations:
//! - [`ControlledForm`]: re-validates the changed field on every edit and
//!   blur, surfacing per-field errors immediately; submit is gated on a full
//!   pass.
//! - [`UncontrolledForm`]: records edits silently and validates in bulk at
//!   submit time; the submit action is always enabled.
//!
//! Both run the same [`RuleSet`], so message precedence is identical across
//! variants. On a successful submit the controller merges the bundle into
//! the [`FormStore`] and invokes the submission callback exactly once; on a
//! failed submit it populates the error map and leaves the store and
//! callback untouched.

pub mod controlled;
pub mod uncontrolled;

use std::path::Path;
use std::time::{Duration, Instant};

use crate::core::{Field, FormPatch, FormValues, ValidationErrors};
use crate::image;
use crate::store::{FormStore, Variant};

pub use controlled::ControlledForm;
pub use uncontrolled::UncontrolledForm;

/// How long the post-submit highlight stays active. Cosmetic only.
pub const HIGHLIGHT_CLEAR: Duration = Duration::from_secs(5);

/// Lifecycle phase of a form.
///
/// `Submitting` is entered at the top of every submit and replaced before
/// the call returns; handlers run to completion on a single thread, so it is
/// never observed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Mounted, untouched.
    Pristine,
    /// Values edited since mount or last submit attempt.
    Editing,
    /// All current values pass validation (continuous variant only).
    Valid,
    /// At least one current value fails validation (continuous variant only).
    Invalid,
    /// A submit pass is in progress.
    Submitting,
    /// The last submit succeeded.
    Submitted,
    /// The last submit failed validation; the form stays editable.
    Rejected,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected,
}

/// Common controller surface shared by both form variants.
pub trait FormController {
    fn variant(&self) -> Variant;

    fn phase(&self) -> FormPhase;

    fn values(&self) -> &FormValues;

    fn errors(&self) -> &ValidationErrors;

    /// Whether an image conversion is in flight (gates the image input).
    fn is_processing(&self) -> bool;

    /// Whether the submit action is currently enabled.
    fn can_submit(&self) -> bool;

    /// Apply a user edit.
    fn edit(&mut self, patch: FormPatch);

    /// Focus left a field.
    fn blur(&mut self, field: Field);

    /// Read an image file into the bundle as a data-URI.
    ///
    /// Failures become a field-level error on [`Field::Image`] and leave the
    /// image value empty. A repeat call overwrites the previous result.
    fn attach_image(&mut self, path: &Path);

    /// Run a full validation pass and, on success, merge into the store and
    /// invoke the callback with the validated bundle.
    fn submit(
        &mut self,
        store: &mut FormStore,
        on_submit: &mut dyn FnMut(&FormValues),
    ) -> SubmitOutcome;

    /// Whether the post-submit highlight window is still open.
    fn highlight_active(&self) -> bool;
}

/// Shared image-attach flow used by both controllers.
///
/// Returns the error message to show against the image field, if any.
pub(crate) fn attach_image_value(
    values: &mut FormValues,
    processing: &mut bool,
    path: &Path,
) -> Option<String> {
    *processing = true;
    let result = image::read_to_data_uri(path);
    *processing = false;

    match result {
        Ok(uri) => {
            values.image_data = uri;
            None
        }
        Err(e) => {
            tracing::debug!("image attach failed: {e}");
            values.image_data.clear();
            Some(e.field_message())
        }
    }
}

pub(crate) fn highlight_open(submitted_at: Option<Instant>) -> bool {
    submitted_at.is_some_and(|at| at.elapsed() < HIGHLIGHT_CLEAR)
}
