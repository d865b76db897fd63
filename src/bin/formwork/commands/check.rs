//! `formwork check` command
//!
//! Validates a profile file through the same controller path the form uses.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::CheckArgs;
use formwork::controller::{ControlledForm, UncontrolledForm};
use formwork::util::diagnostic::{suggestions, Diagnostic, ProfileReadError};
use formwork::util::AppContext;
use formwork::validate::RuleSet;
use formwork::{FormController, FormValues, SubmitOutcome, Variant};

pub fn execute(args: CheckArgs, verbose: bool, color: bool) -> Result<()> {
    let ctx = AppContext::from_env(verbose, color);
    let values = read_profile(&args.file)?;

    let mut store = ctx.store;
    let mut controller: Box<dyn FormController> = match args.variant {
        Variant::Controlled => Box::new(ControlledForm::new(RuleSet::profile())),
        Variant::Uncontrolled => Box::new(UncontrolledForm::new(RuleSet::profile())),
    };

    controller.edit(values.as_patch());

    let mut submitted = None;
    let outcome = controller.submit(&mut store, &mut |v| submitted = Some(v.clone()));

    match outcome {
        SubmitOutcome::Submitted => {
            let values = submitted.context("submit callback was not invoked")?;
            println!("profile is valid ({} variant)", args.variant);
            if verbose {
                println!("{}", serde_json::to_string_pretty(&values)?);
            }
            Ok(())
        }
        SubmitOutcome::Rejected => {
            let mut diag = Diagnostic::error(format!(
                "profile failed validation ({} field{})",
                controller.errors().len(),
                if controller.errors().len() == 1 { "" } else { "s" }
            ));
            for (field, message) in controller.errors().iter() {
                diag = diag.with_context(format!("{field}: {message}"));
            }
            diag.with_suggestion(suggestions::FIX_PROFILE).emit(color);
            bail!("profile in {} is invalid", args.file.display());
        }
    }
}

/// Read a profile from a TOML or JSON file, chosen by extension.
fn read_profile(path: &Path) -> Result<FormValues> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile: {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    let parsed = match ext {
        "json" => serde_json::from_str(&contents).map_err(|e| e.to_string()),
        "toml" | "" => toml::from_str(&contents).map_err(|e| e.to_string()),
        other => Err(format!("unsupported format `.{other}` (expected .toml or .json)")),
    };

    parsed.map_err(|message| {
        ProfileReadError {
            path: path.display().to_string(),
            message,
        }
        .into()
    })
}
