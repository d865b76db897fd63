//! `formwork demo` command
//!
//! Scripted walkthrough of the two form variants, printing the feedback each
//! one produces for the same sequence of edits.

use anyhow::Result;

use crate::cli::DemoArgs;
use formwork::controller::{ControlledForm, UncontrolledForm};
use formwork::core::Gender;
use formwork::validate::RuleSet;
use formwork::{FormController, FormPatch, FormStore, SubmitOutcome, Variant};

pub fn execute(args: DemoArgs, _color: bool) -> Result<()> {
    let mut store = FormStore::new();

    let variants = match args.variant {
        Some(v) => vec![v],
        None => vec![Variant::Controlled, Variant::Uncontrolled],
    };

    for variant in variants {
        let mut controller: Box<dyn FormController> = match variant {
            Variant::Controlled => Box::new(ControlledForm::new(RuleSet::profile())),
            Variant::Uncontrolled => Box::new(UncontrolledForm::new(RuleSet::profile())),
        };
        walkthrough(controller.as_mut(), &mut store);
    }

    Ok(())
}

fn walkthrough(form: &mut dyn FormController, store: &mut FormStore) {
    println!("=== {} variant ===", form.variant());

    println!("> edit email = \"john@\"");
    form.edit(FormPatch::new().email("john@"));
    report(form);

    println!("> submit");
    match form.submit(store, &mut |_| {}) {
        SubmitOutcome::Submitted => println!("  submitted"),
        SubmitOutcome::Rejected => println!("  rejected ({} errors)", form.errors().len()),
    }
    report(form);

    println!("> fill in a complete profile");
    form.edit(
        FormPatch::new()
            .name("John")
            .age(Some(25))
            .email("john@x.com")
            .password("StrongPass123!")
            .confirm_password("StrongPass123!")
            .gender(Gender::Male)
            .terms(true)
            .country("United States"),
    );
    report(form);

    println!("> submit");
    let mut payload = None;
    match form.submit(store, &mut |v| payload = Some(v.clone())) {
        SubmitOutcome::Submitted => match payload {
            Some(values) => println!("  submitted: {} <{}>", values.name, values.email),
            None => println!("  submitted"),
        },
        SubmitOutcome::Rejected => println!("  rejected ({} errors)", form.errors().len()),
    }

    println!();
}

fn report(form: &dyn FormController) {
    println!(
        "  phase: {:?}, can_submit: {}",
        form.phase(),
        form.can_submit()
    );
    for (field, message) in form.errors().iter() {
        println!("  {field}: {message}");
    }
}
