//! Declarative validation for the profile form.
//!
//! A [`RuleSet`] is an ordered list of pure predicate + message pairs. Rules
//! for a field run in declaration order and the first failure wins, so the
//! declaration order *is* the documented message precedence. For passwords
//! that order is: required, character-class complexity, minimum length —
//! the same order for both form variants.
//!
//! Two entry points:
//! - [`RuleSet::validate`]: the full pass, `Result<FormValues, ValidationErrors>`.
//! - [`RuleSet::check_field`]: partial-apply mode — run the whole set but
//!   report only the named field, used for incremental per-field feedback.

pub mod password;
pub mod patterns;

use crate::core::{Field, FormValues, ValidationErrors};

/// Messages surfaced for each failing rule.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_SHAPE: &str =
        "Name must start with an uppercase letter and be at least 2 characters";
    pub const AGE_REQUIRED: &str = "Age is required";
    pub const AGE_MIN: &str = "You must be at least 18 years old";
    pub const AGE_MAX: &str = "Age must be reasonable (120 or less)";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_SHAPE: &str = "Enter a valid email address";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const PASSWORD_COMPLEXITY: &str = "Password must contain an uppercase letter, \
         a lowercase letter, a digit, and a special character";
    pub const PASSWORD_LENGTH: &str = "Password must be at least 8 characters";
    pub const CONFIRM_REQUIRED: &str = "Confirm password is required";
    pub const CONFIRM_MATCH: &str = "Passwords must match";
    pub const GENDER_REQUIRED: &str = "Select a gender";
    pub const TERMS_REQUIRED: &str = "You must accept the terms and conditions";
    pub const IMAGE_SHAPE: &str =
        "Profile image must be a data URI for a png, jpeg, or svg image";
    pub const COUNTRY_REQUIRED: &str = "Country is required";
}

/// One pure constraint: the predicate returns true when the value passes.
pub struct Rule {
    field: Field,
    message: &'static str,
    check: fn(&FormValues) -> bool,
}

impl Rule {
    pub fn new(field: Field, message: &'static str, check: fn(&FormValues) -> bool) -> Self {
        Rule {
            field,
            message,
            check,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// An ordered collection of rules over the full value bundle.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    /// The rule set for the profile form.
    pub fn profile() -> Self {
        use messages::*;

        RuleSet::from_rules(vec![
            Rule::new(Field::Name, NAME_REQUIRED, |v| !v.name.is_empty()),
            Rule::new(Field::Name, NAME_SHAPE, |v| patterns::is_name(&v.name)),
            Rule::new(Field::Age, AGE_REQUIRED, |v| v.age.is_some()),
            Rule::new(Field::Age, AGE_MIN, |v| v.age.is_none_or(|a| a >= 18)),
            Rule::new(Field::Age, AGE_MAX, |v| v.age.is_none_or(|a| a <= 120)),
            Rule::new(Field::Email, EMAIL_REQUIRED, |v| !v.email.is_empty()),
            Rule::new(Field::Email, EMAIL_SHAPE, |v| patterns::is_email(&v.email)),
            Rule::new(Field::Password, PASSWORD_REQUIRED, |v| {
                !v.password.is_empty()
            }),
            Rule::new(Field::Password, PASSWORD_COMPLEXITY, |v| {
                password::has_all_classes(&v.password)
            }),
            Rule::new(Field::Password, PASSWORD_LENGTH, |v| {
                password::meets_length(&v.password)
            }),
            Rule::new(Field::ConfirmPassword, CONFIRM_REQUIRED, |v| {
                !v.confirm_password.is_empty()
            }),
            // Cross-field: validity is a function of both halves of the pair.
            Rule::new(Field::ConfirmPassword, CONFIRM_MATCH, |v| {
                v.confirm_password == v.password
            }),
            Rule::new(Field::Gender, GENDER_REQUIRED, |v| v.gender.is_set()),
            Rule::new(Field::Terms, TERMS_REQUIRED, |v| v.terms),
            Rule::new(Field::Image, IMAGE_SHAPE, |v| {
                v.image_data.is_empty() || crate::image::is_valid_data_uri(&v.image_data)
            }),
            Rule::new(Field::Country, COUNTRY_REQUIRED, |v| !v.country.is_empty()),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Collect every failing field's first message.
    pub fn errors_for(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for rule in &self.rules {
            if !(rule.check)(values) {
                errors.insert_first(rule.field, rule.message);
            }
        }
        errors
    }

    /// Full validation pass over all fields.
    pub fn validate(&self, values: &FormValues) -> Result<FormValues, ValidationErrors> {
        let errors = self.errors_for(values);
        if errors.is_empty() {
            Ok(values.clone())
        } else {
            Err(errors)
        }
    }

    /// Partial-apply mode: run the whole set, report only `field`.
    ///
    /// Returns `Some(message)` when the field currently fails, `None` when it
    /// is valid. Pure; never fails for expected-invalid input.
    pub fn check_field(&self, field: Field, values: &FormValues) -> Option<&'static str> {
        self.rules
            .iter()
            .filter(|r| r.field == field)
            .find(|r| !(r.check)(values))
            .map(|r| r.message)
    }

    /// Whether a full pass would succeed.
    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.errors_for(values).is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::profile()
    }
}
