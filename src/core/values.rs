//! Profile form values and the patch overlay used for merges.
//!
//! `FormValues` is the full value bundle a form works on and the shape of the
//! submission payload (camelCase keys). `FormPatch` is the same record with
//! every key optional; it backs both user edits and store merges.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::core::field::Field;

/// Selected gender, including the explicit opt-out.
///
/// Serializes to the payload strings `male`, `female`,
/// `prefer-not-to-disclose`, or the empty string when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    PreferNotToDisclose,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::PreferNotToDisclose => "prefer-not-to-disclose",
            Gender::Unspecified => "",
        }
    }

    /// Whether a gender has been selected.
    pub fn is_set(&self) -> bool {
        !matches!(self, Gender::Unspecified)
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "prefer-not-to-disclose" => Ok(Gender::PreferNotToDisclose),
            "" => Ok(Gender::Unspecified),
            other => Err(de::Error::custom(format!("unknown gender: {other}"))),
        }
    }
}

/// The full profile value bundle.
///
/// Created empty when a form mounts, mutated field by field, and merged into
/// the [`FormStore`](crate::store::FormStore) on successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,

    /// Age in whole years; `None` while the field is empty.
    pub age: Option<u32>,

    pub email: String,

    pub password: String,

    pub confirm_password: String,

    pub gender: Gender,

    /// Terms-and-conditions acceptance.
    pub terms: bool,

    /// Profile image as a `data:image/...;base64,` URI, or empty.
    pub image_data: String,

    pub country: String,
}

impl FormValues {
    /// Apply a patch in place: present keys overwrite, absent keys keep the
    /// prior value.
    pub fn apply(&mut self, patch: &FormPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(age) = &patch.age {
            self.age = *age;
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(password) = &patch.password {
            self.password = password.clone();
        }
        if let Some(confirm) = &patch.confirm_password {
            self.confirm_password = confirm.clone();
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(terms) = patch.terms {
            self.terms = terms;
        }
        if let Some(image) = &patch.image_data {
            self.image_data = image.clone();
        }
        if let Some(country) = &patch.country {
            self.country = country.clone();
        }
    }

    /// A patch carrying every current value (used to persist a full bundle).
    pub fn as_patch(&self) -> FormPatch {
        FormPatch {
            name: Some(self.name.clone()),
            age: Some(self.age),
            email: Some(self.email.clone()),
            password: Some(self.password.clone()),
            confirm_password: Some(self.confirm_password.clone()),
            gender: Some(self.gender),
            terms: Some(self.terms),
            image_data: Some(self.image_data.clone()),
            country: Some(self.country.clone()),
        }
    }
}

/// A partial value bundle: every field optional.
///
/// `age: Some(None)` clears the age field; `age: None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormPatch {
    pub name: Option<String>,
    pub age: Option<Option<u32>>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub gender: Option<Gender>,
    pub terms: Option<bool>,
    pub image_data: Option<String>,
    pub country: Option<String>,
}

impl FormPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setters for the common single-field edit.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: Option<u32>) -> Self {
        self.age = Some(age);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn confirm_password(mut self, confirm: impl Into<String>) -> Self {
        self.confirm_password = Some(confirm.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn terms(mut self, terms: bool) -> Self {
        self.terms = Some(terms);
        self
    }

    pub fn image_data(mut self, image: impl Into<String>) -> Self {
        self.image_data = Some(image.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// The fields this patch touches, in display order.
    pub fn fields(&self) -> Vec<Field> {
        let mut touched = Vec::new();
        if self.name.is_some() {
            touched.push(Field::Name);
        }
        if self.age.is_some() {
            touched.push(Field::Age);
        }
        if self.email.is_some() {
            touched.push(Field::Email);
        }
        if self.password.is_some() {
            touched.push(Field::Password);
        }
        if self.confirm_password.is_some() {
            touched.push(Field::ConfirmPassword);
        }
        if self.gender.is_some() {
            touched.push(Field::Gender);
        }
        if self.terms.is_some() {
            touched.push(Field::Terms);
        }
        if self.image_data.is_some() {
            touched.push(Field::Image);
        }
        if self.country.is_some() {
            touched.push(Field::Country);
        }
        touched
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
