//! Field identifiers for the profile form.
//!
//! Field names follow the submission-payload key names (camelCase), which is
//! what error maps and serialized values use on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A field of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Age,
    Email,
    Password,
    ConfirmPassword,
    Gender,
    Terms,
    Image,
    Country,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Age,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Gender,
        Field::Terms,
        Field::Image,
        Field::Country,
    ];

    /// The payload key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Gender => "gender",
            Field::Terms => "terms",
            Field::Image => "imageData",
            Field::Country => "country",
        }
    }

    /// The field whose validity depends on this one, if any.
    ///
    /// Password confirmation is a cross-field rule: changing either half of
    /// the pair must re-check the other.
    pub fn paired(&self) -> Option<Field> {
        match self {
            Field::Password => Some(Field::ConfirmPassword),
            Field::ConfirmPassword => Some(Field::Password),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_password_pairing_is_symmetric() {
        assert_eq!(Field::Password.paired(), Some(Field::ConfirmPassword));
        assert_eq!(Field::ConfirmPassword.paired(), Some(Field::Password));
        assert_eq!(Field::Email.paired(), None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!("nickname".parse::<Field>().is_err());
    }
}
