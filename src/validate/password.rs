//! Password strength predicates.
//!
//! A strong password is at least [`MIN_LENGTH`] characters and contains at
//! least one lowercase letter, one uppercase letter, one digit, and one
//! special character from [`SPECIAL_CHARS`].

/// Minimum password length.
pub const MIN_LENGTH: usize = 8;

/// Special characters accepted by the complexity rule.
pub const SPECIAL_CHARS: &str = r##"!@#$%^&*()_+-=[]{};'"\|,.<>/?"##;

pub fn has_lower(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_upper(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Whether all four character classes are present.
pub fn has_all_classes(password: &str) -> bool {
    has_lower(password) && has_upper(password) && has_digit(password) && has_special(password)
}

pub fn meets_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

/// The full strength predicate: length and all character classes.
pub fn is_strong(password: &str) -> bool {
    meets_length(password) && has_all_classes(password)
}
