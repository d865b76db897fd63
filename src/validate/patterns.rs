//! Field pattern checks backed by compiled regexes.

use std::sync::LazyLock;

use regex::Regex;

/// RFC-like email shape: something@something.tld, no whitespace.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether `value` looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Whether `value` is a plausible name: first character uppercase A-Z and at
/// least two characters long.
pub fn is_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.next().is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert!(is_email("john@x.com"));
        assert!(is_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(!is_email(""));
        assert!(!is_email("john"));
        assert!(!is_email("john@x"));
        assert!(!is_email("jo hn@x.com"));
        assert!(!is_email("@x.com"));
    }

    #[test]
    fn test_name_requires_leading_capital_and_length() {
        assert!(is_name("Jo"));
        assert!(is_name("John"));
        assert!(!is_name("j"));
        assert!(!is_name("J"));
        assert!(!is_name("john"));
        assert!(!is_name(""));
    }
}
