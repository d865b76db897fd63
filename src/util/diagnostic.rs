//! User-facing diagnostics.
//!
//! Validation failures and fetch errors are reported through a small
//! [`Diagnostic`] builder so every command formats problems the same way:
//! a severity tag, a message, optional context lines, and a suggestion.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
        }
    }
}

/// A structured diagnostic with optional context and suggestion.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub context: Vec<String>,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            context: Vec::new(),
            suggestion: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            context: Vec::new(),
            suggestion: None,
        }
    }

    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.context.push(line.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Render the diagnostic, with ANSI color when `color` is set.
    pub fn format(&self, color: bool) -> String {
        let mut out = String::new();
        if color {
            out.push_str(self.severity.ansi());
            out.push_str(self.severity.label());
            out.push_str("\x1b[0m: ");
        } else {
            out.push_str(self.severity.label());
            out.push_str(": ");
        }
        out.push_str(&self.message);
        for line in &self.context {
            out.push_str("\n  ");
            out.push_str(line);
        }
        if let Some(suggestion) = &self.suggestion {
            out.push_str("\n  hint: ");
            out.push_str(suggestion);
        }
        out
    }

    /// Print to stderr.
    pub fn emit(&self, color: bool) {
        eprintln!("{}", self.format(color));
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Canned suggestions attached to common failures.
pub mod suggestions {
    pub const FIX_PROFILE: &str = "correct the listed fields and run `formwork check` again";
    pub const CHECK_NETWORK: &str =
        "check your network connection, or pass --file to use a local country list";
    pub const IMAGE_FORMATS: &str = "supported image formats are png, jpeg, and svg";
    pub const PROFILE_FORMAT: &str =
        "profiles are TOML or JSON files with camelCase keys, e.g. confirmPassword";
}

/// Country list could not be fetched.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to load the country list from the {source_name} source: {message}")]
#[diagnostic(
    code(formwork::countries::fetch),
    help("check your network connection, or pass --file to use a local country list")
)]
pub struct CountryFetchError {
    pub source_name: String,
    pub message: String,
}

/// A profile file could not be read or parsed.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to read profile {path}: {message}")]
#[diagnostic(
    code(formwork::profile::read),
    help("profiles are TOML or JSON files with camelCase keys, e.g. confirmPassword")
)]
pub struct ProfileReadError {
    pub path: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format() {
        let d = Diagnostic::error("Name is required")
            .with_context("field: name")
            .with_suggestion(suggestions::FIX_PROFILE);

        let rendered = d.format(false);
        assert!(rendered.starts_with("error: Name is required"));
        assert!(rendered.contains("\n  field: name"));
        assert!(rendered.contains("\n  hint: correct the listed fields"));
    }

    #[test]
    fn test_colored_format_includes_reset() {
        let d = Diagnostic::warning("country list unavailable");
        let rendered = d.format(true);
        assert!(rendered.contains("\x1b[1;33m"));
        assert!(rendered.contains("\x1b[0m"));
    }

    #[test]
    fn test_warning_label() {
        let d = Diagnostic::warning("something");
        assert!(d.format(false).starts_with("warning: "));
    }
}
