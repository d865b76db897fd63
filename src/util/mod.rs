//! Shared infrastructure: configuration, app context, diagnostics.

pub mod config;
pub mod context;
pub mod diagnostic;

pub use config::Config;
pub use context::AppContext;
pub use diagnostic::{Diagnostic, Severity};
