//! Application context shared across command handlers.

use std::path::PathBuf;

use crate::countries::CountryDirectory;
use crate::store::FormStore;
use crate::util::config::{self, Config};

/// Injectable container for per-invocation state.
///
/// Commands receive an `AppContext` instead of touching globals, which keeps
/// them testable with a stubbed config and an in-memory store.
pub struct AppContext {
    /// Merged configuration (global then project)
    pub config: Config,

    /// Per-variant form value store
    pub store: FormStore,

    /// Country directory, loaded on first use
    pub directory: CountryDirectory,

    /// Working directory for the invocation
    pub cwd: PathBuf,

    /// Verbose output
    pub verbose: bool,

    /// Whether to use colored output
    pub color: bool,
}

impl AppContext {
    /// Build a context from the process environment.
    pub fn from_env(verbose: bool, color: bool) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let global_path = config::global_config_path().unwrap_or_default();
        let project_path = config::project_config_path(&cwd);
        let config = config::load_config(&global_path, &project_path);

        AppContext {
            config,
            store: FormStore::new(),
            directory: CountryDirectory::new(),
            cwd,
            verbose,
            color,
        }
    }

    /// Build a context with explicit config, for tests.
    pub fn with_config(config: Config) -> Self {
        AppContext {
            config,
            store: FormStore::new(),
            directory: CountryDirectory::new(),
            cwd: PathBuf::from("."),
            verbose: false,
            color: false,
        }
    }
}
