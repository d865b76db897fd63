//! Country data sources and the session-scoped directory.
//!
//! The country list comes from an external provider and is fetched once per
//! session. [`CountryDirectory`] wraps a [`CountrySource`] and surfaces the
//! loading/error flags the UI layer reads; a failed fetch leaves the list
//! empty and is never retried automatically.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::core::CountryRecord;

/// Default country endpoint (restcountries v2 payload shape).
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v2/all";

/// Default request timeout for the one-shot fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error fetching or decoding the country list.
#[derive(Debug, Error)]
pub enum CountryError {
    #[error("country endpoint returned HTTP {status}")]
    Http { status: u16 },

    #[error("failed to reach country endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode country list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read country file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A provider of country records.
pub trait CountrySource {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Fetch the full country list.
    fn fetch(&self) -> Result<Vec<CountryRecord>, CountryError>;
}

/// HTTP source performing a single blocking GET.
pub struct RestSource {
    endpoint: Url,
    timeout: Duration,
}

impl RestSource {
    pub fn new(endpoint: Url) -> Self {
        RestSource {
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CountrySource for RestSource {
    fn name(&self) -> &str {
        "rest"
    }

    fn fetch(&self) -> Result<Vec<CountryRecord>, CountryError> {
        tracing::info!("fetching country list from {}", self.endpoint);

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client.get(self.endpoint.clone()).send()?;
        if !response.status().is_success() {
            return Err(CountryError::Http {
                status: response.status().as_u16(),
            });
        }

        let records: Vec<CountryRecord> = response.json()?;
        tracing::debug!("fetched {} country records", records.len());
        Ok(records)
    }
}

/// Local-file source for offline use and tests.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CountrySource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self) -> Result<Vec<CountryRecord>, CountryError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| CountryError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Session-scoped country list with the flags the UI reads.
#[derive(Debug, Default)]
pub struct CountryDirectory {
    records: Vec<CountryRecord>,
    loading: bool,
    error: Option<String>,
    loaded: bool,
}

impl CountryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the list from a source, once per session.
    ///
    /// A repeat call after a successful load is a no-op. After a failure the
    /// error flag stays set and a later call may retry (user-initiated;
    /// nothing retries automatically).
    pub fn load(&mut self, source: &dyn CountrySource) {
        if self.loaded {
            return;
        }

        self.loading = true;
        self.error = None;

        match source.fetch() {
            Ok(records) => {
                self.records = records;
                self.loaded = true;
            }
            Err(e) => {
                tracing::warn!("country fetch via {} failed: {e}", source.name());
                self.records.clear();
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_source_parses_fixture() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countries.json");
        std::fs::write(
            &path,
            r#"[{"name": "Canada", "alpha2Code": "CA", "alpha3Code": "CAN"}]"#,
        )
        .unwrap();

        let records = FileSource::new(&path).fetch().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alpha2_code, "CA");
    }

    #[test]
    fn test_file_source_missing_file_is_io_error() {
        let err = FileSource::new("/nonexistent/countries.json")
            .fetch()
            .unwrap_err();
        assert!(matches!(err, CountryError::Io { .. }));
    }

    #[test]
    fn test_file_source_bad_json_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countries.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileSource::new(&path).fetch().unwrap_err();
        assert!(matches!(err, CountryError::Decode(_)));
    }

    #[test]
    fn test_directory_failure_sets_error_and_leaves_list_empty() {
        let mut dir = CountryDirectory::new();
        dir.load(&FileSource::new("/nonexistent/countries.json"));

        assert!(!dir.is_loading());
        assert!(!dir.is_loaded());
        assert!(dir.error().is_some());
        assert!(dir.records().is_empty());
    }

    #[test]
    fn test_directory_loads_once_per_session() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countries.json");
        std::fs::write(
            &path,
            r#"[{"name": "Canada", "alpha2Code": "CA", "alpha3Code": "CAN"}]"#,
        )
        .unwrap();

        let mut dir = CountryDirectory::new();
        dir.load(&FileSource::new(&path));
        assert!(dir.is_loaded());
        assert_eq!(dir.records().len(), 1);

        // Second load is a no-op, even against a broken source.
        dir.load(&FileSource::new("/nonexistent/countries.json"));
        assert!(dir.error().is_none());
        assert_eq!(dir.records().len(), 1);
    }

    #[test]
    fn test_directory_failed_load_can_be_retried() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countries.json");

        let mut dir = CountryDirectory::new();
        dir.load(&FileSource::new(&path));
        assert!(dir.error().is_some());

        std::fs::write(&path, r#"[{"name": "Canada", "alpha2Code": "CA"}]"#).unwrap();
        dir.load(&FileSource::new(&path));
        assert!(dir.is_loaded());
        assert!(dir.error().is_none());
    }
}
