use std::fmt;

use async_trait::async_trait;

use super::types::CountryRecord;

/// Errors that can occur while talking to the country directory.
/// None of them are retried; callers log and keep their last-good state.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// Network-level failure (DNS, connection refused, body read aborted).
    Network(String),
    /// The directory answered with a non-success status other than 404.
    Status { status: u16, message: String },
    /// HTTP 404 or a `"status": 404` sentinel inside a success body.
    NotFound,
    /// The body was not a country array (or sentinel).
    Parse(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Network(msg) => write!(f, "network error: {msg}"),
            DirectoryError::Status { status, message } => {
                write!(f, "directory error (HTTP {status}): {message}")
            }
            DirectoryError::NotFound => write!(f, "not found"),
            DirectoryError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Read-only access to a country directory.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Returns the name of the directory backend.
    fn name(&self) -> &str;

    /// The full directory.
    async fn all(&self) -> Result<Vec<CountryRecord>, DirectoryError>;

    /// Countries whose name contains `query`.
    async fn by_name(&self, query: &str) -> Result<Vec<CountryRecord>, DirectoryError>;

    /// Countries in `region` (directory spelling, e.g. `"europe"`).
    async fn by_region(&self, region: &str) -> Result<Vec<CountryRecord>, DirectoryError>;

    /// The single country with the given alpha-2/alpha-3 code.
    async fn by_alpha(&self, code: &str) -> Result<CountryRecord, DirectoryError>;
}
