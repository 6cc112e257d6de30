//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::settings::Theme;
use crate::core::state::App;
use crate::directory::{CountryDirectory, CountryName, CountryRecord, DirectoryError, Flags};

/// A directory that never finds anything, for tests that don't need data.
pub struct NoopDirectory;

#[async_trait]
impl CountryDirectory for NoopDirectory {
    fn name(&self) -> &str {
        "noop"
    }

    async fn all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        Ok(Vec::new())
    }

    async fn by_name(&self, _query: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
        Err(DirectoryError::NotFound)
    }

    async fn by_region(&self, _region: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
        Err(DirectoryError::NotFound)
    }

    async fn by_alpha(&self, _code: &str) -> Result<CountryRecord, DirectoryError> {
        Err(DirectoryError::NotFound)
    }
}

/// An in-memory directory that answers like the real service.
pub struct StaticDirectory {
    records: Vec<CountryRecord>,
}

impl StaticDirectory {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    fn matching(&self, keep: impl Fn(&CountryRecord) -> bool) -> Result<Vec<CountryRecord>, DirectoryError> {
        let found: Vec<CountryRecord> = self.records.iter().filter(|r| keep(r)).cloned().collect();
        if found.is_empty() {
            Err(DirectoryError::NotFound)
        } else {
            Ok(found)
        }
    }
}

#[async_trait]
impl CountryDirectory for StaticDirectory {
    fn name(&self) -> &str {
        "static"
    }

    async fn all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        Ok(self.records.clone())
    }

    async fn by_name(&self, query: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
        let query = query.to_lowercase();
        self.matching(|r| r.name.common.to_lowercase().contains(&query))
    }

    async fn by_region(&self, region: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
        self.matching(|r| r.region.eq_ignore_ascii_case(region))
    }

    async fn by_alpha(&self, code: &str) -> Result<CountryRecord, DirectoryError> {
        self.records
            .iter()
            .find(|r| r.cca3.as_deref() == Some(code))
            .cloned()
            .ok_or(DirectoryError::NotFound)
    }
}

/// Builds a record whose alpha-3 code is the first three letters of its name.
pub fn country(name: &str, region: &str, borders: &[&str]) -> CountryRecord {
    CountryRecord {
        name: CountryName {
            common: name.to_string(),
            official: format!("Republic of {name}"),
        },
        capital: vec![format!("{name} City")],
        population: 1_000_000,
        region: region.to_string(),
        subregion: None,
        flags: Flags::default(),
        cca3: Some(name.chars().take(3).collect::<String>().to_uppercase()),
        borders: borders.iter().map(|b| b.to_string()).collect(),
        currencies: Default::default(),
        languages: Default::default(),
    }
}

/// Creates a test App backed by a NoopDirectory.
pub fn test_app() -> App {
    App::new(Arc::new(NoopDirectory), Theme::Light)
}
