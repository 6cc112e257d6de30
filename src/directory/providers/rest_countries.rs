//! REST Countries (v3.1) directory client.
//!
//! Endpoints used:
//! - `GET /all?fields=...` (the service refuses an unfiltered `/all`)
//! - `GET /name/{query}`
//! - `GET /region/{region}`
//! - `GET /alpha/{code}`

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;

use crate::directory::types::{CountryRecord, Payload, decode_records};
use crate::directory::{CountryDirectory, DirectoryError};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Field filter for `/all`. The service caps the list at ten fields.
const ALL_FIELDS: &str =
    "name,capital,population,region,subregion,flags,cca3,borders,currencies,languages";

pub struct RestCountriesDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesDirectory {
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_timeout(base_url, None)
    }

    /// Same as `new`, with an optional per-request timeout. `None` leaves
    /// requests unbounded.
    pub fn with_timeout(base_url: Option<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        });

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: &str, segment: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            resource,
            urlencoding::encode(segment)
        )
    }

    async fn get_records(&self, url: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Directory response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound);
        }
        if !status.is_success() {
            warn!("Directory error: {} - {}", status.as_u16(), body);
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        match decode_records(&body)? {
            Payload::Records(records) => Ok(records),
            Payload::NotFound => Err(DirectoryError::NotFound),
        }
    }
}

#[async_trait]
impl CountryDirectory for RestCountriesDirectory {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        let url = format!("{}/all?fields={}", self.base_url, ALL_FIELDS);
        let records = self.get_records(&url).await?;
        info!("Fetched full directory: {} countries", records.len());
        Ok(records)
    }

    async fn by_name(&self, query: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
        let records = self.get_records(&self.endpoint("name", query)).await?;
        info!("Name search '{}': {} countries", query, records.len());
        Ok(records)
    }

    async fn by_region(&self, region: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
        let records = self.get_records(&self.endpoint("region", region)).await?;
        info!("Region '{}': {} countries", region, records.len());
        Ok(records)
    }

    async fn by_alpha(&self, code: &str) -> Result<CountryRecord, DirectoryError> {
        self.get_records(&self.endpoint("alpha", code))
            .await?
            .into_iter()
            .next()
            .ok_or(DirectoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let directory = RestCountriesDirectory::new(None);
        assert_eq!(directory.base_url(), DEFAULT_BASE_URL);
        assert_eq!(directory.name(), "restcountries");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let directory = RestCountriesDirectory::new(Some("http://localhost:9999/v3.1/".to_string()));
        assert_eq!(directory.base_url(), "http://localhost:9999/v3.1");
    }

    #[test]
    fn test_endpoint_encodes_segment() {
        let directory = RestCountriesDirectory::new(Some("http://host".to_string()));
        assert_eq!(
            directory.endpoint("name", "united states"),
            "http://host/name/united%20states"
        );
        assert_eq!(directory.endpoint("alpha", "DEU"), "http://host/alpha/DEU");
    }
}
