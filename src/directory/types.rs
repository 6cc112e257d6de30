//! Country records as served by the directory, plus the boundary decoder.
//!
//! The directory answers "not found" in two shapes: an HTTP 404 with a
//! `{"status":404,"message":"Not Found"}` body, or that same object inside a
//! success envelope. `decode_records` folds both into `Payload::NotFound`.
//! Every array element is decoded on its own so one malformed record does
//! not take the whole response down with it.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::provider::DirectoryError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    pub population: u64,
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub flags: Flags,
    /// ISO 3166-1 alpha-3 code.
    #[serde(default)]
    pub cca3: Option<String>,
    /// Alpha-3 codes of neighbouring countries.
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

impl CountryRecord {
    /// First listed capital, if any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }
}

/// A decoded directory response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Records(Vec<CountryRecord>),
    NotFound,
}

fn is_not_found_sentinel(value: &Value) -> bool {
    value.get("status").and_then(Value::as_u64) == Some(404)
}

fn decode_record(value: Value) -> Option<CountryRecord> {
    match serde_json::from_value::<CountryRecord>(value) {
        Ok(record) if record.name.common.trim().is_empty() => {
            warn!("Rejected country record with blank common name");
            None
        }
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Rejected malformed country record: {}", e);
            None
        }
    }
}

/// Decode a directory response body.
///
/// Arrays yield their valid records (malformed ones are logged and skipped).
/// A single object is accepted too, since `/alpha` occasionally answers that
/// way. Anything else is a `DirectoryError::Parse`.
pub fn decode_records(body: &str) -> Result<Payload, DirectoryError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DirectoryError::Parse(e.to_string()))?;

    match value {
        Value::Array(items) => {
            if items.iter().any(is_not_found_sentinel) {
                return Ok(Payload::NotFound);
            }
            let total = items.len();
            let records: Vec<CountryRecord> = items.into_iter().filter_map(decode_record).collect();
            if records.len() < total {
                warn!(
                    "Kept {} of {} country records after validation",
                    records.len(),
                    total
                );
            }
            Ok(Payload::Records(records))
        }
        Value::Object(_) if is_not_found_sentinel(&value) => Ok(Payload::NotFound),
        Value::Object(_) => decode_record(value)
            .map(|record| Payload::Records(vec![record]))
            .ok_or_else(|| DirectoryError::Parse("malformed country object".to_string())),
        other => Err(DirectoryError::Parse(format!(
            "expected an array of countries, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
