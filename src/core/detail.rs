//! # Detail View State
//!
//! Each entry into a detail route runs a small state machine:
//!
//! ```text
//! Idle ──route entry──▶ Loading ──┬──▶ Loaded
//!                                 └──▶ Error
//! ```
//!
//! Re-entering a route (including the same country) starts again from
//! `Loading`. Nothing is cached between entries.

use std::collections::BTreeMap;

use crate::directory::CountryRecord;

/// Display fields extracted from a country record.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub name: String,
    pub official: String,
    pub flag_png: String,
    pub flag_alt: Option<String>,
    pub population: u64,
    pub region: String,
    pub subregion: String,
    pub capital: Vec<String>,
    pub currencies: Vec<String>,
    pub languages: Vec<String>,
    /// Alpha codes in directory order.
    pub borders: Vec<String>,
    /// Code → common name, filled when border resolution is enabled.
    pub border_names: BTreeMap<String, String>,
}

impl CountryDetail {
    pub fn new(record: CountryRecord, border_names: BTreeMap<String, String>) -> Self {
        Self {
            name: record.name.common,
            official: record.name.official,
            flag_png: record.flags.png,
            flag_alt: record.flags.alt,
            population: record.population,
            region: record.region,
            subregion: record.subregion.unwrap_or_default(),
            capital: record.capital,
            currencies: record.currencies.into_values().map(|c| c.name).collect(),
            languages: record.languages.into_values().collect(),
            borders: record.borders,
            border_names,
        }
    }

    /// The name shown on a border tag: resolved name if known, else the code.
    pub fn border_label<'a>(&'a self, code: &'a str) -> &'a str {
        self.border_names.get(code).map(String::as_str).unwrap_or(code)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading { name: String },
    Loaded(Box<CountryDetail>),
    Error(String),
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    pub fn loaded(&self) -> Option<&CountryDetail> {
        match self {
            DetailState::Loaded(detail) => Some(detail),
            _ => None,
        }
    }
}
