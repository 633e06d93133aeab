mod dataset;

pub use dataset::{CultureFacts, CultureProfile, GeneralTips};

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::guidance::dataset::DatasetError;

/// Stateless lookup over the culture facts dataset. Absence of a country
/// is a valid "no data" state; accessors return `None` or empty slices
/// and leave the display text to the presentation layer.
#[derive(Debug)]
pub struct CultureGuide {
    facts: CultureFacts,
}

impl CultureGuide {
    pub fn new(facts: CultureFacts) -> Self {
        Self { facts }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        Ok(Self::new(CultureFacts::from_path(path)?))
    }

    pub fn country_profile(&self, country: &str) -> Option<&CultureProfile> {
        self.facts.country(country)
    }

    pub fn workplace_culture(&self, country: &str) -> Option<&BTreeMap<String, String>> {
        self.country_profile(country)
            .map(|profile| &profile.workplace_culture)
    }

    pub fn communication_style(&self, country: &str) -> Option<&BTreeMap<String, String>> {
        self.country_profile(country)
            .map(|profile| &profile.communication_style)
    }

    pub fn business_etiquette(&self, country: &str) -> Option<&BTreeMap<String, String>> {
        self.country_profile(country)
            .map(|profile| &profile.business_etiquette)
    }

    pub fn tips(&self, country: &str) -> &[String] {
        self.country_profile(country)
            .map(|profile| profile.tips.as_slice())
            .unwrap_or(&[])
    }

    pub fn time_zone(&self, country: &str) -> Option<&str> {
        self.country_profile(country)
            .and_then(|profile| profile.time_zone.as_deref())
    }

    pub fn working_hours(&self, country: &str) -> Option<&str> {
        self.country_profile(country)
            .and_then(|profile| profile.working_hours.as_deref())
    }

    pub fn holidays(&self, country: &str) -> &[String] {
        self.country_profile(country)
            .map(|profile| profile.holidays.as_slice())
            .unwrap_or(&[])
    }

    /// Countries present in the dataset, for choice lists.
    pub fn available_countries(&self) -> Vec<&str> {
        self.facts.country_names()
    }

    pub fn general_tips(&self) -> &GeneralTips {
        self.facts.general_tips()
    }

    /// Side-by-side pairing of two communication-style lookups. Neither
    /// side is validated; an unlisted country simply pairs as absent.
    pub fn compare_communication_styles(
        &self,
        first: &str,
        second: &str,
    ) -> CommunicationComparison {
        CommunicationComparison {
            first: CommunicationStyleEntry {
                country: first.to_string(),
                style: self.communication_style(first).cloned(),
            },
            second: CommunicationStyleEntry {
                country: second.to_string(),
                style: self.communication_style(second).cloned(),
            },
        }
    }
}

/// One side of a communication-style comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunicationStyleEntry {
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunicationComparison {
    pub first: CommunicationStyleEntry,
    pub second: CommunicationStyleEntry,
}
