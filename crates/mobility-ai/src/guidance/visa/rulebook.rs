use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{EducationLevel, VisaCategory};
use super::scoring::ExperienceBracket;
use crate::guidance::dataset::{self, DatasetError};

/// The visa reference dataset: category rules, scoring criteria, and
/// country notes. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct VisaRulebook {
    visa_types: BTreeMap<String, VisaCategoryRule>,
    eligibility_criteria: EligibilityCriteria,
    #[serde(default)]
    country_specific_info: BTreeMap<String, CountryInfo>,
}

impl VisaRulebook {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        dataset::load_json(path.as_ref())
    }

    pub fn rule(&self, category: VisaCategory) -> Option<&VisaCategoryRule> {
        self.visa_types.get(category.dataset_key())
    }

    pub fn criteria(&self) -> &EligibilityCriteria {
        &self.eligibility_criteria
    }

    pub fn country_info(&self, country: &str) -> Option<&CountryInfo> {
        self.country_specific_info.get(country)
    }

    /// Countries with per-country notes, for choice lists.
    pub fn countries_with_info(&self) -> Vec<&str> {
        self.country_specific_info.keys().map(String::as_str).collect()
    }

    /// Display names of every visa type open to the given destination.
    pub fn visa_types_for_country(&self, country: &str) -> Vec<&str> {
        self.visa_types
            .values()
            .filter(|rule| rule.countries.contains(country))
            .map(|rule| rule.name.as_str())
            .collect()
    }
}

/// One visa category as described by the rulebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaCategoryRule {
    pub name: String,
    pub processing_time: String,
    pub validity: String,
    pub countries: BTreeSet<String>,
    pub requirements: Vec<String>,
}

/// Points tables consulted by the eligibility score. Keys are the
/// education display labels and experience bracket names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub(crate) education_points: BTreeMap<String, f64>,
    pub(crate) experience_points: BTreeMap<String, f64>,
}

impl EligibilityCriteria {
    pub fn points_for_education(&self, level: EducationLevel) -> f64 {
        self.education_points.get(level.label()).copied().unwrap_or(0.0)
    }

    pub fn points_for_experience(&self, bracket: ExperienceBracket) -> f64 {
        self.experience_points.get(bracket.key()).copied().unwrap_or(0.0)
    }
}

/// Free-text notes for a destination country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub processing_authority: String,
    #[serde(default)]
    pub common_visas: Vec<String>,
    #[serde(default)]
    pub special_notes: String,
}
