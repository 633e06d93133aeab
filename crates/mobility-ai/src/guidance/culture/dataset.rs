use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::guidance::dataset::{self, DatasetError};

/// The culture reference dataset: per-country profiles plus guidance that
/// applies everywhere. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct CultureFacts {
    countries: BTreeMap<String, CultureProfile>,
    #[serde(default)]
    general_tips: GeneralTips,
}

impl CultureFacts {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        dataset::load_json(path.as_ref())
    }

    pub fn country(&self, name: &str) -> Option<&CultureProfile> {
        self.countries.get(name)
    }

    pub fn country_names(&self) -> Vec<&str> {
        self.countries.keys().map(String::as_str).collect()
    }

    pub fn general_tips(&self) -> &GeneralTips {
        &self.general_tips
    }
}

/// Cultural guidance for one country. Every field is optional in the
/// dataset; absent fields deserialize to their empty forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureProfile {
    #[serde(default)]
    pub workplace_culture: BTreeMap<String, String>,
    #[serde(default)]
    pub communication_style: BTreeMap<String, String>,
    #[serde(default)]
    pub business_etiquette: BTreeMap<String, String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Guidance that is not tied to a destination country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralTips {
    #[serde(default)]
    pub email_etiquette: BTreeMap<String, String>,
    #[serde(default)]
    pub virtual_meeting_tips: Vec<String>,
    #[serde(default)]
    pub cultural_adaptation: Vec<String>,
}
