use serde::{Deserialize, Serialize};

/// Profile collected from the intake form. Constructed per request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub citizenship: String,
    pub destination: String,
    #[serde(default)]
    pub purpose: TravelPurpose,
    #[serde(default)]
    pub education: EducationLevel,
    #[serde(default)]
    pub work_experience_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

/// Why the applicant is traveling. Unknown or missing form values fall
/// through to `Other`, which routes to the visitor category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TravelPurpose {
    Work,
    Study,
    Business,
    Tourism,
    Family,
    #[default]
    Other,
}

impl TravelPurpose {
    pub fn from_label(value: &str) -> Self {
        match value.trim() {
            "Work/Employment" | "Work" | "Employment" => Self::Work,
            "Study" => Self::Study,
            "Business" => Self::Business,
            "Tourism" => Self::Tourism,
            "Family" => Self::Family,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work/Employment",
            Self::Study => "Study",
            Self::Business => "Business",
            Self::Tourism => "Tourism",
            Self::Family => "Family",
            Self::Other => "Other",
        }
    }

    /// Candidate visa categories in the order they are recommended.
    pub const fn candidate_categories(self) -> &'static [VisaCategory] {
        match self {
            Self::Work => &[VisaCategory::SkilledWorker, VisaCategory::IntraCompanyTransfer],
            Self::Study => &[VisaCategory::Student],
            Self::Business => &[VisaCategory::Business],
            Self::Tourism | Self::Family | Self::Other => &[VisaCategory::Tourist],
        }
    }
}

impl From<String> for TravelPurpose {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<TravelPurpose> for String {
    fn from(value: TravelPurpose) -> Self {
        value.label().to_string()
    }
}

/// Highest education attained, ordered by attainment. Unknown form values
/// deserialize to `Other` and earn no education points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EducationLevel {
    #[default]
    Other,
    HighSchool,
    Bachelors,
    Masters,
    Doctorate,
}

impl EducationLevel {
    pub fn from_label(value: &str) -> Self {
        match value.trim() {
            "High School" => Self::HighSchool,
            "Bachelor's Degree" => Self::Bachelors,
            "Master's Degree" => Self::Masters,
            "PhD" | "Doctorate" => Self::Doctorate,
            _ => Self::Other,
        }
    }

    /// Display label, doubling as the key into the education points table.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Bachelors => "Bachelor's Degree",
            Self::Masters => "Master's Degree",
            Self::Doctorate => "PhD",
            Self::Other => "Other",
        }
    }
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<EducationLevel> for String {
    fn from(value: EducationLevel) -> Self {
        value.label().to_string()
    }
}

/// The visa categories the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaCategory {
    SkilledWorker,
    IntraCompanyTransfer,
    Student,
    Business,
    Tourist,
}

impl VisaCategory {
    /// Key into the `visa_types` table of the rulebook.
    pub const fn dataset_key(self) -> &'static str {
        match self {
            Self::SkilledWorker => "skilled_worker",
            Self::IntraCompanyTransfer => "intra_company_transfer",
            Self::Student => "student",
            Self::Business => "business",
            Self::Tourist => "tourist",
        }
    }
}

/// Coarse bucketing of an eligibility score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessRate {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl SuccessRate {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

/// One recommended visa option, in candidate order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRecord {
    pub category: VisaCategory,
    pub name: String,
    pub processing_time: String,
    pub validity: String,
    pub requirements: Vec<String>,
    pub eligibility_score: u8,
    pub success_rate: SuccessRate,
}
