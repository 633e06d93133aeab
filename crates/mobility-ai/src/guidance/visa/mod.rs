mod domain;
mod rulebook;
mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, EducationLevel, RecommendationRecord, SuccessRate, TravelPurpose,
    VisaCategory,
};
pub use rulebook::{CountryInfo, EligibilityCriteria, VisaCategoryRule, VisaRulebook};
pub use scoring::{
    ExperienceBracket, BASE_SCORE, BUSINESS_SCORE, EDUCATION_WEIGHT, EXPERIENCE_WEIGHT,
    HIGH_THRESHOLD, INTRA_COMPANY_TRANSFER_SCORE, MODERATE_THRESHOLD, TOURIST_SCORE,
    VERY_HIGH_THRESHOLD,
};

use std::path::Path;

use crate::guidance::dataset::DatasetError;

/// Stateless recommender over the visa rulebook.
#[derive(Debug)]
pub struct VisaRecommendationEngine {
    rulebook: VisaRulebook,
}

impl VisaRecommendationEngine {
    pub fn new(rulebook: VisaRulebook) -> Self {
        Self { rulebook }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        Ok(Self::new(VisaRulebook::from_path(path)?))
    }

    /// Ranked visa options for a profile, in fixed candidate order. An
    /// empty result means no category covers this destination and purpose.
    pub fn recommend(&self, profile: &ApplicantProfile) -> Vec<RecommendationRecord> {
        let mut records = Vec::new();

        for category in profile.purpose.candidate_categories() {
            let Some(rule) = self.rulebook.rule(*category) else {
                continue;
            };
            if !rule.countries.contains(&profile.destination) {
                continue;
            }

            let eligibility_score = match category.fixed_score() {
                Some(fixed) => fixed,
                None => scoring::eligibility_score(
                    self.rulebook.criteria(),
                    profile.education,
                    profile.work_experience_years,
                ),
            };

            records.push(RecommendationRecord {
                category: *category,
                name: rule.name.clone(),
                processing_time: rule.processing_time.clone(),
                validity: rule.validity.clone(),
                requirements: rule.requirements.clone(),
                eligibility_score,
                success_rate: SuccessRate::from_score(eligibility_score),
            });
        }

        records
    }

    pub fn country_info(&self, country: &str) -> Option<&CountryInfo> {
        self.rulebook.country_info(country)
    }

    pub fn countries(&self) -> Vec<&str> {
        self.rulebook.countries_with_info()
    }

    pub fn visa_types_for_country(&self, country: &str) -> Vec<&str> {
        self.rulebook.visa_types_for_country(country)
    }
}
