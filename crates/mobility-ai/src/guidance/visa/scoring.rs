use super::domain::{EducationLevel, SuccessRate, VisaCategory};
use super::rulebook::EligibilityCriteria;

/// Base every scored category starts from before weighted points apply.
pub const BASE_SCORE: f64 = 50.0;
pub const EDUCATION_WEIGHT: f64 = 0.5;
pub const EXPERIENCE_WEIGHT: f64 = 0.5;

/// Categories without a scoring formula carry these fixed scores. The
/// values are policy constants, not computed eligibility.
pub const INTRA_COMPANY_TRANSFER_SCORE: u8 = 85;
pub const BUSINESS_SCORE: u8 = 80;
pub const TOURIST_SCORE: u8 = 75;

pub const VERY_HIGH_THRESHOLD: u8 = 85;
pub const HIGH_THRESHOLD: u8 = 70;
pub const MODERATE_THRESHOLD: u8 = 55;

/// Work experience bucketed into the five ranges the points table keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBracket {
    UpToTwo,
    ThreeToFive,
    SixToTen,
    ElevenToFifteen,
    SixteenPlus,
}

impl ExperienceBracket {
    pub const fn from_years(years: u32) -> Self {
        if years <= 2 {
            Self::UpToTwo
        } else if years <= 5 {
            Self::ThreeToFive
        } else if years <= 10 {
            Self::SixToTen
        } else if years <= 15 {
            Self::ElevenToFifteen
        } else {
            Self::SixteenPlus
        }
    }

    /// Key into the experience points table.
    pub const fn key(self) -> &'static str {
        match self {
            Self::UpToTwo => "0-2",
            Self::ThreeToFive => "3-5",
            Self::SixToTen => "6-10",
            Self::ElevenToFifteen => "11-15",
            Self::SixteenPlus => "16+",
        }
    }
}

impl VisaCategory {
    /// Fixed score for categories without a scoring formula; `None` for
    /// the categories whose eligibility is computed.
    pub const fn fixed_score(self) -> Option<u8> {
        match self {
            Self::SkilledWorker | Self::Student => None,
            Self::IntraCompanyTransfer => Some(INTRA_COMPANY_TRANSFER_SCORE),
            Self::Business => Some(BUSINESS_SCORE),
            Self::Tourist => Some(TOURIST_SCORE),
        }
    }
}

impl SuccessRate {
    pub const fn from_score(score: u8) -> Self {
        if score >= VERY_HIGH_THRESHOLD {
            Self::VeryHigh
        } else if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Weighted education and experience points on top of the base score,
/// clamped to [0, 100]. Levels and brackets absent from the points table
/// contribute nothing.
pub(crate) fn eligibility_score(
    criteria: &EligibilityCriteria,
    education: EducationLevel,
    experience_years: u32,
) -> u8 {
    let education_points = criteria.points_for_education(education);
    let experience_points =
        criteria.points_for_experience(ExperienceBracket::from_years(experience_years));

    let raw = BASE_SCORE + EDUCATION_WEIGHT * education_points + EXPERIENCE_WEIGHT * experience_points;
    raw.clamp(0.0, 100.0) as u8
}
