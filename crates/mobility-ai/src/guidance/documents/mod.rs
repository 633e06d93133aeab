mod analysis;
mod checklist;
mod passport;

pub use analysis::{analyze_offer_letter, analyze_resume, TextAnalysis, MIN_OFFER_LENGTH, MIN_RESUME_LENGTH};
pub use passport::{check_passport_validity, PassportCheck, PassportStatus};

use std::collections::BTreeMap;

use serde::Serialize;

pub const EXCELLENT_READINESS: f64 = 90.0;
pub const GOOD_READINESS: f64 = 70.0;
pub const FAIR_READINESS: f64 = 50.0;

/// Stateless checker over the embedded document-requirement table.
#[derive(Debug, Default)]
pub struct DocumentReadinessChecker;

impl DocumentReadinessChecker {
    pub fn new() -> Self {
        Self
    }

    /// Required documents for a visa type. Unknown types return empty
    /// lists rather than an error.
    pub fn required_documents(&self, visa_type: &str) -> DocumentRequirementSet {
        match checklist::specific_documents(visa_type) {
            Some(specific) => DocumentRequirementSet {
                essential: checklist::ESSENTIAL_DOCUMENTS.to_vec(),
                specific: specific.to_vec(),
            },
            None => DocumentRequirementSet {
                essential: Vec::new(),
                specific: Vec::new(),
            },
        }
    }

    /// Completion report for the checklist. Absent flags count as not
    /// completed; an empty checklist reports zero percent by convention.
    pub fn readiness(
        &self,
        visa_type: &str,
        checked: &BTreeMap<String, bool>,
    ) -> ReadinessReport {
        let requirements = self.required_documents(visa_type);
        let all: Vec<&'static str> = requirements
            .essential
            .iter()
            .chain(requirements.specific.iter())
            .copied()
            .collect();

        let total = all.len();
        if total == 0 {
            return ReadinessReport {
                percentage: 0.0,
                completed: 0,
                total: 0,
                missing: Vec::new(),
                level: ReadinessLevel::Low,
            };
        }

        let is_checked = |doc: &str| checked.get(doc).copied().unwrap_or(false);
        let completed = all.iter().filter(|doc| is_checked(doc)).count();
        let percentage = completed as f64 / total as f64 * 100.0;
        let missing = all.iter().filter(|doc| !is_checked(doc)).copied().collect();

        ReadinessReport {
            percentage,
            completed,
            total,
            missing,
            level: ReadinessLevel::from_percentage(percentage),
        }
    }
}

/// Essential and type-specific document names, in checklist order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRequirementSet {
    pub essential: Vec<&'static str>,
    pub specific: Vec<&'static str>,
}

/// Checklist completion snapshot. The percentage is exact; rounding is a
/// presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessReport {
    pub percentage: f64,
    pub completed: usize,
    pub total: usize,
    pub missing: Vec<&'static str>,
    pub level: ReadinessLevel,
}

/// Display banding of a readiness percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl ReadinessLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCELLENT_READINESS {
            Self::Excellent
        } else if percentage >= GOOD_READINESS {
            Self::Good
        } else if percentage >= FAIR_READINESS {
            Self::Fair
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Low => "Low",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "You have all or nearly all required documents ready.",
            Self::Good => "You're almost there! Complete the remaining documents.",
            Self::Fair => "Good progress. Keep gathering the required documents.",
            Self::Low => "You need to prepare more documents before applying.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(names: &[&str]) -> BTreeMap<String, bool> {
        names.iter().map(|name| (name.to_string(), true)).collect()
    }

    #[test]
    fn tourist_checklist_has_four_essential_and_three_specific() {
        let checker = DocumentReadinessChecker::new();
        let requirements = checker.required_documents("Tourist");
        assert_eq!(requirements.essential.len(), 4);
        assert_eq!(requirements.specific.len(), 3);
        assert_eq!(requirements.essential[0], "Valid passport (minimum 6 months validity)");
    }

    #[test]
    fn empty_flags_report_everything_missing() {
        let checker = DocumentReadinessChecker::new();
        let report = checker.readiness("Tourist", &BTreeMap::new());

        assert_eq!(report.completed, 0);
        assert_eq!(report.total, 7);
        assert_eq!(report.percentage, 0.0);
        assert_eq!(report.missing.len(), 7);
        assert_eq!(report.level, ReadinessLevel::Low);
    }

    #[test]
    fn full_checklist_reports_exactly_one_hundred_percent() {
        let checker = DocumentReadinessChecker::new();
        let requirements = checker.required_documents("Tourist");
        let all: Vec<&str> = requirements
            .essential
            .iter()
            .chain(requirements.specific.iter())
            .copied()
            .collect();

        let report = checker.readiness("Tourist", &checked(&all));

        assert_eq!(report.percentage, 100.0);
        assert_eq!(report.completed, 7);
        assert!(report.missing.is_empty());
        assert_eq!(report.level, ReadinessLevel::Excellent);
    }

    #[test]
    fn unknown_visa_type_reports_zero_without_faulting() {
        let checker = DocumentReadinessChecker::new();
        let report = checker.readiness("Digital Nomad", &BTreeMap::new());

        assert_eq!(report.total, 0);
        assert_eq!(report.percentage, 0.0);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn absent_and_false_flags_both_count_as_missing() {
        let checker = DocumentReadinessChecker::new();
        let mut flags = checked(&[
            "Valid passport (minimum 6 months validity)",
            "Recent passport-sized photographs",
            "Completed visa application form",
            "Visa application fee payment receipt",
            "Travel itinerary",
        ]);
        flags.insert("Hotel bookings or invitation letter".to_string(), false);

        let report = checker.readiness("Tourist", &flags);

        assert_eq!(report.completed, 5);
        assert_eq!(
            report.missing,
            vec![
                "Hotel bookings or invitation letter",
                "Bank statements (last 3 months)",
            ]
        );
        assert_eq!(report.level, ReadinessLevel::Good);
        assert!((report.percentage - 5.0 / 7.0 * 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_preserves_checklist_order() {
        let checker = DocumentReadinessChecker::new();
        let flags = checked(&["Recent passport-sized photographs", "Travel itinerary"]);

        let report = checker.readiness("Tourist", &flags);

        assert_eq!(
            report.missing,
            vec![
                "Valid passport (minimum 6 months validity)",
                "Completed visa application form",
                "Visa application fee payment receipt",
                "Hotel bookings or invitation letter",
                "Bank statements (last 3 months)",
            ]
        );
    }

    #[test]
    fn level_banding_uses_inclusive_thresholds() {
        assert_eq!(ReadinessLevel::from_percentage(100.0), ReadinessLevel::Excellent);
        assert_eq!(ReadinessLevel::from_percentage(90.0), ReadinessLevel::Excellent);
        assert_eq!(ReadinessLevel::from_percentage(89.9), ReadinessLevel::Good);
        assert_eq!(ReadinessLevel::from_percentage(70.0), ReadinessLevel::Good);
        assert_eq!(ReadinessLevel::from_percentage(50.0), ReadinessLevel::Fair);
        assert_eq!(ReadinessLevel::from_percentage(49.9), ReadinessLevel::Low);
    }
}
