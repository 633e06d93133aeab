use crate::guidance::visa::{
    ApplicantProfile, EducationLevel, TravelPurpose, VisaRecommendationEngine, VisaRulebook,
};

pub(super) fn rulebook() -> VisaRulebook {
    serde_json::from_str(
        r#"{
            "visa_types": {
                "skilled_worker": {
                    "name": "Skilled Worker",
                    "processing_time": "3-6 weeks",
                    "validity": "Up to 5 years",
                    "countries": ["United Kingdom", "Germany"],
                    "requirements": ["Job offer from licensed sponsor"]
                },
                "intra_company_transfer": {
                    "name": "Intra-company Transfer",
                    "processing_time": "2-4 weeks",
                    "validity": "Up to 5 years",
                    "countries": ["United Kingdom"],
                    "requirements": ["Current employment with multinational company"]
                },
                "student": {
                    "name": "Student",
                    "processing_time": "3-4 weeks",
                    "validity": "Duration of course + 4 months",
                    "countries": ["United Kingdom", "Germany"],
                    "requirements": ["Acceptance letter", "Proof of funds"]
                },
                "business": {
                    "name": "Business",
                    "processing_time": "1-2 weeks",
                    "validity": "6 months",
                    "countries": ["Germany"],
                    "requirements": ["Business invitation letter"]
                },
                "tourist": {
                    "name": "Tourist",
                    "processing_time": "2-3 weeks",
                    "validity": "6 months",
                    "countries": ["United Kingdom", "Germany"],
                    "requirements": ["Proof of funds", "Return ticket"]
                }
            },
            "eligibility_criteria": {
                "education_points": {
                    "High School": 10,
                    "Bachelor's Degree": 20,
                    "Master's Degree": 30,
                    "PhD": 40
                },
                "experience_points": {
                    "0-2": 10,
                    "3-5": 20,
                    "6-10": 30,
                    "11-15": 40,
                    "16+": 50
                }
            },
            "country_specific_info": {
                "United Kingdom": {
                    "processing_authority": "UK Visas and Immigration (UKVI)",
                    "common_visas": ["Skilled Worker", "Student"],
                    "special_notes": "Most routes require a sponsor licence holder."
                }
            }
        }"#,
    )
    .expect("fixture rulebook parses")
}

pub(super) fn engine() -> VisaRecommendationEngine {
    VisaRecommendationEngine::new(rulebook())
}

pub(super) fn profile(
    destination: &str,
    purpose: TravelPurpose,
    education: EducationLevel,
    experience_years: u32,
) -> ApplicantProfile {
    ApplicantProfile {
        citizenship: "India".to_string(),
        destination: destination.to_string(),
        purpose,
        education,
        work_experience_years: experience_years,
        job_title: None,
    }
}
