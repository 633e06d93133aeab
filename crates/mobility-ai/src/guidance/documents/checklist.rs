//! Embedded document-requirement table. Unlike the visa and culture
//! datasets this one ships inside the binary; the lists are stable across
//! deployments and small enough to keep as literals.

/// Documents every application needs regardless of visa type.
pub(super) const ESSENTIAL_DOCUMENTS: &[&str] = &[
    "Valid passport (minimum 6 months validity)",
    "Recent passport-sized photographs",
    "Completed visa application form",
    "Visa application fee payment receipt",
];

const SKILLED_WORKER_DOCUMENTS: &[&str] = &[
    "Certificate of Sponsorship from employer",
    "Proof of financial means",
    "Educational certificates and transcripts",
    "Work experience letters",
    "English language test results (IELTS/TOEFL)",
];

const STUDENT_DOCUMENTS: &[&str] = &[
    "University acceptance letter",
    "Proof of tuition fees and living expenses",
    "Previous academic records",
    "English language proficiency test",
];

const TOURIST_DOCUMENTS: &[&str] = &[
    "Travel itinerary",
    "Hotel bookings or invitation letter",
    "Bank statements (last 3 months)",
];

const BUSINESS_DOCUMENTS: &[&str] = &[
    "Business invitation letter",
    "Company registration documents",
    "Proof of financial stability",
];

/// Type-specific list for a checklist visa type, `None` for types without
/// a checklist (Family, Other, free-text input).
pub(super) fn specific_documents(visa_type: &str) -> Option<&'static [&'static str]> {
    match visa_type.trim() {
        "Skilled Worker" => Some(SKILLED_WORKER_DOCUMENTS),
        "Student" => Some(STUDENT_DOCUMENTS),
        "Tourist" => Some(TOURIST_DOCUMENTS),
        "Business" => Some(BUSINESS_DOCUMENTS),
        _ => None,
    }
}
