use serde::Serialize;

/// Inputs shorter than this are rejected outright rather than scored.
pub const MIN_RESUME_LENGTH: usize = 100;
pub const MIN_OFFER_LENGTH: usize = 100;

const ANALYSIS_BASE_SCORE: u8 = 50;
const MAX_SCORE: u8 = 100;

/// Keyword-marker scan of a free-text document. Always returns a
/// structured score; never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextAnalysis {
    pub score: u8,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl TextAnalysis {
    fn too_short(issue: &str, suggestion: &str) -> Self {
        Self {
            score: 0,
            issues: vec![issue.to_string()],
            suggestions: vec![suggestion.to_string()],
        }
    }

    fn finish(score: u8, issues: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            score: score.min(MAX_SCORE),
            issues: if issues.is_empty() {
                vec!["No major issues found".to_string()]
            } else {
                issues
            },
            suggestions,
        }
    }
}

/// Checks a resume for the sections a visa officer expects to see.
pub fn analyze_resume(text: &str) -> TextAnalysis {
    if text.trim().len() < MIN_RESUME_LENGTH {
        return TextAnalysis::too_short(
            "Resume is too short or empty",
            "Include your work experience, education, and skills",
        );
    }

    let mut score = ANALYSIS_BASE_SCORE;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let lower = text.to_lowercase();

    if lower.contains("experience") || lower.contains("work history") {
        score += 15;
    } else {
        issues.push("Work experience section not found".to_string());
        suggestions.push("Add a clear work experience section".to_string());
    }

    if lower.contains("education") || lower.contains("university") || lower.contains("degree") {
        score += 15;
    } else {
        issues.push("Education section not found".to_string());
        suggestions.push("Add your educational qualifications".to_string());
    }

    if lower.contains("skill") {
        score += 10;
    } else {
        suggestions.push("Consider adding a skills section".to_string());
    }

    if text.contains('@') {
        score += 5;
    } else {
        issues.push("Contact email not found".to_string());
        suggestions.push("Add your contact email".to_string());
    }

    if text.chars().any(|ch| ch.is_ascii_digit()) {
        score += 5;
    }

    if suggestions.is_empty() {
        suggestions.push("Resume looks good!".to_string());
    }

    TextAnalysis::finish(score, issues, suggestions)
}

/// Checks a job offer letter for the fields sponsorship reviews ask for.
pub fn analyze_offer_letter(text: &str) -> TextAnalysis {
    if text.trim().len() < MIN_OFFER_LENGTH {
        return TextAnalysis::too_short(
            "Offer letter is too short or empty",
            "Ensure you have the complete offer letter",
        );
    }

    let mut score = ANALYSIS_BASE_SCORE;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let lower = text.to_lowercase();

    if lower.contains("salary") || lower.contains("compensation") || text.contains('$') {
        score += 15;
    } else {
        issues.push("Salary information not clearly mentioned".to_string());
        suggestions.push("Ensure salary/compensation is clearly stated".to_string());
    }

    if lower.contains("position") || lower.contains("title") || lower.contains("role") {
        score += 15;
    } else {
        issues.push("Job title/position not clearly mentioned".to_string());
        suggestions.push("Ensure job title is clearly stated".to_string());
    }

    if lower.contains("start") || lower.contains("date") {
        score += 10;
    } else {
        suggestions.push("Start date should be clearly mentioned".to_string());
    }

    if lower.contains("company") || lower.contains("organization") {
        score += 5;
    }

    if lower.contains("sign") || lower.contains("signature") {
        score += 5;
    } else {
        suggestions.push("Ensure the letter is signed by authorized personnel".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Offer letter looks good!".to_string());
    }

    TextAnalysis::finish(score, issues, suggestions)
}
