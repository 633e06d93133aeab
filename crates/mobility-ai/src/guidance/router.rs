use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use axum::extract::{Path as UrlPath, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::culture::{CommunicationComparison, CultureGuide, GeneralTips};
use super::dataset::DatasetError;
use super::documents::{
    analyze_offer_letter, analyze_resume, check_passport_validity, DocumentReadinessChecker,
    DocumentRequirementSet, PassportCheck, ReadinessReport, TextAnalysis,
};
use super::visa::{ApplicantProfile, CountryInfo, RecommendationRecord, VisaRecommendationEngine};

const NO_RECOMMENDATIONS_MESSAGE: &str =
    "No matching visa category for this destination and purpose.";

/// The three engines bundled for the HTTP layer. Constructed once at
/// startup; every handler shares the same instance by reference.
#[derive(Debug)]
pub struct GuidanceServices {
    pub visa: VisaRecommendationEngine,
    pub documents: DocumentReadinessChecker,
    pub culture: CultureGuide,
}

impl GuidanceServices {
    /// Loads both file-backed datasets from the data directory. Any
    /// failure here is fatal to startup.
    pub fn from_data_dir<P: AsRef<Path>>(dir: P) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        Ok(Self {
            visa: VisaRecommendationEngine::from_path(dir.join("visa_rules.json"))?,
            documents: DocumentReadinessChecker::new(),
            culture: CultureGuide::from_path(dir.join("culture_data.json"))?,
        })
    }
}

/// Router exposing the guidance engines. Every endpoint degrades
/// gracefully: unknown keys answer 200 with explicit empty payloads.
pub fn guidance_router(services: Arc<GuidanceServices>) -> Router {
    Router::new()
        .route("/api/v1/visa/recommendations", post(recommendations_handler))
        .route("/api/v1/visa/countries", get(visa_countries_handler))
        .route("/api/v1/visa/countries/:country", get(country_info_handler))
        .route(
            "/api/v1/documents/:visa_type/requirements",
            get(requirements_handler),
        )
        .route("/api/v1/documents/readiness", post(readiness_handler))
        .route("/api/v1/documents/resume", post(resume_handler))
        .route("/api/v1/documents/offer-letter", post(offer_letter_handler))
        .route("/api/v1/documents/passport", post(passport_handler))
        .route("/api/v1/culture/countries", get(culture_countries_handler))
        .route("/api/v1/culture/general-tips", get(general_tips_handler))
        .route(
            "/api/v1/culture/compare/:first/:second",
            get(compare_handler),
        )
        .route("/api/v1/culture/:country", get(culture_briefing_handler))
        .with_state(services)
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub destination: String,
    pub recommendations: Vec<RecommendationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_info: Option<CountryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub(crate) async fn recommendations_handler(
    State(services): State<Arc<GuidanceServices>>,
    Json(profile): Json<ApplicantProfile>,
) -> Json<RecommendationResponse> {
    let recommendations = services.visa.recommend(&profile);
    let country_info = services.visa.country_info(&profile.destination).cloned();
    let message = recommendations
        .is_empty()
        .then_some(NO_RECOMMENDATIONS_MESSAGE);

    Json(RecommendationResponse {
        destination: profile.destination,
        recommendations,
        country_info,
        message,
    })
}

pub(crate) async fn visa_countries_handler(
    State(services): State<Arc<GuidanceServices>>,
) -> Json<Vec<String>> {
    Json(services.visa.countries().iter().map(|c| c.to_string()).collect())
}

#[derive(Debug, Serialize)]
pub struct CountryInfoResponse {
    pub country: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<CountryInfo>,
    pub visa_types: Vec<String>,
}

pub(crate) async fn country_info_handler(
    State(services): State<Arc<GuidanceServices>>,
    UrlPath(country): UrlPath<String>,
) -> Json<CountryInfoResponse> {
    let info = services.visa.country_info(&country).cloned();
    let visa_types = services
        .visa
        .visa_types_for_country(&country)
        .iter()
        .map(|name| name.to_string())
        .collect();

    Json(CountryInfoResponse {
        available: info.is_some(),
        country,
        info,
        visa_types,
    })
}

pub(crate) async fn requirements_handler(
    State(services): State<Arc<GuidanceServices>>,
    UrlPath(visa_type): UrlPath<String>,
) -> Json<DocumentRequirementSet> {
    Json(services.documents.required_documents(&visa_type))
}

#[derive(Debug, Deserialize)]
pub struct ReadinessRequest {
    pub visa_type: String,
    #[serde(default)]
    pub checked: BTreeMap<String, bool>,
}

pub(crate) async fn readiness_handler(
    State(services): State<Arc<GuidanceServices>>,
    Json(request): Json<ReadinessRequest>,
) -> Json<ReadinessReport> {
    Json(services.documents.readiness(&request.visa_type, &request.checked))
}

#[derive(Debug, Deserialize)]
pub struct TextAnalysisRequest {
    pub text: String,
}

pub(crate) async fn resume_handler(
    Json(request): Json<TextAnalysisRequest>,
) -> Json<TextAnalysis> {
    Json(analyze_resume(&request.text))
}

pub(crate) async fn offer_letter_handler(
    Json(request): Json<TextAnalysisRequest>,
) -> Json<TextAnalysis> {
    Json(analyze_offer_letter(&request.text))
}

#[derive(Debug, Deserialize)]
pub struct PassportRequest {
    pub expires_on: NaiveDate,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

pub(crate) async fn passport_handler(Json(request): Json<PassportRequest>) -> Json<PassportCheck> {
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    Json(check_passport_validity(request.expires_on, today))
}

pub(crate) async fn culture_countries_handler(
    State(services): State<Arc<GuidanceServices>>,
) -> Json<Vec<String>> {
    Json(
        services
            .culture
            .available_countries()
            .iter()
            .map(|c| c.to_string())
            .collect(),
    )
}

#[derive(Debug, Serialize)]
pub struct CultureBriefingResponse {
    pub country: String,
    pub available: bool,
    pub workplace_culture: BTreeMap<String, String>,
    pub communication_style: BTreeMap<String, String>,
    pub business_etiquette: BTreeMap<String, String>,
    pub tips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    pub holidays: Vec<String>,
}

pub(crate) async fn culture_briefing_handler(
    State(services): State<Arc<GuidanceServices>>,
    UrlPath(country): UrlPath<String>,
) -> Json<CultureBriefingResponse> {
    let profile = services.culture.country_profile(&country).cloned();
    let available = profile.is_some();
    let profile = profile.unwrap_or_default();

    Json(CultureBriefingResponse {
        country,
        available,
        workplace_culture: profile.workplace_culture,
        communication_style: profile.communication_style,
        business_etiquette: profile.business_etiquette,
        tips: profile.tips,
        time_zone: profile.time_zone,
        working_hours: profile.working_hours,
        holidays: profile.holidays,
    })
}

pub(crate) async fn compare_handler(
    State(services): State<Arc<GuidanceServices>>,
    UrlPath((first, second)): UrlPath<(String, String)>,
) -> Json<CommunicationComparison> {
    Json(services.culture.compare_communication_styles(&first, &second))
}

pub(crate) async fn general_tips_handler(
    State(services): State<Arc<GuidanceServices>>,
) -> Json<GeneralTips> {
    Json(services.culture.general_tips().clone())
}
