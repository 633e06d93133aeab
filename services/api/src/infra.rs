use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use mobility_ai::error::AppError;
use mobility_ai::guidance::GuidanceServices;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads both reference datasets. Called once at startup; any failure
/// here must abort the process rather than leave a half-ready service.
pub(crate) fn load_guidance_services(data_dir: &Path) -> Result<Arc<GuidanceServices>, AppError> {
    let services = GuidanceServices::from_data_dir(data_dir)?;

    info!(
        visa_countries = services.visa.countries().len(),
        culture_countries = services.culture.available_countries().len(),
        data_dir = %data_dir.display(),
        "reference datasets loaded"
    );

    Ok(Arc::new(services))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_and_trims() {
        let date = parse_date(" 2026-08-08 ").expect("valid date parses");
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 8).expect("valid"));
        assert!(parse_date("08/08/2026").is_err());
    }

    #[test]
    fn loading_from_a_missing_directory_is_fatal() {
        let error = load_guidance_services(Path::new("./definitely-missing"))
            .expect_err("missing datasets must fail");
        match error {
            AppError::Dataset(_) => {}
            other => panic!("expected dataset error, got {other:?}"),
        }
    }
}
