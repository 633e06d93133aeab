use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use mobility_ai::guidance::{guidance_router, GuidanceServices};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_guidance_routes(services: Arc<GuidanceServices>) -> axum::Router {
    guidance_router(services)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::path::PathBuf;
    use tower::util::ServiceExt;

    fn services() -> Arc<GuidanceServices> {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
        Arc::new(GuidanceServices::from_data_dir(data_dir).expect("bundled datasets load"))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn guidance_routes_are_mounted_alongside_health() {
        let app = with_guidance_routes(services());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/visa/countries")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let countries: Vec<String> = serde_json::from_slice(&bytes).expect("body is json");
        assert!(countries.contains(&"United Kingdom".to_string()));
    }

    #[tokio::test]
    async fn recommendations_round_trip_through_the_router() {
        let app = with_guidance_routes(services());

        let payload = json!({
            "citizenship": "India",
            "destination": "United States",
            "purpose": "Work/Employment",
            "education": "Master's Degree",
            "work_experience_years": 8
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/visa/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        let records = body["recommendations"].as_array().expect("records array");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "Skilled Worker");
        assert_eq!(records[1]["success_rate"], "Very High");
    }
}
