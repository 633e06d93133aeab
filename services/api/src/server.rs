use crate::cli::ServeArgs;
use crate::infra::{load_guidance_services, AppState};
use crate::routes::with_guidance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mobility_ai::config::AppConfig;
use mobility_ai::error::AppError;
use mobility_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(data_dir) = args.data_dir.take() {
        config.data.dir = data_dir;
    }

    telemetry::init(&config.telemetry)?;

    // Datasets load before the listener binds: a service that cannot
    // answer lookups must not accept traffic.
    let services = load_guidance_services(&config.data.dir)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_guidance_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "mobility guidance service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
