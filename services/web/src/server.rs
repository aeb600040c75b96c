use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use csf_site::announcements::AnnouncementFeed;
use csf_site::catalog::CourseCatalog;
use csf_site::config::AppConfig;
use csf_site::error::AppError;
use csf_site::telemetry;
use std::sync::atomic::Ordering;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = CourseCatalog::standard();
    let missing = catalog.missing_details();
    if !missing.is_empty() {
        warn!(?missing, "listed courses without a detail page will render not-found");
    }

    let announcements = AnnouncementFeed::from_config(&config.announcements);
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(
        catalog,
        announcements,
        config.site.clone(),
        prometheus_handle,
    );
    let readiness_flag = app_state.readiness();

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        base_url = config.site.base_url(),
        "csf site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
