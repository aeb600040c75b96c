use csf_site::announcements::AnnouncementFeed;
use csf_site::catalog::CourseCatalog;
use csf_site::config::SiteConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Shared request state, handed to handlers through an `Extension` layer.
#[derive(Clone)]
pub struct AppState {
    pub(crate) catalog: Arc<CourseCatalog>,
    pub(crate) announcements: AnnouncementFeed,
    pub(crate) site: Arc<SiteConfig>,
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        catalog: CourseCatalog,
        announcements: AnnouncementFeed,
        site: SiteConfig,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            announcements,
            site: Arc::new(site),
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
        }
    }

    pub fn readiness(&self) -> Arc<AtomicBool> {
        self.readiness.clone()
    }
}
