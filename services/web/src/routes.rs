use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Json, Router};
use chrono::Utc;
use csf_site::announcements::LatestAnnouncements;
use csf_site::contact::{ContactSubmission, ContactView};
use csf_site::error::AppError;
use csf_site::site::{MenuQuery, MobileMenu, Sitemap};
use csf_site::views::{Page, PageContext, NOT_FOUND_PATH, STYLESHEET, STYLESHEET_PATH};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::debug;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/courses", get(site_page))
        .route("/courses/:slug", get(course_detail))
        .route("/admissions", get(site_page))
        .route("/international", get(site_page))
        .route("/students", get(site_page))
        .route("/about", get(site_page))
        .route("/agents", get(site_page))
        .route("/contact", get(site_page).post(contact_submit))
        .route("/sitemap.xml", get(sitemap_endpoint))
        .route(STYLESHEET_PATH, get(stylesheet))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(not_found)
        .layer(Extension(state))
}

/// A malformed or repeated `menu` parameter leaves the menu closed rather
/// than rejecting the page.
fn menu_state(query: Option<Query<MenuQuery>>) -> MobileMenu {
    query
        .map(|Query(query)| MobileMenu::from_query(&query))
        .unwrap_or_default()
}

fn render_page(
    state: &AppState,
    path: &str,
    menu: MobileMenu,
    page: Page<'_>,
) -> Result<Html<String>, AppError> {
    let ctx = PageContext::new(&state.catalog, path).with_menu(menu);
    page.render(&ctx).map(Html)
}

fn not_found_page(state: &AppState, menu: MobileMenu) -> Response {
    match render_page(state, NOT_FOUND_PATH, menu, Page::NotFound) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn home_page(
    Extension(state): Extension<AppState>,
    query: Option<Query<MenuQuery>>,
) -> Result<Html<String>, AppError> {
    let announcements = state.announcements.latest().await;
    render_page(&state, "/", menu_state(query), Page::Home(&announcements))
}

pub(crate) async fn site_page(
    Extension(state): Extension<AppState>,
    uri: Uri,
    query: Option<Query<MenuQuery>>,
) -> Result<Html<String>, AppError> {
    let disabled = LatestAnnouncements::Disabled;
    let path = uri.path();
    render_page(&state, path, menu_state(query), Page::for_path(path, &disabled))
}

pub(crate) async fn course_detail(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
    query: Option<Query<MenuQuery>>,
) -> Response {
    let menu = menu_state(query);
    let Some(detail) = state.catalog.detail(&slug) else {
        debug!(%slug, "unknown course slug");
        return not_found_page(&state, menu);
    };

    let path = detail.course.href();
    match render_page(&state, &path, menu, Page::CourseDetail(slug.as_str())) {
        Ok(html) => html.into_response(),
        Err(err) if err.is_not_found() => not_found_page(&state, menu),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn contact_submit(
    Extension(state): Extension<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> Result<Html<String>, AppError> {
    let view = ContactView::default().submit(submission);
    render_page(&state, "/contact", MobileMenu::Closed, Page::Contact(view))
}

pub(crate) async fn not_found(
    Extension(state): Extension<AppState>,
    uri: Uri,
    query: Option<Query<MenuQuery>>,
) -> Response {
    debug!(path = %uri.path(), "no route matched");
    not_found_page(&state, menu_state(query))
}

pub(crate) async fn sitemap_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let sitemap = Sitemap::build(state.site.base_url(), &state.catalog, Utc::now());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap.to_xml(),
    )
}

pub(crate) async fn stylesheet() -> impl IntoResponse {
    let content_type = mime_guess::from_path(STYLESHEET_PATH)
        .first_or_text_plain()
        .to_string();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        STYLESHEET,
    )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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
    use csf_site::announcements::AnnouncementFeed;
    use csf_site::catalog::CourseCatalog;
    use csf_site::config::SiteConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;

    fn state() -> AppState {
        AppState::new(
            CourseCatalog::standard(),
            AnnouncementFeed::disabled(),
            SiteConfig::default(),
            PrometheusBuilder::new().build_recorder().handle(),
        )
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_flagged() {
        let state = state();
        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness().store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn stylesheet_is_served_as_css() {
        let response = stylesheet().await.into_response();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/css"), "{content_type}");
    }

    #[tokio::test]
    async fn unknown_course_slug_is_not_found() {
        let response = course_detail(
            Extension(state()),
            Path("underwater-basket-weaving".to_string()),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn known_course_slug_renders() {
        let response = course_detail(
            Extension(state()),
            Path("diploma-of-sport".to_string()),
            Some(Query(MenuQuery::default())),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
