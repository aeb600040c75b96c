use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use csf_site::announcements::AnnouncementFeed;
use csf_site::catalog::CourseCatalog;
use csf_site::config::SiteConfig;
use csf_site_web::{export_site, page_file, router, AppState, NOT_FOUND_FILE, SITEMAP_FILE};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::Value;
use tower::ServiceExt;

fn build_router() -> Router {
    let state = AppState::new(
        CourseCatalog::standard(),
        AnnouncementFeed::disabled(),
        SiteConfig::new("https://example.edu.au/").expect("valid base url"),
        PrometheusBuilder::new().build_recorder().handle(),
    );
    router(state)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn every_static_page_renders() {
    let router = build_router();
    for path in [
        "/",
        "/courses",
        "/admissions",
        "/international",
        "/students",
        "/about",
        "/agents",
        "/contact",
    ] {
        let (status, body) = get(&router, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.starts_with("<!DOCTYPE html>"), "{path}");
        assert!(body.contains(r#"<main id="main-content""#), "{path}");
    }
}

#[tokio::test]
async fn home_page_uses_the_default_title_and_no_announcements_when_disabled() {
    let router = build_router();
    let (status, body) = get(&router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Study Sport &amp; Fitness in Australia | CSF Australia</title>"));
    assert!(!body.contains("Latest Announcements"));
}

#[tokio::test]
async fn every_course_detail_page_renders() {
    let router = build_router();
    let catalog = CourseCatalog::standard();

    for course in catalog.courses() {
        let (status, body) = get(&router, &course.href()).await;
        assert_eq!(status, StatusCode::OK, "{}", course.slug);
        assert!(body.contains(course.code), "{}", course.slug);
    }
}

#[tokio::test]
async fn unknown_course_slug_returns_not_found_page() {
    let router = build_router();
    let (status, body) = get(&router, "/courses/underwater-basket-weaving").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn unknown_path_falls_back_to_not_found_page() {
    let router = build_router();
    let (status, body) = get(&router, "/blog/latest").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
    assert!(body.contains(r#"href="/courses""#));
}

#[tokio::test]
async fn percent_encoded_course_slug_resolves() {
    let router = build_router();
    let (status, body) = get(&router, "/courses/diploma%2Dof%2Dsport").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Diploma of Sport"));
    assert!(body.contains(r#"<a href="/courses/diploma-of-sport?menu=open" class="menu-toggle""#));
}

#[tokio::test]
async fn not_found_pages_share_one_navigation_state() {
    let router = build_router();
    let (_, unknown_slug) = get(&router, "/courses/underwater-basket-weaving").await;
    let (_, unknown_path) = get(&router, "/blog/latest").await;

    assert_eq!(unknown_slug, unknown_path);
    assert!(!unknown_path.contains("is-active"));
}

#[tokio::test]
async fn scheme_relative_path_keeps_the_menu_link_on_site() {
    let router = build_router();
    let (status, body) = get(&router, "//evil.example/phish").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("evil.example"));
    assert!(body.contains(r#"<a href="?menu=open" class="menu-toggle""#));
}

#[tokio::test]
async fn contact_post_shows_confirmation_without_echoing_values() {
    let router = build_router();
    let form = "firstName=Jordan&lastName=Citizen&email=jordan%40example.com&phone=0400111222\
                &enquiryType=international&subject=Visa+question&message=Secret+details+here";

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let body = String::from_utf8(body.to_vec()).expect("utf-8 body");

    assert!(body.contains("Message Sent!"));
    assert!(!body.contains("<form"));
    for value in ["Jordan", "Citizen", "jordan@example.com", "0400111222", "Visa question", "Secret details here"] {
        assert!(!body.contains(value), "confirmation echoed {value}");
    }
}

#[tokio::test]
async fn contact_post_accepts_an_empty_enquiry_type() {
    let router = build_router();
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("firstName=Sam&enquiryType=&message=Hi"))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn menu_query_opens_the_mobile_menu() {
    let router = build_router();

    let (_, closed) = get(&router, "/about").await;
    assert!(!closed.contains(r#"id="mobile-menu""#));
    assert!(closed.contains(r#"aria-expanded="false""#));

    let (_, open) = get(&router, "/about?menu=open").await;
    assert!(open.contains(r#"id="mobile-menu""#));
    assert!(open.contains(r#"aria-expanded="true""#));
}

#[tokio::test]
async fn repeated_menu_parameter_still_renders_the_page() {
    let router = build_router();
    let (status, body) = get(&router, "/about?menu=open&menu=closed").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<main id="main-content""#));
    assert!(!body.contains(r#"id="mobile-menu""#));
}

#[tokio::test]
async fn sitemap_lists_each_route_once() {
    let router = build_router();
    let (status, body) = get(&router, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<loc>https://example.edu.au</loc>"));
    assert_eq!(body.matches("<url>").count(), 8 + CourseCatalog::standard().courses().len());
    assert_eq!(body.matches("<loc>https://example.edu.au/courses/diploma-of-sport</loc>").count(), 1);
}

#[tokio::test]
async fn stylesheet_and_health_endpoints_respond() {
    let router = build_router();

    let (status, css) = get(&router, "/assets/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(css.contains("--navy: #003366"));

    let (status, health) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_str(&health).expect("json");
    assert_eq!(payload.get("status").and_then(Value::as_str), Some("ok"));

    let (status, _) = get(&router, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn export_writes_every_page_and_the_sitemap() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = CourseCatalog::standard();

    let summary = export_site(
        dir.path(),
        &catalog,
        &csf_site::announcements::LatestAnnouncements::Disabled,
        &SiteConfig::default(),
    )
    .await
    .expect("export succeeds");

    assert_eq!(summary.pages, 8 + catalog.courses().len() + 1);
    assert!(page_file(dir.path(), "/").is_file());
    assert!(page_file(dir.path(), "/courses/certificate-iii-fitness").is_file());
    assert!(dir.path().join(NOT_FOUND_FILE).is_file());
    assert!(dir.path().join("assets/site.css").is_file());

    let sitemap = std::fs::read_to_string(dir.path().join(SITEMAP_FILE)).expect("sitemap");
    assert!(sitemap.contains("<loc>https://csf.edu.au/admissions</loc>"));
}
