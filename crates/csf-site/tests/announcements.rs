use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use csf_site::announcements::{AnnouncementFeed, AnnouncementStoreConfig, LatestAnnouncements};
use csf_site::catalog::CourseCatalog;
use csf_site::views::{Page, PageContext};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const API_KEY: &str = "anon-test-key";

#[derive(Clone)]
enum Reply {
    Rows(Value),
    Status(StatusCode, Value),
    Raw(&'static str),
}

#[derive(Clone)]
struct StubStore {
    reply: Reply,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<HashMap<String, String>>>>,
    last_headers: Arc<Mutex<Option<HeaderMap>>>,
}

async fn announcements(
    State(store): State<StubStore>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    store.hits.fetch_add(1, Ordering::SeqCst);
    *store.last_query.lock().expect("query lock") = Some(query);
    *store.last_headers.lock().expect("header lock") = Some(headers);

    match store.reply {
        Reply::Rows(rows) => (StatusCode::OK, axum::Json(rows)).into_response(),
        Reply::Status(status, body) => (status, axum::Json(body)).into_response(),
        Reply::Raw(body) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
    }
}

async fn spawn_store(reply: Reply) -> (SocketAddr, StubStore) {
    let store = StubStore {
        reply,
        hits: Arc::new(AtomicUsize::new(0)),
        last_query: Arc::new(Mutex::new(None)),
        last_headers: Arc::new(Mutex::new(None)),
    };
    let app = Router::new()
        .route("/rest/v1/announcements", get(announcements))
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub store");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub store runs");
    });

    (addr, store)
}

fn feed_for(addr: SocketAddr) -> AnnouncementFeed {
    AnnouncementFeed::from_config(&AnnouncementStoreConfig {
        url: Some(format!("http://{addr}/")),
        api_key: Some(API_KEY.to_string()),
    })
}

fn row(id: i64, title: &str, published_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": format!("{title} body"),
        "published_at": published_at,
    })
}

fn render_home(announcements: &LatestAnnouncements) -> String {
    let catalog = CourseCatalog::standard();
    let ctx = PageContext::new(&catalog, "/");
    Page::Home(announcements)
        .render(&ctx)
        .expect("home page renders")
}

#[tokio::test]
async fn disabled_feed_never_contacts_the_store() {
    let (_addr, store) = spawn_store(Reply::Rows(json!([]))).await;

    for config in [
        AnnouncementStoreConfig::default(),
        AnnouncementStoreConfig {
            url: Some("   ".to_string()),
            api_key: Some(API_KEY.to_string()),
        },
        AnnouncementStoreConfig {
            url: Some("http://127.0.0.1:9".to_string()),
            api_key: None,
        },
    ] {
        let feed = AnnouncementFeed::from_config(&config);
        assert!(!feed.is_enabled());
        assert_eq!(feed.latest().await, LatestAnnouncements::Disabled);
    }

    assert_eq!(store.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn returns_the_three_newest_when_the_store_has_more() {
    let (addr, store) = spawn_store(Reply::Rows(json!([
        row(1, "Oldest", "2024-01-10T09:00:00Z"),
        row(2, "Newest", "2024-06-01T09:00:00+00:00"),
        row(3, "Middle", "2024-03-15 09:00:00"),
        row(4, "Second", "2024-05-20T09:00:00Z"),
        row(5, "Third", "2024-04-02T09:00:00Z"),
    ])))
    .await;

    let latest = feed_for(addr).latest().await;
    let titles: Vec<_> = latest.items().iter().map(|item| item.title.as_str()).collect();

    assert_eq!(titles, ["Newest", "Second", "Third"]);
    assert_eq!(store.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn returns_everything_when_the_store_has_fewer_than_three() {
    let (addr, _store) = spawn_store(Reply::Rows(json!([
        row(7, "Earlier", "2024-02-01T00:00:00Z"),
        row(8, "Later", "2024-02-02T00:00:00Z"),
    ])))
    .await;

    let latest = feed_for(addr).latest().await;
    let titles: Vec<_> = latest.items().iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, ["Later", "Earlier"]);
    assert_eq!(latest.items()[0].id, "8");
    assert_eq!(latest.items()[0].display_date(), "02/02/2024");
}

#[tokio::test]
async fn empty_store_yields_no_strip() {
    let (addr, _store) = spawn_store(Reply::Rows(json!([]))).await;

    let latest = feed_for(addr).latest().await;
    assert_eq!(latest, LatestAnnouncements::Fetched(Vec::new()));
    assert!(!render_home(&latest).contains("Latest Announcements"));
}

#[tokio::test]
async fn request_carries_key_ordering_and_limit() {
    let (addr, store) = spawn_store(Reply::Rows(json!([]))).await;
    feed_for(addr).latest().await;

    let query = store
        .last_query
        .lock()
        .expect("query lock")
        .clone()
        .expect("query recorded");
    assert_eq!(query.get("order").map(String::as_str), Some("published_at.desc"));
    assert_eq!(query.get("limit").map(String::as_str), Some("3"));
    assert_eq!(
        query.get("select").map(String::as_str),
        Some("id,title,content,published_at")
    );

    let headers = store
        .last_headers
        .lock()
        .expect("header lock")
        .clone()
        .expect("headers recorded");
    assert_eq!(
        headers.get("apikey").and_then(|value| value.to_str().ok()),
        Some(API_KEY)
    );
    assert_eq!(
        headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok()),
        Some("Bearer anon-test-key")
    );
}

#[tokio::test]
async fn store_error_status_is_unavailable_and_page_still_renders() {
    let (addr, store) = spawn_store(Reply::Status(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": "relation does not exist" }),
    ))
    .await;

    let latest = feed_for(addr).latest().await;
    assert_eq!(latest, LatestAnnouncements::Unavailable);
    assert_eq!(store.hits.load(Ordering::SeqCst), 1);

    let html = render_home(&latest);
    assert!(!html.contains("Latest Announcements"));
    assert!(html.contains("Our Courses"));
}

#[tokio::test]
async fn malformed_payload_is_unavailable() {
    let (addr, _store) = spawn_store(Reply::Raw(r#"{"not": "a list""#)).await;
    assert_eq!(feed_for(addr).latest().await, LatestAnnouncements::Unavailable);
}

#[tokio::test]
async fn unrecognised_timestamp_is_unavailable() {
    let (addr, _store) = spawn_store(Reply::Rows(json!([row(1, "Bad date", "last tuesday")]))).await;
    assert_eq!(feed_for(addr).latest().await, LatestAnnouncements::Unavailable);
}

#[tokio::test]
async fn unreachable_store_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);

    assert_eq!(feed_for(addr).latest().await, LatestAnnouncements::Unavailable);
}

#[tokio::test]
async fn fetched_announcements_appear_on_the_home_page() {
    let (addr, _store) = spawn_store(Reply::Rows(json!([row(
        1,
        "Open Day <Saturday>",
        "2025-03-05T10:00:00Z"
    )])))
    .await;

    let html = render_home(&feed_for(addr).latest().await);
    assert!(html.contains("Latest Announcements"));
    assert!(html.contains("Open Day &lt;Saturday&gt;"));
    assert!(html.contains("05/03/2025"));
}
