use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use un_client::MemoryNewsApi;
use un_core::Article;
use un_views::SiteConfig;
use un_web::{create_app, AppState};

fn article(n: usize, category: &str) -> Article {
    Article {
        id: format!("a{n}"),
        title: format!("Story {n}"),
        summary: Some(format!("Summary {n}")),
        content: "Body.".to_string(),
        category: category.to_string(),
        published_at: Some(Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap() + Duration::hours(n as i64)),
        image_url: None,
        author: None,
        source: None,
        is_ai_enhanced: false,
        has_video: n % 3 == 0,
        video_url: None,
        url: None,
        background: None,
        facts: vec![],
        tags: vec![],
    }
}

fn app_with(api: Arc<MemoryNewsApi>) -> Router {
    create_app(AppState::new(api, SiteConfig::default()))
}

fn app() -> Router {
    let mut articles: Vec<Article> = (0..15).map(|n| article(n, "palestine")).collect();
    articles.extend((15..18).map(|n| article(n, "tragedy")));
    app_with(Arc::new(MemoryNewsApi::with_articles(articles)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_category_route_pages() {
    let (status, body) = get(app(), "/api/views/category/palestine").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["feed"]["cards"].as_array().unwrap().len(), 10);
    assert_eq!(body["feed"]["total_pages"], 2);
    assert_eq!(body["category"]["title"], "Palestine");

    let (_, body) = get(app(), "/api/views/category/palestine?page=2").await;
    assert_eq!(body["feed"]["cards"].as_array().unwrap().len(), 5);
    assert_eq!(body["feed"]["current_page"], 2);
}

#[tokio::test]
async fn test_home_route() {
    let (status, body) = get(app(), "/api/views/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breaking"].as_array().unwrap().len(), 5);
    assert_eq!(body["carousel"]["slides"].as_array().unwrap().len(), 5);
    assert_eq!(body["feed"]["status"]["state"], "ready");
}

#[tokio::test]
async fn test_human_rights_route() {
    let (_, body) = get(app(), "/api/views/human-rights").await;
    assert_eq!(body["category"]["slug"], "tragedy");
    assert_eq!(body["feed"]["cards"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_article_route_statuses() {
    let (status, body) = get(app(), "/api/views/article/a3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "loaded");
    assert_eq!(body["title"], "Story 3");

    let (status, body) = get(app(), "/api/views/article/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["state"], "not_found");
}

#[tokio::test]
async fn test_search_route() {
    let api = Arc::new(MemoryNewsApi::with_articles(vec![article(1, "europe")]));
    let (status, body) = get(app_with(api.clone()), "/api/views/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "no_query");
    assert_eq!(api.request_count(), 0);

    let (_, body) = get(app_with(api), "/api/views/search?q=story%201").await;
    assert_eq!(body["kind"], "results");
    assert_eq!(body["feed"]["cards"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_backend_outage_is_bad_gateway() {
    let api = Arc::new(MemoryNewsApi::new());
    api.set_offline(true);
    let (status, body) = get(app_with(api.clone()), "/api/views/videos").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"]["state"], "failed");

    let (status, body) = get(app_with(api), "/api/views/sidebar").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["recent"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_static_routes() {
    let (_, body) = get(app(), "/api/categories").await;
    assert_eq!(body.as_array().unwrap().len(), 16);

    let (_, body) = get(app(), "/api/views/chrome").await;
    assert_eq!(body["navbar"]["links"][0]["label"], "HOME");
    assert_eq!(body["footer"]["site_name"], "Ummah News Hub");
}
