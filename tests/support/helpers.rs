// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryArticleRepo, InMemoryCategoryRepo, StubPublisher, TestSlug};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tribune_core::application::publishing::{PublisherRegistry, PublishingService};
use tribune_core::application::services::ApplicationServices;
use tribune_core::domain::publishing::Platform;
use tribune_core::infrastructure::publishers::LocalPublisher;
use tribune_core::presentation::http::{routes::build_router, state::HttpState};

/// ローカルのみ登録されたレジストリ
pub fn local_only_registry() -> PublisherRegistry {
    PublisherRegistry::new(Arc::new(LocalPublisher::new()))
}

/// ローカル + 全外部プラットフォームのスタブを登録したレジストリ
pub fn stub_registry() -> (PublisherRegistry, Arc<StubPublisher>) {
    let wordpress = Arc::new(StubPublisher::succeeding(Platform::WordPress));
    let registry = local_only_registry()
        .with_wordpress(wordpress.clone())
        .with_youtube(Arc::new(StubPublisher::disabled(Platform::YouTube)))
        .with_twitter(Arc::new(StubPublisher::failing(Platform::Twitter, "rate limited")));
    (registry, wordpress)
}

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticleRepo>,
}

pub fn build_services(
    articles: Arc<InMemoryArticleRepo>,
    categories: Arc<InMemoryCategoryRepo>,
    registry: PublisherRegistry,
) -> TestApp {
    let publishing = Arc::new(PublishingService::new(registry));
    let services = Arc::new(ApplicationServices::new(
        articles.clone(),
        articles.clone(),
        categories,
        publishing,
        Arc::new(FixedClock),
        Arc::new(TestSlug),
    ));
    TestApp { services, articles }
}

pub fn make_test_router_with(app: &TestApp) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&app.services),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

/// カテゴリ 1 件とスタブパブリッシャーを備えたルーター
pub fn make_test_router() -> (axum::Router, TestApp, Arc<StubPublisher>) {
    let (registry, wordpress) = stub_registry();
    let app = build_services(
        Arc::new(InMemoryArticleRepo::default()),
        Arc::new(InMemoryCategoryRepo::with(&[(1, "Économie")])),
        registry,
    );
    (make_test_router_with(&app), app, wordpress)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// ステータスと JSON ボディを取り出す
pub async fn response_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, value)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected: StatusCode, expected_error: &str) {
    let (status, body) = response_json(resp).await;
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["error"], expected_error);
    assert!(body["message"].is_string(), "missing message: {body}");
}
