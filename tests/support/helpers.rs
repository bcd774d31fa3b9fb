// tests/support/helpers.rs
use super::mocks;
use article_service::application::ports::time::Clock;
use article_service::application::services::{ApplicationServices, DEFAULT_OPERATION_TIMEOUT};
use article_service::domain::article::ArticleRepository;
use article_service::domain::author::{Author, AuthorId, AuthorRepository};
use article_service::infrastructure::repositories::{
    InMemoryArticleRepository, InMemoryAuthorRepository,
};
use article_service::presentation::http::{routes::build_router, state::HttpState};
use axum::body;
use axum::http::StatusCode;
use serde_json::Value;
use std::{sync::Arc, time::Duration};

pub fn sample_author(id: i64, name: &str) -> Author {
    Author {
        id: AuthorId::new(id).expect("positive author id"),
        name: name.to_string(),
        created_at: mocks::fixed_now(),
        updated_at: mocks::fixed_now(),
    }
}

/// 著者 1 (Iman) と 2 (Rama) を登録済みのインメモリ著者リポジトリ
pub fn seeded_authors() -> Arc<InMemoryAuthorRepository> {
    Arc::new(InMemoryAuthorRepository::with_authors([
        sample_author(1, "Iman"),
        sample_author(2, "Rama"),
    ]))
}

pub fn build_services(
    article_repo: Arc<dyn ArticleRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    timeout: Duration,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    Arc::new(ApplicationServices::new(
        article_repo,
        author_repo,
        clock,
        timeout,
    ))
}

/// In-memory services plus a handle on the article store for assertions.
pub fn in_memory_services() -> (Arc<ApplicationServices>, Arc<InMemoryArticleRepository>) {
    let articles = Arc::new(InMemoryArticleRepository::new());
    let services = build_services(
        Arc::clone(&articles) as Arc<dyn ArticleRepository>,
        seeded_authors(),
        DEFAULT_OPERATION_TIMEOUT,
    );
    (services, articles)
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(HttpState { services })
}

pub fn make_test_router() -> (axum::Router, Arc<InMemoryArticleRepository>) {
    let (services, articles) = in_memory_services();
    (router_for(services), articles)
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
