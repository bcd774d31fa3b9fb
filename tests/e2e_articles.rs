// tests/e2e_articles.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

fn post_article(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/article")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn x_cursor(resp: &axum::response::Response) -> String {
    resp.headers()
        .get("x-cursor")
        .expect("X-Cursor header present")
        .to_str()
        .unwrap()
        .to_string()
}

/// 作成・取得・削除・404 の一連の流れを確認する
#[tokio::test]
async fn store_get_delete_flow() {
    let (app, _) = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(post_article(
            &json!({ "title": "T", "content": "C", "author": { "id": 1 } }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = support::read_json(resp).await;
    let id = created["id"].as_i64().expect("integer id");
    assert_eq!(created["title"], "T");
    assert_eq!(created["content"], "C");
    assert_eq!(created["author"]["id"], 1);
    assert_eq!(created["author"]["name"], "Iman");

    let resp = app.clone().oneshot(get(&format!("/article/{id}"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = support::read_json(resp).await;
    assert_eq!(fetched, created);

    let resp = app
        .clone()
        .oneshot(delete(&format!("/article/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = body::to_bytes(resp.into_body(), 1024).await.unwrap();
    assert!(bytes.is_empty());

    let resp = app.oneshot(get(&format!("/article/{id}"))).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// X-Cursor ヘッダーを辿って全件を重複なく取得できることを確認する
#[tokio::test]
async fn fetch_follows_x_cursor_until_empty() {
    let (app, _) = support::make_test_router();
    for i in 0..5 {
        let resp = app
            .clone()
            .oneshot(post_article(&json!({
                "title": format!("article {i}"),
                "content": "body",
                "author": { "id": (i % 2) + 1 }
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let mut ids = Vec::new();
    let mut uri = "/article?num=2".to_string();
    loop {
        let resp = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let cursor = x_cursor(&resp);
        let page = support::read_json(resp).await;
        let items = page.as_array().expect("array body");
        assert!(items.len() <= 2);
        for item in items {
            assert!(item["author"]["name"].as_str().is_some_and(|n| !n.is_empty()));
            ids.push(item["id"].as_i64().unwrap());
        }
        if cursor.is_empty() {
            break;
        }
        uri = format!("/article?num=2&cursor={cursor}");
    }

    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn fetch_on_empty_store_returns_empty_array() {
    let (app, _) = support::make_test_router();
    let resp = app.oneshot(get("/article")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(x_cursor(&resp), "");
    let body = support::read_json(resp).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let (app, _) = support::make_test_router();

    let resp = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::read_json(resp).await, json!({ "status": "ok" }));

    let resp = app.oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = support::read_json(resp).await;
    assert!(doc["paths"].get("/article").is_some());
    assert!(doc["paths"].get("/article/{id}").is_some());
}
