use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use spamcheck_rs::api::ApiServer;
use spamcheck_rs::classifier::{ClassifierEngine, HeuristicScorer, ScoringWeights};
use spamcheck_rs::store::ClassificationStore;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to build a router over an in-memory store with seeded keywords
async fn test_router() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect");

    let store = Arc::new(ClassificationStore::new(pool));
    store.init_db().await.expect("init_db should succeed");
    store.seed_keywords().await.expect("seeding should succeed");

    let keywords = store.list_keywords().await.expect("keywords should load");
    let scorer = HeuristicScorer::new(ScoringWeights::default(), &keywords);
    let engine = Arc::new(ClassifierEngine::new(scorer));

    ApiServer::new(engine, store, "127.0.0.1:0".to_string()).router()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn test_health() {
    let router = test_router().await;

    let response = router.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_classify_blank_content_is_bad_request() {
    let router = test_router().await;

    let response = router
        .oneshot(post_json("/api/classify", r#"{"content": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("email content"));
}

#[tokio::test]
async fn test_classify_round_trip_with_history() {
    let router = test_router().await;

    let request = post_json(
        "/api/classify",
        r#"{"content": "URGENT winner! Claim your free prize at http://scam.example"}"#,
    );
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["label"], "SPAM");
    assert_eq!(body["data"]["model_used"], "rule-based");
    let confidence = body["data"]["confidence"].as_f64().unwrap();
    assert!(confidence > 0.9);
    assert!(!body["data"]["explanation"].as_array().unwrap().is_empty());

    // The classification was persisted and shows up in history and stats
    let response = router.clone().oneshot(get("/api/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["label"], "SPAM");

    let response = router.oneshot(get("/api/stats")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"]["messages_scanned"], 1);
    assert_eq!(body["data"]["spam_detected"], 1);
}

#[tokio::test]
async fn test_keyword_endpoints() {
    let router = test_router().await;

    let response = router.clone().oneshot(get("/api/keywords")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let seeded = body["data"].as_array().unwrap().len();
    assert!(seeded > 0);

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/keywords",
            r#"{"keyword": "crypto giveaway", "weight": 2.0, "category": "money"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["keyword"], "crypto giveaway");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/keywords/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get("/api/keywords")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), seeded);
}
