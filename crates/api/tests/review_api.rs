//! Integration tests for review submission and the dealer pass-through.
//!
//! None of these routes touch the database, so they run over an
//! unconnected pool with a stub dealer service.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app_with, get, post_json, post_raw, unconnected_pool, user_token,
    StubDealerService,
};
use serde_json::json;

fn review() -> serde_json::Value {
    json!({
        "name": "Ada",
        "dealership": 15,
        "review": "great service",
        "purchase": true,
        "purchase_date": "2023-04-01",
        "car_make": "Kia",
        "car_model": "Sorrento",
        "car_year": 2023
    })
}

// ---------------------------------------------------------------------------
// POST /reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anonymous_review_is_forbidden_and_never_forwarded() {
    let stub = Arc::new(StubDealerService::default());
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = post_json(app, "/api/v1/reviews", None, review()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn invalid_token_is_treated_as_anonymous() {
    let stub = Arc::new(StubDealerService::default());
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = post_json(app, "/api/v1/reviews", Some("not-a-jwt"), review()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn anonymous_review_is_forbidden_even_with_a_malformed_body() {
    let stub = Arc::new(StubDealerService::default());

    for (content_type, body) in [("application/json", "{not json"), ("text/plain", "hello")] {
        let app = build_test_app_with(unconnected_pool(), stub.clone());
        let response = post_raw(app, "/api/v1/reviews", None, content_type, body).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn malformed_review_body_from_member_is_rejected() {
    let stub = Arc::new(StubDealerService::default());
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = post_raw(
        app,
        "/api/v1/reviews",
        Some(&user_token()),
        "application/json",
        "{not json",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn authenticated_review_is_forwarded_once() {
    let stub = Arc::new(StubDealerService::default());
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = post_json(app, "/api/v1/reviews", Some(&user_token()), review()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"], review());
    assert_eq!(stub.call_count(), 1);
    assert_eq!(*stub.posted.lock().unwrap(), vec![review()]);
}

#[tokio::test]
async fn backend_failure_returns_502_after_one_attempt() {
    let stub = Arc::new(StubDealerService::failing("review store unreachable"));
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = post_json(app, "/api/v1/reviews", Some(&user_token()), review()).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "EXTERNAL_SERVICE_ERROR");
    assert_eq!(json["error"], "review store unreachable");
    assert_eq!(stub.call_count(), 1);
}

// ---------------------------------------------------------------------------
// Dealers and sentiment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dealers_pass_through_state_filter() {
    let stub = Arc::new(StubDealerService::default());
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = get(app, "/api/v1/dealers?state=Texas").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"][0]["state"], "Texas");
    assert_eq!(*stub.calls.lock().unwrap(), vec![r#"dealers Some("Texas")"#]);
}

#[tokio::test]
async fn blank_state_lists_all_dealers() {
    let stub = Arc::new(StubDealerService::default());
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = get(app, "/api/v1/dealers?state=").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(*stub.calls.lock().unwrap(), vec!["dealers None"]);
}

#[tokio::test]
async fn dealer_detail_passes_through() {
    let app = build_test_app_with(unconnected_pool(), Arc::new(StubDealerService::default()));

    let response = get(app, "/api/v1/dealers/15").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], 15);
}

#[tokio::test]
async fn dealer_reviews_carry_sentiment() {
    let stub = Arc::new(StubDealerService {
        reviews: vec![
            json!({ "id": 1, "review": "great car" }),
            json!({ "id": 2, "review": "ok" }),
        ],
        ..Default::default()
    });
    let app = build_test_app_with(unconnected_pool(), stub);

    let response = get(app, "/api/v1/dealers/15/reviews").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["sentiment"], "positive");
    assert_eq!(json["data"][1]["sentiment"], "neutral");
}

#[tokio::test]
async fn dealer_outage_returns_502() {
    let app = build_test_app_with(
        unconnected_pool(),
        Arc::new(StubDealerService::failing("dealer backend down")),
    );

    let response = get(app, "/api/v1/dealers/15/reviews").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn sentiment_endpoint_returns_label() {
    let app = build_test_app_with(unconnected_pool(), Arc::new(StubDealerService::default()));

    let response = get(app, "/api/v1/sentiment?text=great%20dealer").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["sentiment"], "positive");
    assert_eq!(json["data"]["text"], "great dealer");
}

#[tokio::test]
async fn blank_sentiment_text_is_rejected() {
    let stub = Arc::new(StubDealerService::default());
    let app = build_test_app_with(unconnected_pool(), stub.clone());

    let response = get(app, "/api/v1/sentiment?text=%20").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stub.call_count(), 0);
}
