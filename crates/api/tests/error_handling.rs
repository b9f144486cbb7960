//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use dealership_api::error::AppError;
use dealership_core::dealer::ExternalServiceError;
use dealership_core::error::CoreError;
use dealership_core::validation::{FieldViolation, RangeBound, ValidationErrors};
use dealership_db::error::StoreError;
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "CarMake",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "CarMake with id 42 not found");
}

#[tokio::test]
async fn field_violations_return_400_with_details() {
    let mut errors = ValidationErrors::new();
    errors.push(FieldViolation::Required { field: "name" });
    errors.push(FieldViolation::Range {
        field: "year",
        value: 2014,
        bound: RangeBound::Min,
        limit: 2015,
    });
    let err = AppError::from(StoreError::from(errors));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "name is required; year must be at least 2015, got 2014"
    );

    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0]["kind"], "required");
    assert_eq!(violations[0]["field"], "name");
    assert_eq!(violations[1]["kind"], "range");
    assert_eq!(violations[1]["bound"], "min");
    assert_eq!(violations[1]["limit"], 2015);
}

#[tokio::test]
async fn enum_violation_lists_allowed_values() {
    let mut errors = ValidationErrors::new();
    errors.push(FieldViolation::Enum {
        field: "type",
        value: "sedan".to_string(),
        allowed: &["SEDAN", "SUV"],
    });

    let (status, json) = error_to_response(AppError::Core(errors.into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["violations"][0]["allowed"], serde_json::json!(["SEDAN", "SUV"]));
    assert_eq!(json["violations"][0]["value"], "sedan");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("no token provided".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden("Unauthorized".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn external_failure_returns_502_with_message() {
    let err = AppError::from(ExternalServiceError("connection refused".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "EXTERNAL_SERVICE_ERROR");
    assert_eq!(json["error"], "connection refused");
}

// ---------------------------------------------------------------------------
// Database errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let err = AppError::from(StoreError::Database(sqlx::Error::RowNotFound));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let err = AppError::BadRequest("text must not be empty".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}
