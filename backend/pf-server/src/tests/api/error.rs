use crate::ApiError;

use pf_access::{AccessError, NAME_TAKEN_MESSAGE};
use pf_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::from(AccessError::not_found("No such portfolio 'x' found."));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["status"], 404);
    assert_eq!(json["error"]["message"], "No such portfolio 'x' found.");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(AccessError::validation(
        "Portfolio name exceeds length (20 characters maximum)",
        Some("portfolioName"),
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "portfolioName");
}

#[tokio::test]
async fn test_unique_violation_returns_409_with_friendly_message() {
    let error = ApiError::from(AccessError::from(DbError::UniqueViolation {
        message: "UNIQUE constraint failed: portfolios.name".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["message"], NAME_TAKEN_MESSAGE);
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::from(AccessError::Forbidden {
        message: "You do not have access to this user page.".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_no_rows_affected_returns_500() {
    let error = ApiError::from(AccessError::no_rows("Update portfolio"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "NO_ROWS_AFFECTED");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "Failed to write /srv/uploads/secret.png".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_database_failure_hides_details() {
    let error = ApiError::from(AccessError::from(DbError::Migration {
        message: "table users is corrupt".into(),
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"]["message"].as_str().unwrap().contains("corrupt"));
}
