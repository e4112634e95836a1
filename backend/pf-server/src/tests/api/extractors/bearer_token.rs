use crate::{ApiError, BearerToken};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(header: Option<&str>) -> Result<BearerToken, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    BearerToken::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let result = extract(Some("Bearer abc.def.ghi")).await;

    assert_eq!(result.unwrap().0, "abc.def.ghi");
}

#[tokio::test]
async fn test_extractor_without_header_is_unauthorized() {
    let result = extract(None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_wrong_scheme_is_unauthorized() {
    let result = extract(Some("Basic dXNlcjpwYXNz")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_empty_token_is_unauthorized() {
    let result = extract(Some("Bearer   ")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
