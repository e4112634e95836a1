//! Axum extractor for `Authorization: Bearer <token>`

use crate::ApiError;

use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Raw bearer token. Validation against a user happens in the access layer.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::Unauthorized {
                message: "Missing authorization header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let value = header.to_str().map_err(|_| ApiError::Unauthorized {
            message: "Authorization header is not valid text".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized {
                message: "Invalid authorization scheme: expected 'Bearer'".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(BearerToken(token.to_string()))
    }
}
