//! REST API error type.
//!
//! Every failure renders as
//! `{ "error": { "code": ..., "status": ..., "message": ... } }`
//! with the matching HTTP status.

use pf_access::AccessError;

use std::panic::Location;

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub status: u16,
    pub message: String,
    /// Offending field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by the access layer; status follows its code
    #[error("{source}")]
    Access {
        #[source]
        source: AccessError,
        location: ErrorLocation,
    },

    /// Missing or malformed `Authorization` header (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Upload over the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Upload of a type the server does not store (415)
    #[error("Unsupported media type: {message} {location}")]
    UnsupportedMediaType {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::BadRequest {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Access { source, .. } => StatusCode::from_u16(source.code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::Access { source, .. } => ApiErrorBody {
                code: source.error_code().into(),
                status: status.as_u16(),
                message: source.public_message(),
                field: match source {
                    AccessError::Validation { field, .. } => field,
                    _ => None,
                },
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                status: status.as_u16(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, field, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                status: status.as_u16(),
                message,
                field,
            },
            ApiError::PayloadTooLarge { message, .. } => ApiErrorBody {
                code: "PAYLOAD_TOO_LARGE".into(),
                status: status.as_u16(),
                message,
                field: None,
            },
            ApiError::UnsupportedMediaType { message, .. } => ApiErrorBody {
                code: "UNSUPPORTED_MEDIA_TYPE".into(),
                status: status.as_u16(),
                message,
                field: None,
            },
            // Details stay in the log
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                status: status.as_u16(),
                message: "Internal server error".into(),
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<AccessError> for ApiError {
    #[track_caller]
    fn from(source: AccessError) -> Self {
        ApiError::Access {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge {
                message: e.body_text(),
                location,
            };
        }
        ApiError::BadRequest {
            message: format!("Invalid multipart body: {}", e.body_text()),
            field: None,
            location,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
