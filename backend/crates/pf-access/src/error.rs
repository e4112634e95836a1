use pf_auth::AuthError;
use pf_core::{CoreError, portfolio_name_length_message};
use pf_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;
use thiserror::Error;

pub const NAME_TAKEN_MESSAGE: &str = "Sorry, this name is already taken, please choose another.";
pub const MISSING_FIELD_MESSAGE: &str = "Missing information, ensure all fields are filled out.";
pub const MISSING_PARENT_MESSAGE: &str = "The parent user or portfolio in question does not exist.";

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("{operation}: no rows affected {location}")]
    NoRowsAffected {
        operation: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl AccessError {
    /// HTTP-style status for this failure
    pub fn code(&self) -> u16 {
        match self {
            Self::Forbidden { .. } => 403,
            Self::Unauthorized { .. } => 401,
            Self::NotFound { .. } => 404,
            Self::Validation { .. } => 400,
            Self::Conflict { .. } => 409,
            Self::NoRowsAffected { .. }
            | Self::Database { .. }
            | Self::Hashing { .. }
            | Self::Internal { .. } => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::NoRowsAffected { .. } => "NO_ROWS_AFFECTED",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Hashing { .. } => "HASHING_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Text safe to show a client. Internal failures are not described.
    pub fn public_message(&self) -> String {
        match self {
            Self::Forbidden { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::Conflict { message, .. } => message.clone(),
            Self::NoRowsAffected { operation, .. } => format!("{}: no rows affected.", operation),
            Self::Database { .. } | Self::Hashing { .. } | Self::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_rows(operation: impl Into<String>) -> Self {
        Self::NoRowsAffected {
            operation: operation.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AccessError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            DbError::UniqueViolation { .. } => Self::Conflict {
                message: NAME_TAKEN_MESSAGE.to_string(),
                location,
            },
            DbError::MissingField { .. } => Self::Validation {
                message: MISSING_FIELD_MESSAGE.to_string(),
                field: None,
                location,
            },
            DbError::MissingParent { .. } => Self::NotFound {
                message: MISSING_PARENT_MESSAGE.to_string(),
                location,
            },
            // The portfolio name length is the only CHECK in the schema
            DbError::CheckViolation { message, .. } => {
                warn!("Check constraint rejected write: {}", message);
                Self::Validation {
                    message: portfolio_name_length_message(),
                    field: Some("portfolioName".to_string()),
                    location,
                }
            }
            other => Self::Database {
                source: other,
                location,
            },
        }
    }
}

impl From<AuthError> for AccessError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            AuthError::SubjectMismatch { .. } => Self::Forbidden {
                message: "You do not have access to this user page.".to_string(),
                location,
            },
            AuthError::PasswordHash { message, .. } => Self::Hashing { message, location },
            AuthError::JwtEncode { source, .. } => Self::Internal {
                message: format!("Failed to sign token: {}", source),
                location,
            },
            AuthError::TokenExpired { .. } => Self::Unauthorized {
                message: "Token expired, please log in again.".to_string(),
                location,
            },
            other => Self::Unauthorized {
                message: format!("Invalid token ({})", other.error_code()),
                location,
            },
        }
    }
}

impl From<CoreError> for AccessError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidPageType { value, .. } => Self::Validation {
                message: format!("Unknown page type '{}'", value),
                field: Some("pageType".to_string()),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AccessError>;
