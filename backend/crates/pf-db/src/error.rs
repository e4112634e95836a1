use error_location::ErrorLocation;

use std::panic::Location;

use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown column '{column}' on table '{table}' {location}")]
    UnknownColumn {
        table: String,
        column: String,
        location: ErrorLocation,
    },

    #[error("Value for {table}.{column} must be {expected} {location}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid statement: {message} {location}")]
    InvalidStatement {
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not decode column '{column}': {message} {location}")]
    Decode {
        column: String,
        message: String,
        location: ErrorLocation,
    },

    /// UNIQUE constraint failed (e.g. a username or portfolio name is taken)
    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    /// NOT NULL constraint failed
    #[error("Required field missing: {message} {location}")]
    MissingField {
        message: String,
        location: ErrorLocation,
    },

    /// FOREIGN KEY constraint failed (parent user or portfolio absent)
    #[error("Parent row missing: {message} {location}")]
    MissingParent {
        message: String,
        location: ErrorLocation,
    },

    #[error("Check constraint violated: {message} {location}")]
    CheckViolation {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn invalid_statement<S: Into<String>>(message: S) -> Self {
        Self::InvalidStatement {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Constraint failures get their own variants so callers can tell a taken
/// name from a broken database.
impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(db_err) = &source {
            let message = db_err.message().to_string();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return Self::UniqueViolation { message, location };
                }
                ErrorKind::NotNullViolation => {
                    return Self::MissingField { message, location };
                }
                ErrorKind::ForeignKeyViolation => {
                    return Self::MissingParent { message, location };
                }
                ErrorKind::CheckViolation => {
                    return Self::CheckViolation { message, location };
                }
                _ => {}
            }
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
