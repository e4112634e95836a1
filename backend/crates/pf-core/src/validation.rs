//! Name rules shared by the access layer and the client.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Portfolio names are capped at this many characters
pub const MAX_PORTFOLIO_NAME_LENGTH: usize = 20;

/// Characters with meaning inside a URL path or query
const URL_RESERVED: &[char] = &['/', '\\', '?', '#', '%'];

/// User names that collide with fixed `/api/user/...` routes
const RESERVED_USER_NAMES: &[&str] = &["auth"];

/// Names travel as single URL path segments, so they must be non-empty,
/// free of URL-reserved characters and not a dot segment.
#[track_caller]
pub fn validate_name(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            message: format!("{} cannot be empty", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if let Some(c) = value.chars().find(|c| URL_RESERVED.contains(c)) {
        return Err(CoreError::Validation {
            message: format!("{} cannot contain '{}'", field, c),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if value == "." || value == ".." {
        return Err(CoreError::Validation {
            message: format!("{} cannot be '{}'", field, value),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[track_caller]
pub fn validate_user_name(name: &str) -> CoreErrorResult<()> {
    validate_name("userName", name)?;

    if RESERVED_USER_NAMES.contains(&name) {
        return Err(CoreError::Validation {
            message: format!("'{}' is reserved, please choose another.", name),
            field: Some("userName".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Shown whenever a portfolio name is over the length cap
pub fn portfolio_name_length_message() -> String {
    format!(
        "Portfolio name exceeds length ({} characters maximum)",
        MAX_PORTFOLIO_NAME_LENGTH
    )
}

#[track_caller]
pub fn validate_portfolio_name(name: &str) -> CoreErrorResult<()> {
    validate_name("portfolioName", name)?;

    if name.chars().count() > MAX_PORTFOLIO_NAME_LENGTH {
        return Err(CoreError::Validation {
            message: portfolio_name_length_message(),
            field: Some("portfolioName".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
