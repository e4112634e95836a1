use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of page addressed by the `/api/<pageType>/...` routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    User,
    Portfolio,
    Project,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Portfolio => "portfolio",
            Self::Project => "project",
        }
    }
}

impl FromStr for PageType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "user" => Ok(Self::User),
            "portfolio" => Ok(Self::Portfolio),
            "project" => Ok(Self::Project),
            _ => Err(CoreError::InvalidPageType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
