//! User entities and the views built from them.
//!
//! Column-shaped structs (`PublicProfile`) keep the database column names as
//! their JSON keys; assembled views (`UserPage`) use the camelCase keys the
//! client reads.

use crate::PortfolioSummary;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registration payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub email: String,
    /// Plain-text password, hashed before it reaches the store
    #[serde(alias = "pw")]
    pub password: String,
    /// Opaque preferences blob, stored serialized
    #[serde(default)]
    pub preferences: Value,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "userImage", alias = "userimage")]
    pub user_image: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub usergithuburl: Option<String>,
    #[serde(default)]
    pub userbio: Option<String>,
}

/// Partial update of a user row. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New plain-text password; re-hashed on update
    #[serde(default, alias = "pw", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        alias = "userImage",
        skip_serializing_if = "Option::is_none"
    )]
    pub userimage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usergithuburl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userbio: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.preferences.is_none()
            && self.location.is_none()
            && self.userimage.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.linkedin.is_none()
            && self.usergithuburl.is_none()
            && self.userbio.is_none()
    }
}

/// Profile fields anyone may see on a portfolio page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub userimage: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub usergithuburl: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub userbio: Option<String>,
}

/// Private dashboard view of a user and the portfolios they own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub user_name: String,
    pub user_id: i64,
    pub user_email: Option<String>,
    pub user_location: Option<String>,
    pub user_image: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub linkedin: Option<String>,
    pub githuburl: Option<String>,
    pub user_portfolios: Vec<PortfolioSummary>,
    pub user_bio: Option<String>,
}
