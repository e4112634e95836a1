use serde::{Deserialize, Serialize};

/// Login payload posted to `/api/user/auth`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub password: String,
}

/// Outcome of a login attempt.
///
/// Unknown users and wrong passwords are reported as values (`auth: false`
/// with code 404 or 403), not as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub code: u16,
    pub auth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(
        default,
        rename = "userName",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usersid: Option<i64>,
}

impl AuthResponse {
    pub fn unknown_user(user_name: &str) -> Self {
        Self {
            code: 404,
            auth: false,
            message: Some(format!("The username '{}' is incorrect.", user_name)),
            token: None,
            user_name: None,
            usersid: None,
        }
    }

    pub fn wrong_password() -> Self {
        Self {
            code: 403,
            auth: false,
            message: Some("The password you entered is incorrect.".to_string()),
            token: None,
            user_name: None,
            usersid: None,
        }
    }

    pub fn granted(user_name: String, usersid: i64, token: String) -> Self {
        Self {
            code: 200,
            auth: true,
            message: None,
            token: Some(token),
            user_name: Some(user_name),
            usersid: Some(usersid),
        }
    }
}
