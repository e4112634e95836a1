use serde::{Deserialize, Serialize};

/// Answer to a name availability query
#[derive(Debug, Serialize, Deserialize)]
pub struct NameAvailableResponse {
    pub available: bool,
}

/// Returned by create routes
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Returned by update and delete routes
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedResponse {
    pub rows_affected: u64,
}
