use serde::Deserialize;

/// Body of portfolio and project deletes: the acting user
#[derive(Debug, Deserialize)]
pub struct OwnerRequest {
    #[serde(rename = "userName")]
    pub user_name: String,
}
