use pf_core::PortfolioUpdate;

use serde::Deserialize;

/// Body of `PUT /api/manage/portfolio/{name}`
#[derive(Debug, Deserialize)]
pub struct UpdatePortfolioRequest {
    #[serde(rename = "userName")]
    pub user_name: String,

    #[serde(flatten)]
    pub updates: PortfolioUpdate,
}
