use pf_core::NewPortfolio;

use serde::Deserialize;
use serde_json::Value;

fn default_public() -> bool {
    true
}

/// Body of `POST /api/manage/portfolio/{name}`. The name comes from the path.
#[derive(Debug, Deserialize)]
pub struct CreatePortfolioRequest {
    #[serde(rename = "userName")]
    pub user_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub config: Value,

    #[serde(default)]
    pub template: Option<String>,

    #[serde(default = "default_public")]
    pub public: bool,
}

impl CreatePortfolioRequest {
    pub fn into_new_portfolio(self, portfolio_name: String) -> (String, NewPortfolio) {
        (
            self.user_name,
            NewPortfolio {
                portfolio_name,
                description: self.description,
                technologies: self.technologies,
                config: self.config,
                template: self.template,
                public: self.public,
            },
        )
    }
}
