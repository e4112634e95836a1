use crate::{ProjectEntry, PublicProfile};

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_public() -> bool {
    true
}

/// Payload for creating a portfolio. The owner is the acting user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPortfolio {
    #[serde(rename = "portfolioName")]
    pub portfolio_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Opaque layout/theme blob, stored serialized
    #[serde(default)]
    pub config: Value,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default = "default_public")]
    pub public: bool,
}

/// Partial update of a portfolio row. Setting `name` renames the portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl PortfolioUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.technologies.is_none()
            && self.config.is_none()
            && self.template.is_none()
            && self.public.is_none()
    }
}

/// Portfolio row as listed on its owner's dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(default)]
    pub template: Option<String>,
}

/// Portfolio-level fields of a rendered portfolio page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHeader {
    pub id: i64,
    pub name: String,
    pub usersid: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Value,
    #[serde(default)]
    pub config: Value,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default = "default_public")]
    pub public: bool,
}

/// Everything needed to render a public portfolio page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPage {
    pub portfolio: PortfolioHeader,
    pub user_info: PublicProfile,
    pub portfolio_info: Vec<ProjectEntry>,
}
