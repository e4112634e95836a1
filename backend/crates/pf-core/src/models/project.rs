use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for creating a project inside an existing portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub portfolioid: i64,
    #[serde(default)]
    pub projectname: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub imageurl: Option<String>,
    #[serde(default)]
    pub githuburl: Option<String>,
    #[serde(default)]
    pub liveurl: Option<String>,
}

/// Partial update of a project row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projectname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imageurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githuburl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveurl: Option<String>,
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        self.projectname.is_none()
            && self.description.is_none()
            && self.imageurl.is_none()
            && self.githuburl.is_none()
            && self.liveurl.is_none()
    }
}

/// One project joined with its portfolio's display fields.
///
/// `portfolioDescription` and `usersid` are filled in from the portfolio row
/// after the join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub config: Value,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub projectname: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub imageurl: Option<String>,
    #[serde(default)]
    pub githuburl: Option<String>,
    #[serde(default)]
    pub liveurl: Option<String>,
    #[serde(default, rename = "portfolioDescription")]
    pub portfolio_description: Option<String>,
    #[serde(default)]
    pub usersid: i64,
}
