use pf_core::NewProject;

use serde::Deserialize;

/// Body of `POST /api/manage/project/{portfolio_name}`. The portfolio id is
/// resolved from the path.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(rename = "userName")]
    pub user_name: String,

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

impl CreateProjectRequest {
    pub fn into_new_project(self, portfolioid: i64) -> (String, NewProject) {
        (
            self.user_name,
            NewProject {
                portfolioid,
                projectname: self.projectname,
                description: self.description,
                imageurl: self.imageurl,
                githuburl: self.githuburl,
                liveurl: self.liveurl,
            },
        )
    }
}
