use pf_core::ProjectUpdate;

use serde::Deserialize;

/// Body of `PUT /api/manage/project/{id}`
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(rename = "userName")]
    pub user_name: String,

    #[serde(flatten)]
    pub updates: ProjectUpdate,
}
