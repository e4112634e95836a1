pub mod create_project_request;
pub mod projects;
pub mod update_project_request;
