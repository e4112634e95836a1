pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::bearer_token::BearerToken,
    owner_request::OwnerRequest,
    portfolios::{
        create_portfolio_request::CreatePortfolioRequest,
        portfolios::{
            check_portfolio_name, create_portfolio, delete_portfolio, portfolio_page,
            update_portfolio,
        },
        update_portfolio_request::UpdatePortfolioRequest,
    },
    projects::{
        create_project_request::CreateProjectRequest,
        projects::{create_project, delete_project, update_project},
        update_project_request::UpdateProjectRequest,
    },
    responses::{AffectedResponse, CreatedResponse, NameAvailableResponse},
    upload::{
        upload::{UPLOADS_ROUTE, extension_for, upload_image},
        upload_response::UploadResponse,
    },
    users::users::{auth_user, check_user_name, create_user, delete_user, update_user, user_page},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
