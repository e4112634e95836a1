use crate::{
    AppState, UPLOADS_ROUTE, auth_user, check_portfolio_name, check_user_name, create_portfolio,
    create_project, create_user, delete_portfolio, delete_project, delete_user, health,
    portfolio_page, update_portfolio, update_project, update_user, upload_image, user_page,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Multipart framing on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);
    let uploads = ServeDir::new(&state.upload_dir);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/api/user/auth", post(auth_user))
        .route("/api/user/query/{name}", post(check_user_name))
        .route("/api/user/{user_name}", post(user_page))
        .route(
            "/api/manage/user/{name}",
            post(create_user).put(update_user).delete(delete_user),
        )
        // Portfolios
        .route("/api/portfolio/query/{name}", post(check_portfolio_name))
        .route("/api/portfolio/{name}", post(portfolio_page))
        .route(
            "/api/manage/portfolio/{name}",
            post(create_portfolio)
                .put(update_portfolio)
                .delete(delete_portfolio),
        )
        // Projects: portfolio name on create, project id on update/delete
        .route(
            "/api/manage/project/{target}",
            post(create_project)
                .put(update_project)
                .delete(delete_project),
        )
        // Uploads
        .route(
            "/api/upload",
            post(upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .nest_service(UPLOADS_ROUTE, uploads)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
