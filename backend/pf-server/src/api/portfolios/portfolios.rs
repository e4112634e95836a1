//! Portfolio REST API handlers

use crate::{
    AffectedResponse, ApiResult, AppState, BearerToken, CreatePortfolioRequest, CreatedResponse,
    NameAvailableResponse, OwnerRequest, UpdatePortfolioRequest,
};

use pf_core::PortfolioPage;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// POST /api/portfolio/query/{name}
pub async fn check_portfolio_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<NameAvailableResponse>> {
    let available = state.access.check_portfolio_name(&name).await?;

    Ok(Json(NameAvailableResponse { available }))
}

/// POST /api/portfolio/{name}
///
/// Public page; no token.
pub async fn portfolio_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<PortfolioPage>> {
    let page = state.access.portfolio_page(&name).await?;

    Ok(Json(page))
}

/// POST /api/manage/portfolio/{name}
pub async fn create_portfolio(
    State(state): State<AppState>,
    Path(name): Path<String>,
    BearerToken(token): BearerToken,
    Json(req): Json<CreatePortfolioRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let (user_name, portfolio) = req.into_new_portfolio(name);
    let id = state
        .access
        .add_new_portfolio(&user_name, portfolio, &token)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/manage/portfolio/{name}
pub async fn update_portfolio(
    State(state): State<AppState>,
    Path(name): Path<String>,
    BearerToken(token): BearerToken,
    Json(req): Json<UpdatePortfolioRequest>,
) -> ApiResult<Json<AffectedResponse>> {
    let rows_affected = state
        .access
        .update_portfolio(&req.user_name, &name, req.updates, &token)
        .await?;

    Ok(Json(AffectedResponse { rows_affected }))
}

/// DELETE /api/manage/portfolio/{name}
pub async fn delete_portfolio(
    State(state): State<AppState>,
    Path(name): Path<String>,
    BearerToken(token): BearerToken,
    Json(req): Json<OwnerRequest>,
) -> ApiResult<Json<AffectedResponse>> {
    let rows_affected = state
        .access
        .delete_portfolio(&req.user_name, &name, &token)
        .await?;

    Ok(Json(AffectedResponse { rows_affected }))
}
