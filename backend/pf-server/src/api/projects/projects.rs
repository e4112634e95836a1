//! Project REST API handlers
//!
//! All three routes share `/api/manage/project/{target}`: creation targets a
//! portfolio by name, update and delete target a project by id.

use crate::{
    AffectedResponse, ApiError, ApiResult, AppState, BearerToken, CreateProjectRequest,
    CreatedResponse, OwnerRequest, UpdateProjectRequest,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

fn parse_project_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        ApiError::bad_request(format!("Invalid project id '{}'", raw), Some("id"))
    })
}

/// POST /api/manage/project/{portfolio_name}
pub async fn create_project(
    State(state): State<AppState>,
    Path(portfolio_name): Path<String>,
    BearerToken(token): BearerToken,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    state.access.verify_token(&req.user_name, &token)?;

    let (portfolio_id, _owner) = state.access.get_portfolio_ids(&portfolio_name).await?;
    let (user_name, project) = req.into_new_project(portfolio_id);

    let id = state
        .access
        .add_new_project(&user_name, project, &token)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/manage/project/{id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    BearerToken(token): BearerToken,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<AffectedResponse>> {
    let project_id = parse_project_id(&id)?;
    let rows_affected = state
        .access
        .update_project(&req.user_name, project_id, req.updates, &token)
        .await?;

    Ok(Json(AffectedResponse { rows_affected }))
}

/// DELETE /api/manage/project/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    BearerToken(token): BearerToken,
    Json(req): Json<OwnerRequest>,
) -> ApiResult<Json<AffectedResponse>> {
    let project_id = parse_project_id(&id)?;
    let rows_affected = state
        .access
        .delete_project(&req.user_name, project_id, &token)
        .await?;

    Ok(Json(AffectedResponse { rows_affected }))
}
