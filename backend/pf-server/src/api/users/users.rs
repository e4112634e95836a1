//! User REST API handlers

use crate::{
    AffectedResponse, ApiError, ApiResult, AppState, BearerToken, CreatedResponse,
    NameAvailableResponse,
};

use pf_core::{AuthResponse, Credentials, NewUser, UserPage, UserUpdate};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// POST /api/user/auth
///
/// Log in. The HTTP status mirrors the response `code`, so a wrong password
/// is a 403 that still carries an `AuthResponse` body.
pub async fn auth_user(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = state.access.auth_user(credentials).await?;
    let status = StatusCode::from_u16(response.code).unwrap_or(StatusCode::OK);

    Ok((status, Json(response)))
}

/// POST /api/user/query/{name}
pub async fn check_user_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<NameAvailableResponse>> {
    let available = state.access.check_user_name(&name).await?;

    Ok(Json(NameAvailableResponse { available }))
}

/// POST /api/user/{user_name}
///
/// Private dashboard; the token must belong to `user_name`.
pub async fn user_page(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<UserPage>> {
    let page = state.access.user_page(&user_name, &token).await?;

    Ok(Json(page))
}

/// POST /api/manage/user/{name}
///
/// Registration. No token; the body's `userName` must match the path.
pub async fn create_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(user): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    if user.user_name != name {
        return Err(ApiError::bad_request(
            format!("userName '{}' does not match path '{}'", user.user_name, name),
            Some("userName"),
        ));
    }

    let id = state.access.add_new_user(user).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/manage/user/{name}
pub async fn update_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
    BearerToken(token): BearerToken,
    Json(updates): Json<UserUpdate>,
) -> ApiResult<Json<AffectedResponse>> {
    let rows_affected = state.access.update_user(&name, updates, &token).await?;

    Ok(Json(AffectedResponse { rows_affected }))
}

/// DELETE /api/manage/user/{name}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<AffectedResponse>> {
    let rows_affected = state.access.delete_user(&name, &token).await?;

    Ok(Json(AffectedResponse { rows_affected }))
}
