//! Image upload handler

use crate::{ApiError, ApiResult, AppState, BearerToken, UploadResponse};

use std::panic::Location;

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;
use uuid::Uuid;

/// Route prefix uploaded files are served under
pub const UPLOADS_ROUTE: &str = "/uploads";

const FILE_FIELD: &str = "file";

/// File extension stored for each accepted image type
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// POST /api/upload
///
/// Multipart body with one `file` part. Any valid token may upload; the
/// stored name is random so clients cannot overwrite each other's files.
pub async fn upload_image(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    let claims = state.access.authenticate(&token)?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let extension =
            extension_for(&content_type).ok_or_else(|| ApiError::UnsupportedMediaType {
                message: format!("'{}' is not an accepted image type", content_type),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::bad_request("Uploaded file is empty", Some(FILE_FIELD)));
        }
        if bytes.len() > state.max_upload_bytes {
            return Err(ApiError::PayloadTooLarge {
                message: format!(
                    "Image is {} bytes; the limit is {}",
                    bytes.len(),
                    state.max_upload_bytes
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        tokio::fs::create_dir_all(&state.upload_dir)
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to create upload directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = state.upload_dir.join(&file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to write {}: {}", path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            "User '{}' uploaded {} ({} bytes)",
            claims.user,
            file_name,
            bytes.len()
        );

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                url: format!("{}/{}", UPLOADS_ROUTE, file_name),
            }),
        ));
    }

    Err(ApiError::bad_request(
        "Multipart body has no 'file' part",
        Some(FILE_FIELD),
    ))
}
