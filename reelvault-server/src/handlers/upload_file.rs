use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use bytes::Bytes;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;

use crate::blob::{CONTAINER, stored_name};
use crate::errors::{ApiError, ApiResult};
use crate::infra::app_state::AppState;
use reelvault_model::utc_timestamp;

/// Accept one binary file part named `file`, write it to the object store
/// under a freshly generated name, and return its public reference.
///
/// The extraction result is taken as a `Result` so a request without a
/// multipart body still gets this API's structured 400 rather than the
/// extractor's plain-text rejection.
pub async fn upload_file_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<Value>> {
    let vault = state.blobs()?;

    let mut multipart =
        multipart.map_err(|_| ApiError::no_file("send a file using the 'file' field"))?;

    let mut file: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::upload(err.to_string()))?
    {
        if field.name() == Some("file") {
            let original = field.file_name().unwrap_or_default().to_string();
            let content = field
                .bytes()
                .await
                .map_err(|err| ApiError::upload(err.to_string()))?;
            file = Some((original, content));
            break;
        }
    }

    let Some((original_filename, content)) = file else {
        return Err(ApiError::no_file("send a file using the 'file' field"));
    };

    let stored_filename = stored_name(&original_filename);
    let size_bytes = content.len();

    vault.store(&stored_filename, content).await?;
    let blob_url = vault.url_for(&stored_filename);

    info!(
        original = original_filename,
        stored = stored_filename,
        size_bytes,
        "file uploaded"
    );

    Ok(Json(json!({
        "success": true,
        "message": "File uploaded successfully",
        "data": {
            "original_filename": original_filename,
            "stored_filename": stored_filename,
            "blob_url": blob_url,
            "container": CONTAINER,
            "size_bytes": size_bytes,
            "uploaded_at": utc_timestamp(Utc::now()),
        },
    })))
}
