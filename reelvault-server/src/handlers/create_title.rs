use axum::{Json, extract::State, http::StatusCode};
use bytes::Bytes;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::infra::app_state::AppState;
use reelvault_model::NewTitle;

/// Validate and persist a new catalog record.
///
/// The body is taken as raw bytes so malformed JSON produces this API's
/// 400 body rather than the extractor's. Validation names every missing
/// required field at once; on success the record is persisted verbatim with
/// a generated id and matching creation/update timestamps.
pub async fn create_title_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let payload = NewTitle::parse(&body)?;
    payload.validate()?;

    let doc = payload.into_document(Uuid::new_v4(), Utc::now());
    state.titles()?.insert(&doc).await?;

    let id = doc.get("id").and_then(Value::as_str).unwrap_or_default();
    info!(id, "catalog record created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Catalog record saved",
            "data": doc,
        })),
    ))
}
