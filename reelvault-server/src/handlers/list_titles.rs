use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::ApiResult;
use crate::infra::app_state::AppState;
use reelvault_model::{PageRequest, page_summary};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    limit: Option<String>,
    offset: Option<String>,
}

/// Return one page of the catalog, newest first, with the total count and
/// per-category / per-type tallies of the returned page.
///
/// The page and the total come from two separate store round-trips, so
/// under concurrent writes they can reflect slightly different instants.
/// That is accepted behaviour for this endpoint.
pub async fn list_titles_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Value>> {
    let page = PageRequest::from_raw(params.limit.as_deref(), params.offset.as_deref())?;

    let store = state.titles()?;
    let items = store.list(&page).await?;
    let total = store.count().await?;

    let summary = page_summary(&items);

    info!(
        returned = items.len(),
        total,
        offset = page.offset,
        "catalog page listed"
    );

    Ok(Json(json!({
        "success": true,
        "message": "Catalog listed successfully",
        "statistics": {
            "total_records": total,
            "returned_records": items.len(),
            "offset": page.offset,
            "limit": page.limit,
            "has_more": page.has_more(total),
        },
        "summary": summary,
        "data": items,
    })))
}
