use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::ApiResult;
use crate::infra::app_state::AppState;
use reelvault_model::TitleFilters;

/// Raw filter parameters. Numeric values stay strings here so unparseable
/// input produces this API's own 400 body instead of a rejection from the
/// extractor.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    category: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    year: Option<String>,
    rating_min: Option<String>,
}

/// Return every catalog record matching the conjunction of the supplied
/// filters, newest first. Filters left out are omitted from the query
/// entirely.
pub async fn filter_titles_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Json<Value>> {
    let filters = TitleFilters::from_raw(
        params.category.as_deref(),
        params.kind.as_deref(),
        params.title.as_deref(),
        params.year.as_deref(),
        params.rating_min.as_deref(),
    )?;

    let items = state.titles()?.find(&filters).await?;

    info!(count = items.len(), "catalog filter applied");

    Ok(Json(json!({
        "success": true,
        "message": format!("{} record(s) found", items.len()),
        "filters_applied": {
            "category": params.category,
            "type": params.kind,
            "title": params.title,
            "year": params.year,
            "rating_min": params.rating_min,
        },
        "count": items.len(),
        "data": items,
    })))
}
