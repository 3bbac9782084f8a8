use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{
    create_title::create_title_handler, filter_titles::filter_titles_handler,
    list_titles::list_titles_handler, upload_file::upload_file_handler,
};
use crate::infra::app_state::AppState;

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/titles", get(list_titles_handler).post(create_title_handler))
        .route("/titles/filter", get(filter_titles_handler))
        .route("/files", post(upload_file_handler))
}
