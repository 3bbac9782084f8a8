//! # Reelvault Server
//!
//! HTTP API for the Reelvault catalog. Four stateless handlers over two
//! external collaborators:
//!
//! - **list** — one page of titles, newest first, with totals and page
//!   summaries
//! - **filter** — titles matching an arbitrary conjunction of optional
//!   filters
//! - **create** — validate and persist a new title document
//! - **upload** — store a binary asset in the object store and return its
//!   public reference
//!
//! Titles live in a document store behind the [`store::TitleStore`] seam
//! (Postgres in production, in-memory for tests); uploaded assets go
//! through [`blob::BlobVault`]. Every failure is converted into a
//! structured JSON error body at the handler boundary.

pub mod blob;
pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;
pub mod store;

pub use errors::{ApiError, ApiResult};
pub use infra::{app_state::AppState, config::Config};

use axum::{Router, http::HeaderValue};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Assemble the application router: versioned API routes plus the ambient
/// trace and CORS layers.
pub fn create_app(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
