#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use url::Url;

use reelvault_server::{
    AppState, Config, create_app,
    blob::BlobVault,
    store::{MemoryTitleStore, TitleStore},
};

pub const PUBLIC_BASE: &str = "http://localhost:3000/files";

/// App state over in-memory backends, returning a handle onto the title
/// store so tests can seed documents directly.
pub fn memory_state() -> (AppState, Arc<MemoryTitleStore>) {
    let titles = Arc::new(MemoryTitleStore::new());
    let store: Arc<dyn TitleStore> = titles.clone();

    let state = AppState {
        config: Arc::new(Config::for_tests()),
        titles: Some(store),
        blobs: Some(Arc::new(BlobVault::in_memory(
            Url::parse(PUBLIC_BASE).unwrap(),
        ))),
    };

    (state, titles)
}

/// App state with no stores configured at all.
pub fn unconfigured_state() -> AppState {
    AppState {
        config: Arc::new(Config::for_tests()),
        titles: None,
        blobs: None,
    }
}

pub fn server(state: AppState) -> TestServer {
    TestServer::new(create_app(state)).expect("test server")
}

/// A fully shaped catalog document, as the creator would persist it.
pub fn seeded_title(name: &str, category: &str, kind: &str, created_at: &str) -> Value {
    json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "title": name,
        "category": category,
        "type": kind,
        "description": "",
        "release_year": null,
        "rating": null,
        "duration": null,
        "cast": [],
        "director": null,
        "cover_url": null,
        "created_at": created_at,
        "updated_at": created_at,
    })
}
