mod support;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::Value;
use uuid::Uuid;

use support::{PUBLIC_BASE, memory_state, server, unconfigured_state};

fn file_form(field: &str, filename: &str, content: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        field.to_string(),
        Part::bytes(content.to_vec())
            .file_name(filename.to_string())
            .mime_type("application/octet-stream"),
    )
}

#[tokio::test]
async fn upload_stores_under_a_generated_uuid_name() {
    let (state, _) = memory_state();
    let server = server(state);

    let payload = b"not really an mp4";
    let response = server
        .post("/api/v1/files")
        .multipart(file_form("file", "movie.mp4", payload))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], serde_json::json!(true));

    let data = &body["data"];
    assert_eq!(data["original_filename"], serde_json::json!("movie.mp4"));
    assert_eq!(data["container"], serde_json::json!("netflix-files"));
    assert_eq!(data["size_bytes"], serde_json::json!(payload.len()));

    let stored = data["stored_filename"].as_str().expect("stored name");
    let (stem, ext) = stored.rsplit_once('.').expect("name has extension");
    assert!(stem.parse::<Uuid>().is_ok());
    assert_eq!(ext, "mp4");

    assert_eq!(
        data["blob_url"].as_str().unwrap(),
        format!("{PUBLIC_BASE}/netflix-files/{stored}")
    );
    assert!(
        chrono::DateTime::parse_from_rfc3339(data["uploaded_at"].as_str().unwrap())
            .is_ok()
    );
}

#[tokio::test]
async fn upload_without_extension_keeps_the_empty_extension() {
    let (state, _) = memory_state();
    let server = server(state);

    let body: Value = server
        .post("/api/v1/files")
        .multipart(file_form("file", "noext", b"raw"))
        .await
        .json();

    let stored = body["data"]["stored_filename"].as_str().unwrap();
    assert!(stored.ends_with('.'));
    let (stem, ext) = stored.rsplit_once('.').unwrap();
    assert!(stem.parse::<Uuid>().is_ok());
    assert_eq!(ext, "");
}

#[tokio::test]
async fn upload_requires_the_file_field() {
    let (state, _) = memory_state();
    let server = server(state);

    let response = server
        .post("/api/v1/files")
        .multipart(file_form("attachment", "movie.mp4", b"bytes"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], serde_json::json!("No file provided"));
}

#[tokio::test]
async fn upload_without_a_multipart_body_gets_a_structured_error() {
    let (state, _) = memory_state();
    let server = server(state);

    let response = server
        .post("/api/v1/files")
        .json(&serde_json::json!({"not": "a multipart body"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], serde_json::json!("No file provided"));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn upload_writes_the_full_content_to_a_local_root() {
    use reelvault_server::{AppState, Config, blob::BlobVault};
    use std::sync::Arc;
    use url::Url;

    let root = tempfile::tempdir().expect("temp blob root");
    let vault = BlobVault::local(
        root.path(),
        Url::parse(PUBLIC_BASE).expect("public base url"),
    )
    .expect("local vault");

    let state = AppState {
        config: Arc::new(Config::for_tests()),
        titles: None,
        blobs: Some(Arc::new(vault)),
    };
    let server = server(state);

    let payload = b"full byte content";
    let body: Value = server
        .post("/api/v1/files")
        .multipart(file_form("file", "movie.mp4", payload))
        .await
        .json();

    let stored = body["data"]["stored_filename"].as_str().unwrap();
    let on_disk = std::fs::read(root.path().join("netflix-files").join(stored))
        .expect("stored object on disk");
    assert_eq!(on_disk, payload);
}

#[tokio::test]
async fn upload_without_configured_store_is_a_configuration_error() {
    let server = server(unconfigured_state());

    let response = server
        .post("/api/v1/files")
        .multipart(file_form("file", "movie.mp4", b"bytes"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], serde_json::json!("Configuration error"));
}
