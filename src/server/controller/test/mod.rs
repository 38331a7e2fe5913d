use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::{
    model::contact::ContactDto,
    server::{
        config::DEFAULT_UPLOAD_MAX_BYTES, router::router, state::AppState,
        storage::LocalMediaStorage,
    },
};


const BOUNDARY: &str = "koseli-test-boundary";

/// Router wired to an in-memory database and a temporary upload directory.
struct TestApp {
    router: Router,
    test: TestContext,
    uploads: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_contact(ContactDto::default()).await
    }

    async fn with_contact(contact: ContactDto) -> Self {
        Self::build(contact, DEFAULT_UPLOAD_MAX_BYTES).await
    }

    async fn with_upload_limit(upload_max_bytes: usize) -> Self {
        Self::build(ContactDto::default(), upload_max_bytes).await
    }

    async fn build(contact: ContactDto, upload_max_bytes: usize) -> Self {
        let test = TestBuilder::new().with_site_tables().build().await.unwrap();
        let uploads = tempfile::tempdir().unwrap();

        let db = test.db.as_ref().unwrap().clone();
        let storage = Arc::new(LocalMediaStorage::new(uploads.path(), "/uploads"));
        let router = router(upload_max_bytes).with_state(AppState::new(db, storage, contact));

        Self {
            router,
            test,
            uploads,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Number of files currently in the upload directory.
    fn stored_files(&self) -> usize {
        std::fs::read_dir(self.uploads.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Whether the file behind a `/uploads/...` URL exists on disk.
    fn upload_exists(&self, url: &str) -> bool {
        let name = url.trim_start_matches("/uploads/");
        self.uploads.path().join(name).exists()
    }
}

/// A file part for `multipart_request`.
struct FilePart<'a> {
    field: &'a str,
    file_name: &'a str,
    bytes: &'a [u8],
}

fn multipart_request(
    method: Method,
    uri: &str,
    fields: &[(&str, &str)],
    files: &[FilePart<'_>],
) -> Request<Body> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    for file in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/events"].is_object());
    assert!(body["paths"]["/api/gallery"]["delete"].is_object());
    assert_eq!(body["paths"]["/api/news"]["get"]["tags"], json!(["news"]));
}
