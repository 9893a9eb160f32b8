//! Common utilities for API tests
//!
//! Provides the checked-in fixture data directory, helpers to write ad-hoc
//! model folders and a small request helper around `oneshot`.

use std::fs;
use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use useeio_api::{create_router, ApiState};
use useeio_flows::IndexPolicy;

pub const HEADER: &str = "index,id,name,category,subCategory,unit,uuid";

/// Data directory with the checked-in `USEEIO` model
pub fn fixture_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

/// Router over `data_dir` with the given index policy
pub fn create_test_app(data_dir: &Path, policy: IndexPolicy) -> Router {
    create_router(ApiState::new(data_dir, policy))
}

/// Write `{data_dir}/{model}/flows.csv` with the header plus `rows`
#[allow(dead_code)]
pub fn write_model(data_dir: &Path, model: &str, rows: &[&str]) {
    let folder = data_dir.join(model);
    fs::create_dir_all(&folder).expect("Failed to create model folder");

    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(folder.join("flows.csv"), content).expect("Failed to write flows.csv");
}

/// Response parts the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl TestResponse {
    #[allow(dead_code)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Response body should be JSON")
    }
}

/// Send a GET request to `app` and collect the response
pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}
