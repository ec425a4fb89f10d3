#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use run_tracker::{app, AppConfig, AppState, Store};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// App backed by a fresh database file. Keep the `TempDir` alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub store: Store,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::with_database_file(dir.path().join("runs.db"));
    let store = Store::connect(&config).await.unwrap();
    store.ensure_tables().await.unwrap();
    let router = app(AppState::new(store.clone()), &config);
    TestApp {
        router,
        store,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// POST with a raw body and no content type, the way the browser client sends it.
    pub async fn post_raw(&self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn count(&self, table: &str) -> i64 {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let row: (i64,) = sqlx::query_as(&sql).fetch_one(self.store.pool()).await.unwrap();
        row.0
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
