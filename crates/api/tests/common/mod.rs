#![allow(dead_code)]

use std::path::PathBuf;

use armory_api::config::{LogFormat, ServerConfig};
use armory_api::router::build_app_router;
use armory_api::state::AppState;
use armory_db::DbPool;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Serves the repository's `static/` directory and allows the dev CORS
/// origin `http://localhost:5173`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 5,
        seed_on_startup: false,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static"),
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router (same middleware stack as production)
/// around the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// A migrated database in a temp directory, optionally seeded.
///
/// Keep the returned [`TempDir`] alive for the duration of the test.
pub async fn test_pool(seed: bool) -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("catalog.db").display());
    let pool = armory_db::create_pool(&url, 5).await.unwrap();
    armory_db::run_migrations(&pool).await.unwrap();
    if seed {
        armory_db::seed::seed_reference_firearms(&pool).await.unwrap();
    }
    (dir, pool)
}

/// Send a GET request through the router without a TCP listener.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
