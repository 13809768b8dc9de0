//! Liveness and catalog readiness, mounted at the root.

use armory_db::repositories::FirearmRepo;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when storage answers and the catalog table is readable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of catalog records, `null` when the table cannot be read.
    pub records: Option<i64>,
}

/// GET /health
///
/// An empty catalog still reports `ok`; `records: 0` tells an operator that
/// seeding has not run.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = armory_db::health_check(&state.pool).await.is_ok();
    let records = match FirearmRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Catalog count failed during health check");
            None
        }
    };

    let status = if db_healthy && records.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        records,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
