use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// Handler for `GET /healthz`. Liveness only; no dependencies are checked.
pub async fn healthz() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler for `GET /readyz`. Services hold no connections, so ready == alive.
pub async fn readyz() -> Json<Health> {
    healthz().await
}
