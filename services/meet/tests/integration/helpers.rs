use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use huddle_meet::config::MeetConfig;
use huddle_meet::router::build_router;
use huddle_meet::state::AppState;

pub const TEST_CODE_SECRET: &str = "S";
pub const TEST_APP_SECRET: &str = "test-app-secret-for-integration-tests";
pub const TEST_APP_ID: &str = "vpaas-magic-cookie-1234/abcd01";
pub const TEST_ADMIN_PASSWORD: &str = "let-me-in";

pub const TEST_RSA_PRIVATE_PEM: &str = include_str!("../fixtures/test_rsa_private.pem");
pub const TEST_RSA_PUBLIC_PEM: &str = include_str!("../fixtures/test_rsa_public.pem");

fn config(with_rsa: bool) -> MeetConfig {
    MeetConfig::from_lookup(|key| {
        let value = match key {
            "ACCESS_CODE_SECRET" => TEST_CODE_SECRET,
            "ADMIN_PASSWORD" => TEST_ADMIN_PASSWORD,
            "APP_ID" => TEST_APP_ID,
            "APP_SECRET" => TEST_APP_SECRET,
            "PRIVATE_KEY" if with_rsa => TEST_RSA_PRIVATE_PEM,
            _ => return None,
        };
        Some(value.to_owned())
    })
    .unwrap()
}

pub fn test_state() -> AppState {
    AppState::from_config(&config(false)).unwrap()
}

pub fn test_state_rs256() -> AppState {
    AppState::from_config(&config(true)).unwrap()
}

pub fn test_app() -> Router {
    build_router(test_state())
}

/// POST a JSON body and return status + parsed JSON response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

/// POST an arbitrary body. Every response from the service must be JSON; anything
/// else fails the test.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let resp = app.oneshot(builder.body(Body::from(body)).unwrap()).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        content_type,
        "application/json",
        "{uri} answered {status} with non-JSON body: {}",
        String::from_utf8_lossy(&bytes)
    );
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
