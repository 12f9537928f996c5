use axum::{
    Router,
    routing::{get, post},
};

use huddle_core::health::{healthz, readyz};
use huddle_core::middleware::with_request_tracing;

use crate::handlers::{
    access_code::{generate_code, validate_code},
    admin::check_admin,
    token::issue_token,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Access codes
        .route("/generate-code", post(generate_code))
        .route("/validate-code", post(validate_code))
        // Session token
        .route("/token", post(issue_token))
        // Admin
        .route("/admin/check", post(check_admin))
        .with_state(state);
    with_request_tracing(router)
}
