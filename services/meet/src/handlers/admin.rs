use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::MeetServiceError;
use crate::handlers::json::AppJson;
use crate::state::AppState;

// ── POST /admin/check ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CheckAdminRequest {
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct CheckAdminResponse {
    pub valid: bool,
}

pub async fn check_admin(
    State(state): State<AppState>,
    AppJson(body): AppJson<CheckAdminRequest>,
) -> Result<Json<CheckAdminResponse>, MeetServiceError> {
    let password = body.password.ok_or(MeetServiceError::MissingField("password"))?;
    let valid = state.check_admin_usecase().execute(&password);
    Ok(Json(CheckAdminResponse { valid }))
}
