use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::MeetServiceError;
use crate::handlers::json::AppJson;
use crate::state::AppState;
use crate::usecase::token::IssueTokenInput;

// ── POST /token ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IssueTokenRequest {
    pub name: Option<String>,
    pub room: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct IssueTokenResponse {
    pub token: String,
}

pub async fn issue_token(
    State(state): State<AppState>,
    AppJson(body): AppJson<IssueTokenRequest>,
) -> Result<Json<IssueTokenResponse>, MeetServiceError> {
    let token = state.issue_token_usecase().execute(
        IssueTokenInput {
            name: body.name,
            room: body.room,
            email: body.email,
        },
        Utc::now(),
    )?;
    Ok(Json(IssueTokenResponse { token }))
}
