use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use huddle_access_code::{RejectReason, Resolution};

use crate::error::{MeetServiceError, required};
use crate::handlers::json::AppJson;
use crate::state::AppState;
use crate::usecase::access_code::{GenerateCodeInput, ValidateCodeInput};

// ── POST /generate-code ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeRequest {
    pub client_name: Option<String>,
    pub meeting_date_time: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeResponse {
    pub code: String,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub window_start: DateTime<Utc>,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub window_end: DateTime<Utc>,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub meeting_start: DateTime<Utc>,
    pub encoded_timestamp: String,
}

pub async fn generate_code(
    State(state): State<AppState>,
    AppJson(body): AppJson<GenerateCodeRequest>,
) -> Result<Json<GenerateCodeResponse>, MeetServiceError> {
    let input = GenerateCodeInput {
        client_name: required(body.client_name, "clientName")?,
        meeting_date_time: required(body.meeting_date_time, "meetingDateTime")?,
    };
    let out = state.generate_code_usecase().execute(input)?;
    Ok(Json(GenerateCodeResponse {
        encoded_timestamp: out.encoded_timestamp(),
        code: out.code.to_string(),
        window_start: out.window.start,
        window_end: out.window.end,
        meeting_start: out.meeting_start,
    }))
}

// ── POST /validate-code ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCodeRequest {
    /// Kept loose so a number or array is a rejected code rather than a bad body.
    pub code: Option<serde_json::Value>,
    pub client_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCodeResponse {
    pub valid: bool,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "huddle_core::serde::opt_to_rfc3339_ms"
    )]
    pub meeting_start: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "huddle_core::serde::opt_to_rfc3339_ms"
    )]
    pub window_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

impl From<Resolution> for ValidateCodeResponse {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Valid {
                meeting_start,
                window,
            } => Self {
                valid: true,
                meeting_start: Some(meeting_start),
                window_end: Some(window.end),
                reason: None,
            },
            Resolution::Invalid(reason) => Self {
                valid: false,
                meeting_start: None,
                window_end: None,
                reason: Some(reason),
            },
        }
    }
}

pub async fn validate_code(
    State(state): State<AppState>,
    AppJson(body): AppJson<ValidateCodeRequest>,
) -> Result<Json<ValidateCodeResponse>, MeetServiceError> {
    // an empty string is still a code (and an invalid one); only absence or null is a 400
    let code = match body.code {
        None => return Err(MeetServiceError::MissingField("code")),
        Some(serde_json::Value::String(code)) => code,
        Some(_) => {
            tracing::info!(reason = ?RejectReason::InvalidFormat, "non-string access code rejected");
            return Ok(Json(Resolution::Invalid(RejectReason::InvalidFormat).into()));
        }
    };
    let resolution = state.validate_code_usecase().execute(
        ValidateCodeInput {
            code,
            client_name: body.client_name,
        },
        Utc::now(),
    );
    Ok(Json(resolution.into()))
}
