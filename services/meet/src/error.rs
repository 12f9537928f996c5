use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use huddle_access_code::AccessCodeError;

/// Meet service error variants.
///
/// A rejected access code is not an error; it is a `200` with `valid: false`.
#[derive(Debug, thiserror::Error)]
pub enum MeetServiceError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid meeting time")]
    InvalidMeetingTime,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MeetServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidMeetingTime => "INVALID_MEETING_TIME",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<AccessCodeError> for MeetServiceError {
    fn from(err: AccessCodeError) -> Self {
        match err {
            AccessCodeError::InvalidMeetingTime => Self::InvalidMeetingTime,
            // format errors are reported as `valid: false` by the resolver, never raised
            AccessCodeError::InvalidFormat => Self::Internal(err.into()),
        }
    }
}

impl From<JsonRejection> for MeetServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for MeetServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingField(_) | Self::InvalidMeetingTime | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors and already visible in the TraceLayer span.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Reject absent or blank request fields.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, MeetServiceError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(MeetServiceError::MissingField(field))
}
