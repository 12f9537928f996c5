use axum::extract::FromRequest;

use crate::error::MeetServiceError;

/// `axum::Json` whose rejections (bad syntax, wrong content type, mistyped fields)
/// render as [`MeetServiceError::InvalidBody`] instead of axum's plain-text 4xx.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(MeetServiceError))]
pub struct AppJson<T>(pub T);
