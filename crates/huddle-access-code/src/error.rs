/// Errors raised while parsing access-code inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessCodeError {
    #[error("invalid meeting time")]
    InvalidMeetingTime,
    #[error("access code must be exactly 8 digits")]
    InvalidFormat,
}
