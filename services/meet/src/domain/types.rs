use serde::{Deserialize, Serialize};

/// Audience expected by the meeting server.
pub const TOKEN_AUDIENCE: &str = "jitsi";

/// Issuer written into every session token.
pub const TOKEN_ISSUER: &str = "chat";

/// Session token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// Backdating of `nbf` to absorb clock skew between issuer and meeting server.
pub const TOKEN_NBF_SKEW_SECS: i64 = 5;

/// Room claim used when the caller names no room (any room).
pub const ANY_ROOM: &str = "*";

/// Display name used when the caller gives none.
pub const GUEST_NAME: &str = "Guest";

/// Claims document of a meeting session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub aud: String,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub room: String,
    pub context: ClaimsContext,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsContext {
    pub features: FeatureFlags,
    pub user: ClaimsUser,
}

/// Meeting features unlocked for the participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeatureFlags {
    pub livestreaming: bool,
    pub outbound_call: bool,
    pub sip_outbound_call: bool,
    pub transcription: bool,
    pub recording: bool,
}

impl FeatureFlags {
    /// Moderators may stream and record; everybody may dial out and transcribe.
    pub fn for_participant(moderator: bool) -> Self {
        Self {
            livestreaming: moderator,
            outbound_call: true,
            sip_outbound_call: false,
            transcription: true,
            recording: moderator,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClaimsUser {
    pub hidden_from_recorder: bool,
    pub moderator: bool,
    pub name: String,
    pub id: String,
    pub avatar: String,
    pub email: String,
}
