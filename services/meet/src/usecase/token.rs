use chrono::{DateTime, Utc};
use rand::RngExt;

use crate::domain::port::ClaimsSigner;
use crate::domain::types::{
    ANY_ROOM, ClaimsContext, ClaimsUser, FeatureFlags, GUEST_NAME, SessionClaims,
    TOKEN_AUDIENCE, TOKEN_ISSUER, TOKEN_NBF_SKEW_SECS, TOKEN_TTL_SECS,
};
use crate::error::MeetServiceError;

const HEX: &[u8] = b"0123456789abcdef";

/// Participant id length in hex characters (12 random bytes).
const PARTICIPANT_ID_HEX_LEN: usize = 24;

fn participant_id() -> String {
    let mut rng = rand::rng();
    let hex: String = (0..PARTICIPANT_ID_HEX_LEN)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect();
    format!("auth0|{hex}")
}

/// `sub` is the tenant part of the application id, before the first `/`.
pub fn subject_from_app_id(app_id: &str) -> &str {
    app_id.split_once('/').map_or(app_id, |(tenant, _)| tenant)
}

/// Moderator rights by case-insensitive name match against the configured marker.
///
/// This is an authorization rule owned by the deployment, not by the access-code
/// scheme. An empty marker grants nobody.
pub fn is_moderator(name: Option<&str>, marker: &str) -> bool {
    match name {
        Some(name) if !marker.is_empty() => {
            name.to_lowercase().contains(&marker.to_lowercase())
        }
        _ => false,
    }
}

pub struct IssueTokenInput {
    pub name: Option<String>,
    pub room: Option<String>,
    pub email: Option<String>,
}

pub struct IssueTokenUseCase<S: ClaimsSigner> {
    pub signer: S,
    pub app_id: String,
    pub moderator_marker: String,
}

impl<S: ClaimsSigner> IssueTokenUseCase<S> {
    pub fn build_claims(&self, input: IssueTokenInput, now: DateTime<Utc>) -> SessionClaims {
        let moderator = is_moderator(input.name.as_deref(), &self.moderator_marker);
        let iat = now.timestamp();
        let name = input
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| GUEST_NAME.to_owned());

        SessionClaims {
            aud: TOKEN_AUDIENCE.to_owned(),
            iss: TOKEN_ISSUER.to_owned(),
            sub: subject_from_app_id(&self.app_id).to_owned(),
            iat,
            nbf: iat - TOKEN_NBF_SKEW_SECS,
            exp: iat + TOKEN_TTL_SECS,
            room: input
                .room
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| ANY_ROOM.to_owned()),
            context: ClaimsContext {
                features: FeatureFlags::for_participant(moderator),
                user: ClaimsUser {
                    hidden_from_recorder: false,
                    moderator,
                    name,
                    id: participant_id(),
                    avatar: String::new(),
                    email: input.email.unwrap_or_default(),
                },
            },
        }
    }

    pub fn execute(
        &self,
        input: IssueTokenInput,
        now: DateTime<Utc>,
    ) -> Result<String, MeetServiceError> {
        let claims = self.build_claims(input, now);
        let token = self.signer.sign(&claims)?;
        tracing::info!(
            room = %claims.room,
            moderator = claims.context.user.moderator,
            "session token issued"
        );
        Ok(token)
    }
}
