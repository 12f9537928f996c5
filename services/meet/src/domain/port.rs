use crate::domain::types::SessionClaims;
use crate::error::MeetServiceError;

/// Signs a claims document into a compact token.
///
/// The signing primitive is treated as trusted; the service only decides what goes
/// into the claims.
pub trait ClaimsSigner: Send + Sync {
    fn sign(&self, claims: &SessionClaims) -> Result<String, MeetServiceError>;
}
