use anyhow::Context;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use crate::config::SigningKey;
use crate::domain::port::ClaimsSigner;
use crate::domain::types::SessionClaims;
use crate::error::MeetServiceError;

/// [`ClaimsSigner`] backed by `jsonwebtoken`.
#[derive(Clone)]
pub struct JwtSigner {
    header: Header,
    key: EncodingKey,
}

impl JwtSigner {
    /// RS256 with `kid` set to the full application id.
    pub fn rs256(pem: &str, kid: &str) -> anyhow::Result<Self> {
        let key = EncodingKey::from_rsa_pem(pem.as_bytes()).context("invalid RSA private key")?;
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_owned());
        Ok(Self { header, key })
    }

    pub fn hs256(secret: &str) -> Self {
        Self {
            header: Header::new(Algorithm::HS256),
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn from_config(signing_key: &SigningKey, app_id: &str) -> anyhow::Result<Self> {
        match signing_key {
            SigningKey::RsaPem(pem) => Self::rs256(pem, app_id),
            SigningKey::Secret(secret) => Ok(Self::hs256(secret)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.header.alg
    }
}

impl ClaimsSigner for JwtSigner {
    fn sign(&self, claims: &SessionClaims) -> Result<String, MeetServiceError> {
        encode(&self.header, claims, &self.key)
            .map_err(|e| MeetServiceError::Internal(anyhow::Error::new(e).context("JWT signing failed")))
    }
}
