use anyhow::{Context, bail};

/// How issued session tokens are signed.
#[derive(Debug, Clone)]
pub enum SigningKey {
    /// PEM-encoded RSA private key; tokens are RS256 with `kid = APP_ID`.
    RsaPem(String),
    /// Shared HMAC secret; tokens are HS256.
    Secret(String),
}

/// Meet service configuration, read once from the environment at start-up.
#[derive(Debug)]
pub struct MeetConfig {
    /// Secret folded into every access-code seed. Env var: `ACCESS_CODE_SECRET`.
    pub access_code_secret: String,
    /// Password accepted by `POST /admin/check`. Env var: `ADMIN_PASSWORD`.
    pub admin_password: String,
    /// Application identifier, `<sub>/<key id>`. Env var: `APP_ID`.
    pub app_id: String,
    /// `PRIVATE_KEY` (RS256) when set, otherwise `APP_SECRET` (HS256).
    pub signing_key: SigningKey,
    /// Case-insensitive name fragment that grants moderator rights (default "host").
    /// Env var: `MODERATOR_MARKER`.
    pub moderator_marker: String,
    /// TCP port to listen on (default 3000). Env var: `MEET_PORT`.
    pub meet_port: u16,
}

impl MeetConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).with_context(|| format!("{key} must be set"));

        let signing_key = match (get("PRIVATE_KEY"), get("APP_SECRET")) {
            // PEMs pasted into env files often carry literal "\n"
            (Some(pem), _) => SigningKey::RsaPem(pem.replace("\\n", "\n")),
            (None, Some(secret)) => SigningKey::Secret(secret),
            (None, None) => bail!("either PRIVATE_KEY or APP_SECRET must be set"),
        };

        let meet_port = match get("MEET_PORT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("MEET_PORT is not a valid port: {v}"))?,
            None => 3000,
        };

        Ok(Self {
            access_code_secret: require("ACCESS_CODE_SECRET")?,
            admin_password: require("ADMIN_PASSWORD")?,
            app_id: require("APP_ID")?,
            signing_key,
            moderator_marker: get("MODERATOR_MARKER").unwrap_or_else(|| "host".to_owned()),
            meet_port,
        })
    }
}
