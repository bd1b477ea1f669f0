/// Default PostgreSQL URL for local development.
const DEFAULT_DATABASE_URL: &str = "postgresql://postgres@localhost/lms";

/// Default HTTP port.
const DEFAULT_AUTH_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for env var {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing session tokens. Env var: `SESSION_SECRET`.
    pub session_secret: String,
    /// Cookie domain attribute; host-only cookie when unset. Env var: `COOKIE_DOMAIN`.
    pub cookie_domain: Option<String>,
    /// TCP port to listen on (default 8000). Env var: `AUTH_PORT`.
    pub auth_port: u16,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let auth_port = match get("AUTH_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "AUTH_PORT",
                value,
            })?,
            None => DEFAULT_AUTH_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            session_secret: get("SESSION_SECRET").ok_or(ConfigError::Missing("SESSION_SECRET"))?,
            cookie_domain: get("COOKIE_DOMAIN"),
            auth_port,
        })
    }
}
