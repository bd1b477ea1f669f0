use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-time login code bound to an email address.
#[derive(Debug, Clone)]
pub struct AuthCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl AuthCode {
    /// Unused and not yet expired at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.used && self.expires_at > now
    }
}

/// Outbox event for async delivery (e.g. the login-code email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEvent {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
}

/// Caller admitted by the role gate; inserted into request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedCaller {
    pub email: String,
    pub role: String,
}

/// Auth code length in digits.
pub const AUTHCODE_LEN: usize = 6;

/// Auth code time-to-live in seconds (10 minutes).
pub const AUTHCODE_TTL_SECS: i64 = 600;

/// Outbox event kind written for every issued code.
pub const AUTHCODE_ISSUED_EVENT: &str = "authcode_issued";

/// Role required by the admin-only routes.
pub const ADMIN_ROLE: &str = "admin";
