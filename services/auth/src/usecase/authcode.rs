use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::repository::AuthCodeRepository;
use crate::domain::types::{
    AUTHCODE_ISSUED_EVENT, AUTHCODE_LEN, AUTHCODE_TTL_SECS, AuthCode, OutboxEvent,
};
use crate::error::AuthServiceError;

/// Charset for generating auth codes (decimal digits).
const CHARSET: &[u8] = b"0123456789";

/// `rand::rng()` is the thread-local CSPRNG, reseeded from the OS.
fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..AUTHCODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── IssueAuthcode ─────────────────────────────────────────────────────────────

pub struct IssueAuthcodeInput {
    pub email: String,
}

/// Freshly issued code. Goes to the delivery outbox, never to the HTTP client.
#[derive(Debug)]
pub struct IssuedAuthcode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

pub struct IssueAuthcodeUseCase<A: AuthCodeRepository> {
    pub auth_codes: A,
}

impl<A: AuthCodeRepository> IssueAuthcodeUseCase<A> {
    pub async fn execute(
        &self,
        input: IssueAuthcodeInput,
    ) -> Result<IssuedAuthcode, AuthServiceError> {
        let now = Utc::now();
        let code = AuthCode {
            id: Uuid::new_v4(),
            email: input.email,
            code: generate_code(),
            expires_at: now + Duration::seconds(AUTHCODE_TTL_SECS),
            used: false,
            created_at: now,
        };

        // Code row and delivery event commit together.
        let event = OutboxEvent {
            id: Uuid::new_v4(),
            kind: AUTHCODE_ISSUED_EVENT.to_owned(),
            payload: json!({
                "email": code.email,
                "code": code.code,
                "expires_at": code.expires_at,
            }),
            idempotency_key: format!("{AUTHCODE_ISSUED_EVENT}:{}", code.id),
        };

        self.auth_codes.create_with_outbox(&code, &event).await?;
        info!(email = %code.email, expires_at = %code.expires_at, "auth code issued");

        Ok(IssuedAuthcode {
            code: code.code,
            expires_at: code.expires_at,
        })
    }
}

// ── VerifyAuthcode ────────────────────────────────────────────────────────────

pub struct VerifyAuthcodeInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct VerifiedLogin {
    pub email: String,
}

pub struct VerifyAuthcodeUseCase<A: AuthCodeRepository> {
    pub auth_codes: A,
}

impl<A: AuthCodeRepository> VerifyAuthcodeUseCase<A> {
    pub async fn execute(
        &self,
        input: VerifyAuthcodeInput,
    ) -> Result<VerifiedLogin, AuthServiceError> {
        let Some(found) = self
            .auth_codes
            .find_valid(&input.email, &input.code)
            .await?
        else {
            warn!(email = %input.email, "failed login attempt");
            return Err(AuthServiceError::InvalidOrExpired);
        };

        // Consume by row id; losing a race to a concurrent verify reads as an invalid code.
        if !self.auth_codes.consume(found.id).await? {
            warn!(email = %input.email, "failed login attempt: code consumed concurrently");
            return Err(AuthServiceError::InvalidOrExpired);
        }

        info!(email = %input.email, "login succeeded");
        Ok(VerifiedLogin { email: input.email })
    }
}
