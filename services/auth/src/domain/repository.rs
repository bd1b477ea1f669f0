#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{AuthCode, OutboxEvent};
use crate::error::AuthServiceError;

/// Repository for one-time auth codes.
pub trait AuthCodeRepository: Send + Sync {
    /// Insert a new auth code and its delivery outbox event atomically (same transaction).
    async fn create_with_outbox(
        &self,
        code: &AuthCode,
        event: &OutboxEvent,
    ) -> Result<(), AuthServiceError>;

    /// Find any valid (unused, unexpired) code matching email + code string.
    async fn find_valid(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<AuthCode>, AuthServiceError>;

    /// Mark the code with this id used, only if it is still unused and unexpired.
    ///
    /// Returns `true` when this call flipped the flag. Concurrent callers for the
    /// same id see exactly one `true`.
    async fn consume(&self, id: Uuid) -> Result<bool, AuthServiceError>;
}

/// Read-only lookup of a user's role.
pub trait RoleRepository: Send + Sync {
    /// Role name of the user with this email. `None` when there is no such user
    /// or the user has no role.
    async fn find_role_by_email(&self, email: &str) -> Result<Option<String>, AuthServiceError>;
}
