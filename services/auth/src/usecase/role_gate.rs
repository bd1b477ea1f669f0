use tracing::{info, warn};

use crate::domain::repository::RoleRepository;
use crate::domain::types::AuthorizedCaller;
use crate::error::AuthServiceError;

/// Admits a caller whose role name equals the required one exactly.
///
/// Roles form no hierarchy: "admin" does not satisfy a requirement of "instructor".
pub struct AuthorizeUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> AuthorizeUseCase<R> {
    pub async fn execute(
        &self,
        identity: Option<&str>,
        required_role: &str,
    ) -> Result<AuthorizedCaller, AuthServiceError> {
        let Some(email) = identity else {
            warn!(required_role, "role check without identity");
            return Err(AuthServiceError::MissingIdentity);
        };

        // Store errors propagate as StoreUnavailable, never as a role mismatch.
        let role = self.roles.find_role_by_email(email).await?;

        match role {
            Some(role) if role == required_role => {
                info!(email, role = %role, "role check passed");
                Ok(AuthorizedCaller {
                    email: email.to_owned(),
                    role,
                })
            }
            other => {
                warn!(
                    email,
                    role = other.as_deref().unwrap_or("none"),
                    required_role,
                    "insufficient role"
                );
                Err(AuthServiceError::InsufficientRole)
            }
        }
    }
}
