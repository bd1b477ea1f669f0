//! Role gate middleware for guarded routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use lms_auth_types::identity::session_identity;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::role_gate::AuthorizeUseCase;

/// Middleware state: app state plus the role the guarded routes require.
#[derive(Clone)]
pub struct RoleGuard {
    pub state: AppState,
    pub required_role: &'static str,
}

impl RoleGuard {
    pub fn new(state: AppState, required_role: &'static str) -> Self {
        Self {
            state,
            required_role,
        }
    }
}

/// Resolve the caller from the session token, run the role gate, and on admit
/// expose the [`AuthorizedCaller`](crate::domain::types::AuthorizedCaller) to the handler
/// through request extensions.
///
/// Apply with `route_layer(middleware::from_fn_with_state(RoleGuard::new(..), require_role))`.
pub async fn require_role(
    State(guard): State<RoleGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthServiceError> {
    let identity = session_identity(req.headers(), &guard.state.session_secret);

    let usecase = AuthorizeUseCase {
        roles: guard.state.role_repo(),
    };
    let caller = usecase
        .execute(
            identity.as_ref().map(|i| i.email.as_str()),
            guard.required_role,
        )
        .await?;

    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
