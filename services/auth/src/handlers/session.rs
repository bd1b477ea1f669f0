use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use lms_auth_types::{cookie::clear_session_cookie, identity::session_identity};

use crate::domain::repository::RoleRepository;
use crate::error::AuthServiceError;
use crate::state::AppState;

// ── GET /auth/session ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SessionResponse {
    pub email: String,
    pub role: Option<String>,
}

pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AuthServiceError> {
    let identity = session_identity(&headers, &state.session_secret)
        .ok_or(AuthServiceError::MissingIdentity)?;
    let role = state.role_repo().find_role_by_email(&identity.email).await?;
    Ok(Json(SessionResponse {
        email: identity.email,
        role,
    }))
}

// ── DELETE /auth/session ──────────────────────────────────────────────────────

/// Stateless tokens: logging out only drops the cookie.
pub async fn delete_session(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}
