//! Caller identity resolution from request headers.

use axum_extra::extract::cookie::CookieJar;
use http::HeaderMap;
use http::header::AUTHORIZATION;

use crate::cookie::LMS_SESSION;
use crate::token::validate_session_token;

/// Caller identity proven by a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub email: String,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the caller from an `Authorization: Bearer` token, falling back to the
/// session cookie.
///
/// Returns `None` when no token is present or the token fails validation; the
/// caller cannot tell these apart.
pub fn session_identity(headers: &HeaderMap, secret: &str) -> Option<SessionIdentity> {
    let token = match bearer_token(headers) {
        Some(token) => token.to_owned(),
        None => CookieJar::from_headers(headers)
            .get(LMS_SESSION)
            .map(|c| c.value().to_owned())?,
    };
    validate_session_token(&token, secret)
        .ok()
        .map(|claims| SessionIdentity { email: claims.sub })
}
