//! Cookie builders for the session token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::SESSION_TOKEN_EXP;

/// Cookie name for the session token.
pub const LMS_SESSION: &str = "lms_session";

fn session_cookie(value: String, max_age: Duration, domain: Option<String>) -> Cookie<'static> {
    let mut builder = Cookie::build((LMS_SESSION, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax);
    if let Some(domain) = domain {
        builder = builder.domain(domain);
    }
    builder.build()
}

/// Set the session cookie on the jar. Without a domain the cookie is host-only.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use lms_auth_types::cookie::{set_session_cookie, LMS_SESSION};
///
/// let jar = set_session_cookie(CookieJar::new(), "token".to_string(), Some("example.com".to_string()));
/// let cookie = jar.get(LMS_SESSION).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(14400)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String, domain: Option<String>) -> CookieJar {
    jar.add(session_cookie(
        value,
        Duration::seconds(SESSION_TOKEN_EXP as i64),
        domain,
    ))
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use lms_auth_types::cookie::{clear_session_cookie, set_session_cookie, LMS_SESSION};
///
/// let jar = set_session_cookie(CookieJar::new(), "token".to_string(), None);
/// let jar = clear_session_cookie(jar, None);
/// let cookie = jar.get(LMS_SESSION).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, domain: Option<String>) -> CookieJar {
    jar.add(session_cookie(String::new(), Duration::ZERO, domain))
}
