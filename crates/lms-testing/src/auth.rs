//! Session helpers for integration tests.
//!
//! Guarded routes resolve the caller from a signed session token. `MockSession`
//! signs one with the test secret so requests can present an identity without
//! going through the email-code login flow.

use http::header::{AUTHORIZATION, COOKIE};
use http::{HeaderMap, HeaderValue};

use lms_auth_types::cookie::LMS_SESSION;
use lms_auth_types::token::issue_session_token;

/// Configurable identity presented by test requests.
pub struct MockSession {
    pub email: String,
}

impl MockSession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Signed session token for this identity.
    pub fn token(&self, secret: &str) -> String {
        issue_session_token(&self.email, secret)
            .expect("sign test session token")
            .0
    }

    /// `Authorization: Bearer` header map.
    pub fn bearer_headers(&self, secret: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token(secret))).unwrap(),
        );
        map
    }

    /// `Cookie` header map carrying the session cookie.
    pub fn cookie_headers(&self, secret: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{LMS_SESSION}={}", self.token(secret))).unwrap(),
        );
        map
    }
}
