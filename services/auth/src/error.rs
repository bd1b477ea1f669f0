use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service error variants.
///
/// A wrong, already used, or expired code all map to `InvalidOrExpired`; callers
/// must not be able to tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid or expired code")]
    InvalidOrExpired,
    #[error("missing identity")]
    MissingIdentity,
    #[error("insufficient role")]
    InsufficientRole,
    #[error("invalid email")]
    InvalidEmail,
    #[error("store unavailable")]
    StoreUnavailable(#[from] anyhow::Error),
    #[error("internal error")]
    Internal(#[source] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidOrExpired => "INVALID_OR_EXPIRED",
            Self::MissingIdentity => "MISSING_IDENTITY",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidOrExpired | Self::MissingIdentity => StatusCode::UNAUTHORIZED,
            Self::InsufficientRole => StatusCode::FORBIDDEN,
            Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client outcomes and already logged where they are decided.
        match &self {
            Self::StoreUnavailable(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = self.kind(), "store unavailable");
            }
            Self::Internal(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = self.kind(), "internal error");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
