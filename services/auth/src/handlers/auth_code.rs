use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use lms_auth_types::{cookie::set_session_cookie, token::issue_session_token};

use crate::domain::email::Email;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::authcode::{
    IssueAuthcodeInput, IssueAuthcodeUseCase, VerifyAuthcodeInput, VerifyAuthcodeUseCase,
};

// ── POST /auth/request_code ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RequestCodeRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct RequestCodeResponse {
    pub message: &'static str,
}

/// The code itself travels through the outbox to the mailer, never in this response.
pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let email = Email::parse(&body.email)?;

    let usecase = IssueAuthcodeUseCase {
        auth_codes: state.auth_code_repo(),
    };
    usecase
        .execute(IssueAuthcodeInput {
            email: email.into_inner(),
        })
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(RequestCodeResponse {
            message: "auth code sent",
        }),
    ))
}

// ── POST /auth/verify_code ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct VerifyCodeResponse {
    pub email: String,
}

pub async fn verify_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let email = Email::parse(&body.email)?;

    // Sign first: a signing failure must not burn the one-time code.
    let (token, _exp) = issue_session_token(email.as_str(), &state.session_secret)
        .map_err(|e| AuthServiceError::Internal(e.into()))?;

    let usecase = VerifyAuthcodeUseCase {
        auth_codes: state.auth_code_repo(),
    };
    let login = usecase
        .execute(VerifyAuthcodeInput {
            email: email.into_inner(),
            code: body.code,
        })
        .await?;

    let jar = set_session_cookie(jar, token, state.cookie_domain.clone());

    Ok((
        StatusCode::OK,
        jar,
        Json(VerifyCodeResponse { email: login.email }),
    ))
}
