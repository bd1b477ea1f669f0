use axum::{Extension, Json};
use serde_json::{Value, json};

use crate::domain::types::AuthorizedCaller;

/// `GET /admin/protected`, behind the `admin` role gate.
pub async fn admin_protected(Extension(caller): Extension<AuthorizedCaller>) -> Json<Value> {
    Json(json!({
        "message": "You have admin access.",
        "email": caller.email,
    }))
}
