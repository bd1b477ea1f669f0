use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /health`, the liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
