use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use lms_core::health::health;
use lms_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::domain::types::ADMIN_ROLE;
use crate::handlers::{
    admin::admin_protected,
    auth_code::{request_code, verify_code},
    health::readyz,
    session::{delete_session, get_session},
};
use crate::middleware::{RoleGuard, require_role};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Admin-only routes
    let admin = Router::new()
        .route("/admin/protected", get(admin_protected))
        .route_layer(middleware::from_fn_with_state(
            RoleGuard::new(state.clone(), ADMIN_ROLE),
            require_role,
        ));

    Router::new()
        // Health
        .route("/health", get(health))
        .route("/readyz", get(readyz))
        // Login codes
        .route("/auth/request_code", post(request_code))
        .route("/auth/verify_code", post(verify_code))
        // Session
        .route("/auth/session", get(get_session).delete(delete_session))
        .merge(admin)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
}
