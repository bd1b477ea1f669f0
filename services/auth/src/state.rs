use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAuthCodeRepository, DbRoleRepository};

/// Shared application state passed to every handler via axum `State`.
///
/// `DatabaseConnection` is not `Clone` under sea-orm's `mock` feature, hence the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub session_secret: String,
    pub cookie_domain: Option<String>,
}

impl AppState {
    pub fn auth_code_repo(&self) -> DbAuthCodeRepository {
        DbAuthCodeRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: Arc::clone(&self.db),
        }
    }
}
