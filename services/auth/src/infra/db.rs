use std::sync::Arc;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, TransactionTrait,
    sea_query::Expr,
};
use uuid::Uuid;

use lms_auth_schema::{auth_codes, outbox_events, roles, users};

use crate::domain::repository::{AuthCodeRepository, RoleRepository};
use crate::domain::types::{AuthCode, OutboxEvent};
use crate::error::AuthServiceError;

// ── AuthCode repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthCodeRepository {
    pub db: Arc<DatabaseConnection>,
}

impl AuthCodeRepository for DbAuthCodeRepository {
    async fn create_with_outbox(
        &self,
        code: &AuthCode,
        event: &OutboxEvent,
    ) -> Result<(), AuthServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let code = code.clone();
                let event = event.clone();
                Box::pin(async move {
                    insert_auth_code(txn, &code).await?;
                    insert_outbox_event(txn, &event).await?;
                    Ok(())
                })
            })
            .await
            .context("create authcode with outbox")?;
        Ok(())
    }

    async fn find_valid(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<AuthCode>, AuthServiceError> {
        let now = Utc::now();
        let model = auth_codes::Entity::find()
            .filter(auth_codes::Column::Email.eq(email))
            .filter(auth_codes::Column::Code.eq(code))
            .filter(auth_codes::Column::Used.eq(false))
            .filter(auth_codes::Column::ExpiresAt.gt(now))
            .one(self.db.as_ref())
            .await
            .context("find valid authcode")?;
        Ok(model.map(authcode_from_model))
    }

    async fn consume(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let now = Utc::now();
        // Single conditional UPDATE: the row-level check-and-set is the only guard
        // against two verifications of one code both succeeding.
        let result = auth_codes::Entity::update_many()
            .col_expr(auth_codes::Column::Used, Expr::value(true))
            .filter(auth_codes::Column::Id.eq(id))
            .filter(auth_codes::Column::Used.eq(false))
            .filter(auth_codes::Column::ExpiresAt.gt(now))
            .exec(self.db.as_ref())
            .await
            .context("consume authcode")?;
        Ok(result.rows_affected == 1)
    }
}

async fn insert_auth_code(
    txn: &DatabaseTransaction,
    code: &AuthCode,
) -> Result<(), sea_orm::DbErr> {
    auth_codes::ActiveModel {
        id: Set(code.id),
        email: Set(code.email.clone()),
        code: Set(code.code.clone()),
        expires_at: Set(code.expires_at),
        used: Set(false),
        created_at: Set(code.created_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_outbox_event(
    txn: &DatabaseTransaction,
    event: &OutboxEvent,
) -> Result<(), sea_orm::DbErr> {
    let now = Utc::now();
    outbox_events::ActiveModel {
        id: Set(event.id),
        kind: Set(event.kind.clone()),
        payload: Set(event.payload.clone()),
        idempotency_key: Set(event.idempotency_key.clone()),
        attempts: Set(0),
        last_error: Set(None),
        created_at: Set(now),
        next_attempt_at: Set(now),
        processed_at: Set(None),
        failed_at: Set(None),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn authcode_from_model(model: auth_codes::Model) -> AuthCode {
    AuthCode {
        id: model.id,
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        used: model.used,
        created_at: model.created_at,
    }
}

// ── Role repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: Arc<DatabaseConnection>,
}

impl RoleRepository for DbRoleRepository {
    async fn find_role_by_email(&self, email: &str) -> Result<Option<String>, AuthServiceError> {
        // SELECT roles.name FROM users JOIN roles ON users.role_id = roles.id WHERE users.email = $1
        let name = users::Entity::find()
            .select_only()
            .column(roles::Column::Name)
            .join(JoinType::InnerJoin, users::Relation::Role.def())
            .filter(users::Column::Email.eq(email))
            .into_tuple::<String>()
            .one(self.db.as_ref())
            .await
            .context("find role by email")?;
        Ok(name)
    }
}
