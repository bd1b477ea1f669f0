use std::sync::Arc;

use sea_orm::Database;
use tracing::{error, info};

use lms_auth::config::AuthConfig;
use lms_auth::router::build_router;
use lms_auth::state::AppState;
use lms_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AuthConfig::from_env().inspect_err(|e| error!(error = %e, "invalid config"))?;

    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .inspect_err(|e| error!(error = %e, "failed to connect to database"))?,
    );
    info!("database connection pool created");

    let state = AppState {
        db: Arc::clone(&db),
        session_secret: config.session_secret,
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("auth service listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close_by_ref().await?;
    info!("database connection pool closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
