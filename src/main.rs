use anyhow::Result;
use axum::{ServiceExt, extract::Request};
use dealership_api::{
    config, db,
    policy::{self, AdminGate},
    routes,
    session::SessionProvider,
    state::AppState,
};
use std::io::ErrorKind;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // --- Parse config + migrate flag ---
    let (cfg, migrate_only) = config::AppConfig::from_env_and_args()?;

    tracing::info!("Starting dealership-api with config: {:?}", cfg);

    // --- Initialize SQLite pool and schema ---
    let pool = db::connect(&cfg.database_url, &cfg.pool_settings()).await?;
    db::migrate(&pool).await?;

    if migrate_only {
        return Ok(()); // exit after migration
    }

    // --- Build router ---
    let state = AppState::new(
        SessionProvider::new(pool),
        AdminGate::new(cfg.admin_token.as_str()),
    );
    let app = routes::routes::app(state, policy::cors_layer(&cfg.cors_origins)?);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
