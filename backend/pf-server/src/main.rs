use pf_access::AccessLayer;
use pf_auth::{HashParams, PasswordHasher, TokenService};
use pf_config::{Config, ConfigError};
use pf_db::TableStore;
use pf_server::{AppState, build_router, error::Result as ServerErrorResult, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting pf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app_state = build_app_state(&config).await?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Open the database and wire the access layer from configuration
async fn build_app_state(config: &Config) -> ServerErrorResult<AppState> {
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = pf_db::connect(&database_path).await?;

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;
    let tokens = TokenService::new(
        secret.as_bytes(),
        config.auth.issuer.clone(),
        config.auth.token_ttl_secs,
    );
    let hasher = PasswordHasher::new(HashParams {
        memory_kib: config.auth.hash_memory_kib,
        iterations: config.auth.hash_iterations,
        parallelism: config.auth.hash_parallelism,
    })?;

    let upload_dir = config.upload_dir()?;
    info!("Serving uploads from {}", upload_dir.display());

    Ok(AppState {
        access: AccessLayer::new(TableStore::new(pool), tokens, hasher),
        upload_dir,
        max_upload_bytes: config.upload.max_bytes,
    })
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Server will run until killed");
            std::future::pending::<()>().await;
        }
    }
}
