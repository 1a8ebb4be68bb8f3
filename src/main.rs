//! Notes server: session-authenticated notes API with share links.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use notes_auth::session::SessionCleanup;
use notes_core::config::AppConfig;
use notes_core::error::AppError;
use notes_core::traits::{Clock, SystemClock};
use notes_database::repositories::SessionRepository;
use notes_database::{DatabasePool, migration};
use notes_service::BootstrapOutcome;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `NOTES_CONFIG_DIR` and the environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let dir = std::env::var("NOTES_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("NOTES_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting notes server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(db.pool()).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // ── Step 2: Background session cleanup ───────────────────────
    let cleanup_handle = if config.session.cleanup_interval_minutes > 0 {
        let interval =
            std::time::Duration::from_secs(config.session.cleanup_interval_minutes * 60);
        let cleanup = SessionCleanup::new(
            Arc::new(SessionRepository::new(db.pool().clone())),
            Arc::clone(&clock),
        );
        tracing::info!(
            interval_minutes = config.session.cleanup_interval_minutes,
            "Expired session cleanup enabled"
        );
        Some(cleanup.spawn(interval))
    } else {
        None
    };

    // ── Step 3: State, bootstrap admin, router ───────────────────
    let addr = config.server.listen_address();
    let admin_email = config.admin.email.clone();
    let admin_password = config.admin.password.clone();

    let state = notes_api::build_state(config, db.clone(), clock);

    match state
        .admin_service
        .bootstrap_admin(&admin_email, &admin_password)
        .await?
    {
        BootstrapOutcome::Skipped => tracing::debug!("No bootstrap admin configured"),
        BootstrapOutcome::Promoted(id) => {
            tracing::info!(user_id = id, "Bootstrap admin promoted existing user")
        }
        BootstrapOutcome::Created(id) => tracing::info!(user_id = id, "Bootstrap admin created"),
    }

    let app = notes_api::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Notes server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(handle) = cleanup_handle {
        handle.abort();
    }
    db.close().await;

    tracing::info!("Notes server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
