//! Task board HTTP server entry point.
//!
//! # Environment Variables
//!
//! - `STORAGE_MODE`: `in_memory` (default) | `postgres`
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when `STORAGE_MODE=postgres`)
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//! - `DEBUG_ERRORS`: `true|1|yes` exposes store-failure detail in responses
//! - `RUST_LOG`: Logging filter (e.g. `info`, `taskboard=debug`)

use std::process::ExitCode;
use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use taskboard::api::{self, AppState};
use taskboard::api::error::ErrorExposure;
use taskboard::config::{ServerConfig, StorageConfig};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::ports::TaskRepository;
use taskboard::task::services::TaskBoardService;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server terminated");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BoxedError> {
    let config = ServerConfig::from_env()?;
    tracing::info!(
        storage_mode = config.storage.mode_name(),
        address = %config.socket_addr(),
        "configuration loaded"
    );

    let repository = build_repository(&config.storage)?;
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    let state = AppState {
        service: TaskBoardService::new(repository, Arc::clone(&clock)),
        clock,
        exposure: if config.debug_errors {
            ErrorExposure::Verbose
        } else {
            ErrorExposure::Redacted
        },
    };

    let application = api::router(state);
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Builds the repository selected by configuration.
///
/// The returned handle is the process's single shared resource; dropping it
/// at the end of `run` releases the connection pool.
fn build_repository(storage: &StorageConfig) -> Result<Arc<dyn TaskRepository>, BoxedError> {
    match storage {
        StorageConfig::InMemory => Ok(Arc::new(InMemoryTaskRepository::new())),
        StorageConfig::Postgres { database_url } => {
            let manager = ConnectionManager::<PgConnection>::new(database_url);
            let pool = Pool::builder().build(manager)?;
            Ok(Arc::new(PostgresTaskRepository::new(pool)))
        }
    }
}

/// Completes when a shutdown signal is received.
///
/// Listens for SIGINT on every platform and additionally SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(error) => {
                tracing::warn!(%error, "failed to install Ctrl+C handler");
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}
