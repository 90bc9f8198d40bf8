use std::process::ExitCode;

use dotenvy::dotenv;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use roster::config::{ConfigError, ServerConfig};
use roster::database::{catalog, ActivityDirectory, CatalogError};
use roster::web;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "roster_startup_failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let activities = match &config.catalog_path {
        Some(path) => catalog::load_catalog(path)?,
        None => catalog::seed_catalog(),
    };
    let directory =
        ActivityDirectory::new(activities).with_capacity_enforcement(config.enforce_capacity);
    info!(
        activities = directory.activity_count(),
        enforce_capacity = directory.enforces_capacity(),
        static_dir = %config.static_dir.display(),
        "roster_directory_seeded"
    );

    let app = web::build_router(directory, &config.static_dir);
    let listener = bind_with_fallback(&config.host, config.port).await?;

    info!(
        addr = %listener.local_addr()?,
        build_id = env!("ROSTER_BUILD_ID"),
        "roster_listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

// Tries `port`, then `port + 1` once.
async fn bind_with_fallback(host: &str, port: u16) -> std::io::Result<TcpListener> {
    match TcpListener::bind((host, port)).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let Some(fallback) = port.checked_add(1) else {
                return Err(e);
            };
            warn!(host, port, fallback, error = %e, "roster_bind_failed_trying_fallback");
            TcpListener::bind((host, fallback)).await
        }
    }
}
