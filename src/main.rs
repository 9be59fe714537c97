//! kona - a small, in-memory, read-only climate observation query server
//!
//! This is the main entry point for the kona application.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tracing::info;

use kona::data_loader::load_sqlite;
use kona::{
    create_router, init_tracing, log_error, log_operation_end, log_operation_start, Config,
    KonaError, Result,
};

fn main() -> Result<()> {
    let (config, database_path) = Config::load()?;
    init_tracing(&config.log_level);

    config.validate().map_err(|e| {
        log_error(&e, "validating configuration");
        e
    })?;

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.server.workers {
        runtime.worker_threads(workers);
    }
    let runtime = runtime.enable_all().build()?;

    runtime.block_on(serve(config, database_path))
}

async fn serve(config: Config, database_path: std::path::PathBuf) -> Result<()> {
    info!("Starting kona v{}", env!("CARGO_PKG_VERSION"));

    let load_start = Instant::now();
    let details = database_path.display().to_string();
    log_operation_start("data_load", Some(&details));

    let app_state = load_sqlite(&database_path, config.clone()).map_err(|e| {
        log_operation_end("data_load", load_start, false);
        log_error(&e, "loading SQLite dataset");
        e
    })?;
    log_operation_end("data_load", load_start, true);

    app_state.validate().map_err(|e| {
        log_error(&e, "validating application state");
        e
    })?;

    let state = Arc::new(app_state);
    let app = create_router(Arc::clone(&state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| KonaError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Server error: {}", e),
        })?;

    state.store.close();
    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
