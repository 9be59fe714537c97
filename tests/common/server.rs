//! In-process test servers.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use kona::data_loader::load_sqlite;
use kona::{create_router, AppState, Config};

use super::test_data;

/// A running server plus the temporary directory holding its database
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Arc<AppState>,
    _dir: tempfile::TempDir,
}

/// Serve `state` on an ephemeral local port
pub async fn spawn(state: Arc<AppState>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let app = create_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    addr
}

/// Load a database written by `write` and serve it with `config`
pub async fn start_with<F>(config: Config, write: F) -> TestServer
where
    F: FnOnce(&Path) -> rusqlite::Result<()>,
{
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("hawaii.sqlite");
    write(&path).expect("Failed to write test database");

    let state = Arc::new(load_sqlite(&path, config).expect("Failed to load test database"));
    let addr = spawn(Arc::clone(&state)).await;

    TestServer {
        addr,
        state,
        _dir: dir,
    }
}

/// Serve the standard fixture with default configuration
pub async fn start() -> TestServer {
    start_with(Config::default(), test_data::create_hawaii_db).await
}
