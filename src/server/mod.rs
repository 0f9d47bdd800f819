//! The blog API server.
//!
//! Owns the persistent store and exposes it as a REST resource endpoint,
//! plus the authenticated `/user` identity endpoint and `/health`.

mod blogs;
mod error;
mod health;
mod router;
mod shutdown;
mod state;
mod user;

pub use error::ApiError;
pub use shutdown::ShutdownManager;
pub use state::{AppState, AuthSettings};

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::server::router::build_router;
use crate::store::{BlogStore, SqliteBlogStore, StoreError};

pub struct BlogServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive to prevent port race conditions.
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl BlogServer {
    /// Build a server around an existing store.
    pub fn new(store: Arc<dyn BlogStore>, auth: AuthSettings) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Will be determined at bind time
            listener: None,
            state: AppState::new(store, auth),
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Build a server with a SQLite store at the configured path.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store = SqliteBlogStore::open(&config.storage.db_path())?;
        Ok(Self::new(Arc::new(store), AuthSettings::from_config(config)))
    }

    /// Try to bind to the given address, falling back to incremental ports
    /// if busy. Returns the bound address.
    ///
    /// The listener is kept alive so another process cannot claim the port
    /// between try_bind() and run().
    pub async fn try_bind(
        &mut self,
        bind_addr: &str,
    ) -> Result<SocketAddr, Box<dyn std::error::Error>> {
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

        let start_port = bind_addr.port();
        let host = bind_addr.ip();

        for port in start_port..=start_port.saturating_add(100) {
            let try_addr = SocketAddr::new(host, port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr()?;
                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!("API server bound to {}", actual_addr);
                    return Ok(actual_addr);
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                    continue;
                }
            }
        }

        Err(format!(
            "Could not find available port in range {}-{}",
            start_port,
            start_port.saturating_add(100)
        )
        .into())
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Run the server until shutdown.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    /// Call try_bind() before run().
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = self
            .listener
            .ok_or("try_bind() must be called before run()")?;

        tracing::info!("Starting blog API server on {}", self.addr);

        let app = build_router(self.state);

        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.wait_for_shutdown().await;
            })
            .into_future()
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Cheap clone handle for signaling shutdown from another task.
#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
