//! HTTP server.
//!
//! Every request is independent: one outbound call, one parse, one JSON
//! response. The only shared state is the immutable [`Gateway`].

pub mod routes;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::client::ArxivClient;
use crate::gateway::Gateway;

pub use routes::create_router;

/// arXiv gateway HTTP server.
pub struct GatewayServer {
    /// Endpoint logic and collaborators.
    gateway: Gateway,

    /// Directory mounted at `/static`.
    static_dir: PathBuf,
}

impl GatewayServer {
    /// Create a server over the arXiv client.
    #[must_use]
    pub fn new(client: ArxivClient, static_dir: impl Into<PathBuf>) -> Self {
        Self::with_gateway(Gateway::from_client(client), static_dir)
    }

    /// Create a server over arbitrary collaborators.
    #[must_use]
    pub fn with_gateway(gateway: Gateway, static_dir: impl Into<PathBuf>) -> Self {
        Self { gateway, static_dir: static_dir.into() }
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = create_router(self.gateway, &self.static_dir);
        let addr = SocketAddr::new(host, port);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(static_dir = %self.static_dir.display(), "HTTP server listening on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for GatewayServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayServer").field("static_dir", &self.static_dir).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
