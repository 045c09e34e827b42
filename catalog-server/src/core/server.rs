//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;

use crate::api;
use crate::core::{Config, Result, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = ServerState::initialize(&self.config).await?;
        let app = api::build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "{} listening on {} (env: {})",
            self.config.service_name,
            addr,
            self.config.environment
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Listens for SIGTERM (container stop) and Ctrl+C signals
///
/// The SIGTERM handler is installed when this is called, not on first poll.
fn shutdown_signal() -> impl Future<Output = ()> {
    use tokio::signal;

    #[cfg(unix)]
    let sigterm = signal::unix::signal(signal::unix::SignalKind::terminate());

    async move {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match sigterm {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal, shutting down gracefully...");
            },
        }
    }
}
