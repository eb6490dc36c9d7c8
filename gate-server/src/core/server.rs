//! Server Implementation
//!
//! Starts the reader gateway as a background task and serves the admin
//! API until ctrl-c; shutdown cancels the gateway token and waits for it.

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};
use crate::reader::ReaderGateway;

/// HTTP server + reader gateway
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (shared with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let shutdown = CancellationToken::new();

        // Start the reader gateway
        let gateway = ReaderGateway::new(&self.config, state.scan_service(), shutdown.clone());
        let gateway_handle = tokio::spawn(gateway.run());

        let app = api::build_app(state);
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Gatehouse edge server starting on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(ServerError::Bind)?;

        let shutdown_signal = {
            let shutdown = shutdown.clone();
            async move {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
                shutdown.cancel();
            }
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .context("HTTP server failed")?;

        // The signal handler cancelled the token; wait for the gateway
        shutdown.cancel();
        let _ = gateway_handle.await;

        Ok(())
    }
}
