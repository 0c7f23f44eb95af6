//! Startup orchestration.
//!
//! Bind first, then serve. A port that is already taken is reported with the
//! address and the OS error and the process exits.

use std::future::Future;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ListenerConfig, ServerConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid bind address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind a TCP listener for the configured host and port.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address = config
        .socket_addr()
        .map_err(|source| StartupError::InvalidAddress {
            address: config.bind_address(),
            source,
        })?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| StartupError::Bind { address, source })?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}

/// Bind and serve until SIGINT or SIGTERM.
pub async fn launch(config: ServerConfig) -> Result<(), StartupError> {
    launch_until(config, signals::wait_for_termination()).await
}

/// Bind and serve until `termination` resolves, then drain and return.
pub async fn launch_until<F>(config: ServerConfig, termination: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let _signals = signals::spawn_shutdown_on(shutdown, termination);

    HttpServer::new(config).run(listener, server_shutdown).await?;
    Ok(())
}
