//! Shared utilities for integration tests.

use std::net::SocketAddr;

use hello_server::config::{ListenerConfig, ServerConfig};
use hello_server::{lifecycle, HttpServer, Shutdown};
use tokio::task::JoinHandle;

/// A server running on an ephemeral loopback port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the server with default settings on 127.0.0.1 and a free port.
#[allow(dead_code)]
pub async fn start_server() -> TestServer {
    let mut config = ServerConfig::default();
    config.listener = ListenerConfig {
        host: "127.0.0.1".into(),
        port: 0,
    };

    let listener = lifecycle::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(HttpServer::new(config).run(listener, server_shutdown));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
