use hello_server::config::ServerConfig;
use hello_server::{lifecycle, observability};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fixed host and port; there is no configuration surface.
    let config = ServerConfig::default();
    observability::logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        "hello-server starting"
    );

    lifecycle::launch(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
