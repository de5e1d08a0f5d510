pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use domain::a001_configuration_document::ConfigurationService;
use shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = shared::config::load_config()?;

    // Log to stdout and to <logging.dir>/backend.log
    let log_dir = config.log_dir();
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let static_dir = config.static_dir();
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}; page routes will answer 404 until the frontend is built",
            static_dir.display()
        );
    }

    let state = AppState::new(ConfigurationService::builtin(), static_dir);
    let app = routes::configure_routes(state);

    let addr = config.socket_addr();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
