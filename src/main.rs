//! Tunescout HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use tunescout::catalog::HttpCatalogClient;
use tunescout::config::Config;
use tunescout::gateway::{AppState, create_router_with_state};
use tunescout::oracle::GenaiOracle;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
▀█▀ █ █ █▄ █ █▀▀ ▄▀▀ ▄▀▀ ▄▀▄ █ █ ▀█▀
 █  ▀▄█ █ ▀█ █▄▄ ▄██ ▀▄▄ ▀▄▀ ▀▄█  █

        ASK. RESOLVE. JUDGE.
                        AGPL-3.0
"#
    );

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        model = %config.oracle_model,
        catalog = %config.catalog_url,
        "Tunescout starting"
    );

    let oracle = Arc::new(GenaiOracle::new(config.oracle_model.clone()));
    let catalog = Arc::new(HttpCatalogClient::new(
        config.catalog_url.clone(),
        Duration::from_secs(config.catalog_timeout_secs),
    ));

    let state = AppState::new(oracle, catalog, config.api_key.as_str());
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Tunescout shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
