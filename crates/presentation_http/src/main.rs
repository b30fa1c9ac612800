//! Natiq HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use anyhow::Context as _;
use infrastructure::{AppConfig, LegacyCredentials, build_services, init_tracing};
use presentation_http::{create_app, serve, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::info;

const DEFAULT_LOG_FILTER: &str = "natiq_server=debug,presentation_http=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(config.server.log_format, DEFAULT_LOG_FILTER)?;

    info!("Natiq v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "Loaded .env");
    }

    config.apply_legacy_credentials(&LegacyCredentials::from_env());

    info!(
        host = %config.server.host,
        port = %config.server.port,
        stt_model = %config.speech.stt_model,
        chat_model = %config.inference.default_model,
        max_retries = config.retry.max_retries,
        "Configuration loaded"
    );

    let services = build_services(&config).context("Failed to initialize services")?;
    let app = create_app(AppState::from(services), &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let outcome = serve(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!(?outcome, "Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
