use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

pub mod error;
pub mod handlers;

pub use error::{error_mapper, HttpError};
pub use handlers::*;

use subtitle_application::SubtitleUseCase;
use subtitle_configuration::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub usecase: Arc<dyn SubtitleUseCase>,
}

impl AppState {
    pub fn new(usecase: Arc<dyn SubtitleUseCase>) -> Self {
        Self { usecase }
    }
}

pub fn create_router(state: AppState) -> Router {
    // Base64 WAV payloads are large; raise the route body limit.
    let generate_route =
        post(generate_subtitles).layer(DefaultBodyLimit::max(64 * 1024 * 1024));

    Router::new()
        .route("/api/subtitles/generate", generate_route)
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn serve(state: AppState, config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %error, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => tracing::error!(error = %error, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
