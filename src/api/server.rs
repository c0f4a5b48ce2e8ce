use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use super::{
    services::{get_log, health, list_logs},
    state::AppState,
};
use crate::config::Config;
use crate::logger::Logger;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Query routes plus static files from `server.public_dir` for everything else
pub fn router(state: AppState) -> Router {
    let public_dir = state.config.server.public_dir.clone();

    Router::new()
        .route("/health", get(health))
        .route("/logs", get(list_logs))
        .route("/logs/{log_id}", get(get_log))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}

pub async fn run(config: Config, log: Arc<Logger>) -> Result<(), AnyError> {
    let address = config.server.bind_addr;
    let public_dir = config.server.public_dir.clone();
    let state = AppState::new(config, log.clone());
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    log.info(format_args!("serving static files from: {}", public_dir.display()));
    log.info(format_args!("server listening on {}", address));

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
