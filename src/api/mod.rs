mod router;
mod routes;
mod state;
pub mod types;

use anyhow::Context;
use axum::{
    extract::rejection::JsonRejection,
    extract::{Request, State},
    http::Method,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::pet::{ActionOutcome, LogEntry, PetService, PetState};
pub(crate) use router::build_router;
use routes::*;
pub(crate) use state::AppState;
use types::*;

/// Binds the configured address and serves the pet API until Ctrl-C.
pub async fn serve(config: &ServiceConfig) -> anyhow::Result<()> {
    let service = PetService::new(config.locale);
    let app = build_router(AppState::new(service));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(
        "[petbox] Listening on http://{} (locale {})",
        addr,
        config.locale.as_str()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("[petbox] Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("[petbox] Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
