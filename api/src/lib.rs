//! HTTP surface of the documentation Q&A backend.
//!
//! One JSON endpoint (`POST /query`) plus a static chat page at `/`. All
//! orchestration lives in `qa-gateway`; this crate only validates input and
//! shapes responses.

use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
use crate::error_handler::AppError;
use crate::routes::{home_route::home, query::query_route::query_route};

pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);

    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".into());

    let app = Router::new()
        .route("/", get(home))
        .route("/query", post(query_route))
        .with_state(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    info!(target: "api", address = %host_url, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
