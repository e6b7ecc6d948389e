// ABOUTME: HTTP server assembly: router, middleware stack, listener and graceful shutdown
// ABOUTME: Wires consultation and health routes behind tracing, request id, CORS and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Server
//!
//! Middleware order, outermost first:
//!
//! 1. request id assignment (`x-request-id`, UUID v4 when absent)
//! 2. request span
//! 3. request id propagation to the response
//! 4. timeout
//! 5. CORS
//! 6. body size limit

use crate::config::environment::ServerConfig;
use crate::middleware::{request_trace_layer, setup_cors};
use crate::routes::{ConsultationRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::Router;
use fitcoach_core::errors::AppError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

/// Build the application router with its middleware stack
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .merge(ConsultationRoutes::routes())
        .merge(HealthRoutes::routes())
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(config.max_request_body_bytes))
        .layer(setup_cors(&config.cors))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(request_trace_layer())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind the listener and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.http_port))?;

    let app = build_router(&config);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    info!("HTTP server shut down");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal, initiating shutdown"),
        () = terminate => info!("Received SIGTERM signal, initiating shutdown"),
    }
}
