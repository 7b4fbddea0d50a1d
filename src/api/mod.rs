use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::GatewayError;
use crate::models::{BlockView, TransactionView};
use crate::resolver::Resolver;
use crate::serve_stats::{ServeSnapshot, ServeStats};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver,
    pub stats: Arc<ServeStats>,
}

impl AppState {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            stats: Arc::new(ServeStats::new()),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn root() -> &'static str {
    "Hello, World!"
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn stats(State(state): State<AppState>) -> Json<ServeSnapshot> {
    Json(state.stats.snapshot())
}

async fn get_block(
    State(state): State<AppState>,
    Path(block_number): Path<String>,
) -> Result<Json<BlockView>, GatewayError> {
    match state.resolver.resolve_block(&block_number).await {
        Ok(view) => {
            state.stats.inc_blocks_served();
            Ok(Json(view))
        }
        Err(err) => {
            state.stats.inc_failed_lookups();
            Err(err)
        }
    }
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(tx_hash): Path<String>,
) -> Result<Json<TransactionView>, GatewayError> {
    match state.resolver.resolve_transaction(&tx_hash).await {
        Ok(view) => {
            state.stats.inc_transactions_served();
            Ok(Json(view))
        }
        Err(err) => {
            state.stats.inc_failed_lookups();
            Err(err)
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/block/:blockNumber", get(get_block))
        .route("/tx/:txHash", get(get_transaction))
        .with_state(state)
}

pub async fn run_http_server(addr: &str, state: AppState) -> Result<()> {
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received, draining in-flight requests");
}
