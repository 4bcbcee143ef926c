//! Axum router and shared request state.
//!
//! # Responsibility
//! - Route `/post` and `/book` verbs to their services.
//! - Run every request as one SQLite transaction.
//!
//! # Invariants
//! - The connection lock is never held across an `.await`.
//! - A handler that returns an error leaves storage untouched (rollback).

mod books;
pub mod dto;
pub mod error;
mod posts;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use error::ApiError;
use log::{info, warn};
use postboard_core::ServiceResult;
use rusqlite::{Connection, Transaction};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated connection (see `postboard_core::db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `op` inside one transaction, committing only on success.
    pub(crate) fn in_transaction<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Transaction<'_>) -> ServiceResult<T>,
    {
        // A panic mid-request drops its transaction, so the data is still
        // consistent after poisoning.
        let mut conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let tx = conn.transaction()?;
        let value = op(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

/// Builds the router with CORS open to any origin, header and method.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(posts::routes())
        .merge(books::routes())
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

/// Serves `state` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    info!("event=server_stop module=http status=ok");
    Ok(())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        "event=http_request module=http method={} path={} status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=server_stop module=http status=error error={err}");
    }
}
