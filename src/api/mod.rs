//! REST API exposing the calculator.
//!
//! Provides four endpoints:
//! - `GET /catalog`: catalogs and projection horizons in use
//! - `POST /calculate`: raw inputs in, projection result out
//! - `POST /report/metrics`: raw inputs in, report collaborator request body out
//! - `POST /report/request`: collaborator request body in, with its decision filled in

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::catalog::Catalog;
use crate::config::ScenarioConfig;
use crate::finance::engine::ProjectionEngine;

pub use types::CatalogResponse;

/// Immutable application state shared across all request handlers.
///
/// Built once from the scenario configuration and wrapped in `Arc`; no
/// locks are needed since every request only reads it.
pub struct AppState {
    /// Engine carrying the configured horizons.
    pub engine: ProjectionEngine,
    /// Catalog used to resolve plant-type and region keys.
    pub catalog: Catalog,
}

impl AppState {
    /// Builds state from a scenario's catalog and horizons.
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        Self {
            engine: cfg.engine(),
            catalog: cfg.catalog.clone(),
        }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/catalog", get(handlers::get_catalog))
        .route("/calculate", post(handlers::post_calculate))
        .route("/report/metrics", post(handlers::post_report_metrics))
        .route("/report/request", post(handlers::post_report_request))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
