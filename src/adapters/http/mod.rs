//! HTTP Adapter - REST Surface under /api/v1
//!
//! Builds the axum router: the two resource collections, CORS locked
//! to the configured front-end origin, request tracing, and the
//! `/live` + `/ready` probes. Handlers stay thin; everything beyond
//! parameter translation lives in the usecases layer.

pub mod departments;
pub mod employees;
pub mod error;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::get;
use axum::{Router, extract::State};
use serde::Serialize;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;
use crate::usecases::{DepartmentService, EmployeeService};

/// Shared handler state: one service per collection plus the
/// readiness flag flipped during graceful shutdown.
#[derive(Clone)]
pub struct AppState {
    pub departments: Arc<DepartmentService>,
    pub employees: Arc<EmployeeService>,
    pub ready: watch::Receiver<bool>,
}

/// Body of a successful DELETE.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub deleted: bool,
}

/// Build the full application router.
///
/// # Errors
/// Fails if the configured CORS origin is not a valid header value.
pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router> {
    let origin: HeaderValue = cors
        .allowed_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin: {}", cors.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route(
            "/departments",
            get(departments::list).post(departments::create),
        )
        .route(
            "/departments/:id",
            get(departments::get_by_id)
                .put(departments::update)
                .delete(departments::remove),
        )
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::get_by_id)
                .put(employees::update)
                .delete(employees::remove),
        );

    Ok(Router::new()
        .nest("/api/v1", api)
        .route("/live", get(|| async { StatusCode::OK }))
        .route("/ready", get(ready))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Readiness probe: 503 during graceful shutdown or when the backing
/// store reports unhealthy.
async fn ready(State(state): State<AppState>) -> StatusCode {
    if !*state.ready.borrow() {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    if !state.departments.is_healthy().await || !state.employees.is_healthy().await {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    StatusCode::OK
}
