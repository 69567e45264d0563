//! Employee HTTP handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::error::{ApiError, ApiJson};
use super::{AppState, DeleteConfirmation};
use crate::domain::{Employee, EmployeeDraft};

/// GET /api/v1/employees
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.employees.list().await?))
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<EmployeeDraft>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let created = state.employees.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.employees.get_by_id(id).await?))
}

/// PUT /api/v1/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(draft): ApiJson<EmployeeDraft>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.employees.update(id, draft).await?))
}

/// DELETE /api/v1/employees/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    state.employees.delete(id).await?;
    Ok(Json(DeleteConfirmation { deleted: true }))
}
