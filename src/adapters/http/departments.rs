//! Department HTTP handlers.
//!
//! Thin translation from path/body parameters to service calls; all
//! status-code mapping lives in `ApiError`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::error::{ApiError, ApiJson};
use super::{AppState, DeleteConfirmation};
use crate::domain::{Department, DepartmentDraft};

/// GET /api/v1/departments
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(state.departments.list().await?))
}

/// POST /api/v1/departments
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<DepartmentDraft>,
) -> Result<(StatusCode, Json<Department>), ApiError> {
    let created = state.departments.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Department>, ApiError> {
    Ok(Json(state.departments.get_by_id(id).await?))
}

/// PUT /api/v1/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(draft): ApiJson<DepartmentDraft>,
) -> Result<Json<Department>, ApiError> {
    Ok(Json(state.departments.update(id, draft).await?))
}

/// DELETE /api/v1/departments/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    state.departments.delete(id).await?;
    Ok(Json(DeleteConfirmation { deleted: true }))
}
