//! Intern API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    AssignProjectsRequest, CreateInternRequest, Intern, TerminateInternRequest,
    UpdateInternRequest,
};
use crate::AppState;

/// GET /api/interns - List all interns with derived status and duration.
pub async fn list_interns(State(state): State<AppState>) -> ApiResult<Vec<Intern>> {
    success(state.repo.list_interns().await?)
}

/// GET /api/interns/:id - Get a single intern.
pub async fn get_intern(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Intern> {
    match state.repo.get_intern(&id).await? {
        Some(intern) => success(intern),
        None => Err(AppError::NotFound(format!("Intern {} not found", id))),
    }
}

/// POST /api/interns - Create a new intern.
pub async fn create_intern(
    State(state): State<AppState>,
    Json(request): Json<CreateInternRequest>,
) -> ApiResult<Intern> {
    if request.display_name.trim().is_empty() {
        return Err(AppError::Validation("Display name is required".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if request.start_date.trim().is_empty() {
        return Err(AppError::Validation("Start date is required".to_string()));
    }

    success(state.repo.create_intern(&request).await?)
}

/// PUT /api/interns/:id - Update an intern's profile and dates.
pub async fn update_intern(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateInternRequest>,
) -> ApiResult<Intern> {
    success(state.repo.update_intern(&id, &request).await?)
}

/// PUT /api/interns/:id/projects - Assign projects and run succession.
pub async fn assign_intern_projects(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AssignProjectsRequest>,
) -> ApiResult<Intern> {
    let projects = request.projects.into_list()?;
    success(state.repo.assign_intern_projects(&id, &projects).await?)
}

/// POST /api/interns/:id/terminate - Terminate an internship (sticky).
pub async fn terminate_intern(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TerminateInternRequest>,
) -> ApiResult<Intern> {
    success(state.repo.terminate_intern(&id, &request).await?)
}

/// DELETE /api/interns/:id - Delete an intern.
pub async fn delete_intern(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_intern(&id).await?;
    success(())
}
