//! Project API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateProjectRequest, Project, ProjectTeamEntry, UpdateProjectRequest};
use crate::AppState;

/// GET /api/projects - List all projects.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    success(state.repo.list_projects().await?)
}

/// GET /api/projects/:id - Get a single project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    match state.repo.get_project(&id).await? {
        Some(project) => success(project),
        None => Err(AppError::NotFound(format!("Project {} not found", id))),
    }
}

/// GET /api/projects/:id/team - List the project's team with displayed roles.
pub async fn get_project_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<ProjectTeamEntry>> {
    success(state.repo.project_team(&id).await?)
}

/// POST /api/projects - Create a new project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<Project> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Project name is required".to_string()));
    }

    success(state.repo.create_project(&request).await?)
}

/// PUT /api/projects/:id - Update a project.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> ApiResult<Project> {
    success(state.repo.update_project(&id, &request).await?)
}

/// DELETE /api/projects/:id - Delete a project (refused while assigned).
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_project(&id).await?;
    success(())
}
