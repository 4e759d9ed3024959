//! Task API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::AppState;

/// GET /api/tasks - List all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    success(state.repo.list_tasks().await?)
}

/// GET /api/tasks/:id - Get a single task.
pub async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Task> {
    match state.repo.get_task(&id).await? {
        Some(task) => success(task),
        None => Err(AppError::NotFound(format!("Task {} not found", id))),
    }
}

/// POST /api/tasks - Create a new task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Task> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    success(state.repo.create_task(&request).await?)
}

/// PUT /api/tasks/:id - Update a task.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Task> {
    success(state.repo.update_task(&id, &request).await?)
}

/// DELETE /api/tasks/:id - Delete a task.
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_task(&id).await?;
    success(())
}
