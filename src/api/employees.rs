//! Employee API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    AssignProjectsRequest, CreateEmployeeRequest, Employee, UpdateEmployeeRequest,
};
use crate::AppState;

/// GET /api/employees - List all employees.
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    success(state.repo.list_employees().await?)
}

/// GET /api/employees/:id - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    match state.repo.get_employee(&id).await? {
        Some(employee) => success(employee),
        None => Err(AppError::NotFound(format!("Employee {} not found", id))),
    }
}

/// POST /api/employees - Create a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> ApiResult<Employee> {
    if request.display_name.trim().is_empty() {
        return Err(AppError::Validation("Display name is required".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }

    success(state.repo.create_employee(&request).await?)
}

/// PUT /api/employees/:id - Update an employee's profile.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> ApiResult<Employee> {
    success(state.repo.update_employee(&id, &request).await?)
}

/// PUT /api/employees/:id/projects - Assign projects and run succession.
pub async fn assign_employee_projects(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AssignProjectsRequest>,
) -> ApiResult<Employee> {
    let projects = request.projects.into_list()?;
    success(state.repo.assign_employee_projects(&id, &projects).await?)
}

/// DELETE /api/employees/:id - Delete an employee.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_employee(&id).await?;
    success(())
}
