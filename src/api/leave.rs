//! Leave request API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateLeaveRequest, LeaveRequest, LeaveStatus, UpdateLeaveStatusRequest};
use crate::AppState;

/// Query parameters for listing leave requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveQuery {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub status: Option<LeaveStatus>,
}

/// GET /api/leave - List leave requests.
pub async fn list_leave_requests(
    State(state): State<AppState>,
    Query(query): Query<LeaveQuery>,
) -> ApiResult<Vec<LeaveRequest>> {
    success(
        state
            .repo
            .list_leave_requests(query.employee_id.as_deref(), query.status)
            .await?,
    )
}

/// GET /api/leave/:id - Get a single leave request.
pub async fn get_leave_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<LeaveRequest> {
    match state.repo.get_leave_request(&id).await? {
        Some(leave) => success(leave),
        None => Err(AppError::NotFound(format!("Leave request {} not found", id))),
    }
}

/// POST /api/leave - Create a leave request.
pub async fn create_leave_request(
    State(state): State<AppState>,
    Json(request): Json<CreateLeaveRequest>,
) -> ApiResult<LeaveRequest> {
    if request.start_date.trim().is_empty() || request.end_date.trim().is_empty() {
        return Err(AppError::Validation(
            "Start and end dates are required".to_string(),
        ));
    }

    success(state.repo.create_leave_request(&request).await?)
}

/// PUT /api/leave/:id/status - Approve or reject a leave request.
pub async fn update_leave_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateLeaveStatusRequest>,
) -> ApiResult<LeaveRequest> {
    success(state.repo.update_leave_status(&id, &request).await?)
}

/// DELETE /api/leave/:id - Delete a leave request.
pub async fn delete_leave_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_leave_request(&id).await?;
    success(())
}
