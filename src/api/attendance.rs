//! Attendance API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, PunchInRequest, PunchOutRequest, UpdateAttendanceRequest,
};
use crate::timeclock;
use crate::AppState;

/// Query parameters for listing attendance records.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

fn now_time() -> String {
    chrono::Utc::now().format("%H:%M").to_string()
}

/// POST /api/attendance/punch-in - Create today's record for an employee.
pub async fn punch_in(
    State(state): State<AppState>,
    Json(request): Json<PunchInRequest>,
) -> ApiResult<AttendanceRecord> {
    let time = request.time.unwrap_or_else(now_time);

    // Late determination happens once, here; the status is never recomputed.
    let status = if timeclock::is_late(&time, &state.config.late_cutoff) {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    };

    success(
        state
            .repo
            .punch_in(&request.employee_id, &today(), &time, status)
            .await?,
    )
}

/// POST /api/attendance/punch-out - Close today's record for an employee.
pub async fn punch_out(
    State(state): State<AppState>,
    Json(request): Json<PunchOutRequest>,
) -> ApiResult<AttendanceRecord> {
    let time = request.time.unwrap_or_else(now_time);

    success(
        state
            .repo
            .punch_out(&request.employee_id, &today(), &time)
            .await?,
    )
}

/// GET /api/attendance - List records, filtered by employee and/or date.
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> ApiResult<Vec<AttendanceRecord>> {
    success(
        state
            .repo
            .list_attendance(query.employee_id.as_deref(), query.date.as_deref())
            .await?,
    )
}

/// PUT /api/attendance/:id - Administrative edit of a record.
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAttendanceRequest>,
) -> ApiResult<AttendanceRecord> {
    success(state.repo.update_attendance(&id, &request).await?)
}
