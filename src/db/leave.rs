//! Leave request operations.

use sqlx::Row;

use super::repository::now_rfc3339;
use super::Repository;
use crate::errors::AppError;
use crate::models::{CreateLeaveRequest, LeaveRequest, LeaveStatus, UpdateLeaveStatusRequest};

impl Repository {
    /// List leave requests, optionally filtered by employee and/or status.
    pub async fn list_leave_requests(
        &self,
        employee_id: Option<&str>,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let status = status.map(|s| s.as_str());
        let rows = sqlx::query(
            "SELECT id, employee_id, start_date, end_date, reason, status, created_at, updated_at \
             FROM leave_requests \
             WHERE (? IS NULL OR employee_id = ?) AND (? IS NULL OR status = ?) \
             ORDER BY created_at DESC",
        )
        .bind(employee_id)
        .bind(employee_id)
        .bind(status)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(leave_from_row).collect())
    }

    /// Get a leave request by ID.
    pub async fn get_leave_request(&self, id: &str) -> Result<Option<LeaveRequest>, AppError> {
        let row = sqlx::query(
            "SELECT id, employee_id, start_date, end_date, reason, status, created_at, updated_at \
             FROM leave_requests WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(leave_from_row))
    }

    /// Create a leave request in the Pending state.
    pub async fn create_leave_request(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequest, AppError> {
        let employee = self.get_employee(&request.employee_id).await?;
        if employee.is_none() {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                request.employee_id
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = now_rfc3339();

        sqlx::query(
            "INSERT INTO leave_requests (id, employee_id, start_date, end_date, reason, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, 'Pending', ?, ?)"
        )
        .bind(&id)
        .bind(&request.employee_id)
        .bind(&request.start_date)
        .bind(&request.end_date)
        .bind(&request.reason)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(LeaveRequest {
            id,
            employee_id: request.employee_id.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            reason: request.reason.clone(),
            status: LeaveStatus::Pending,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Approve or reject a leave request.
    pub async fn update_leave_status(
        &self,
        id: &str,
        request: &UpdateLeaveStatusRequest,
    ) -> Result<LeaveRequest, AppError> {
        let now = now_rfc3339();

        let result = sqlx::query("UPDATE leave_requests SET status = ?, updated_at = ? WHERE id = ?")
            .bind(request.status.as_str())
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Leave request {} not found", id)));
        }

        self.get_leave_request(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Leave request {} not found", id)))
    }

    /// Delete a leave request.
    pub async fn delete_leave_request(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM leave_requests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Leave request {} not found", id)));
        }

        Ok(())
    }
}

fn leave_from_row(row: &sqlx::sqlite::SqliteRow) -> LeaveRequest {
    let status_str: String = row.get("status");
    LeaveRequest {
        id: row.get("id"),
        employee_id: row.get("employee_id"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        reason: row.get("reason"),
        status: LeaveStatus::from_str(&status_str).unwrap_or(LeaveStatus::Pending),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
