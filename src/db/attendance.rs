//! Attendance record operations.
//!
//! One record per employee per calendar day, enforced by the
//! UNIQUE(employee_id, date) constraint. Punch times are stored as received;
//! display normalization and the total-hours span are derived at read time.

use sqlx::Row;

use super::Repository;
use crate::errors::AppError;
use crate::models::{AttendanceRecord, AttendanceStatus, UpdateAttendanceRequest};
use crate::timeclock;

impl Repository {
    /// Create today's attendance record for an employee.
    ///
    /// The insert is the arbiter of the punch-in race: a concurrent duplicate
    /// trips the uniqueness constraint and surfaces as Conflict.
    pub async fn punch_in(
        &self,
        employee_id: &str,
        date: &str,
        time: &str,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, AppError> {
        let employee = self.get_employee(employee_id).await?;
        if employee.is_none() {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                employee_id
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO attendance (id, employee_id, date, check_in, status) VALUES (?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(employee_id)
        .bind(date)
        .bind(time)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| match AppError::from(err) {
            AppError::Conflict(_) => AppError::Conflict(format!(
                "Employee {} already punched in on {}",
                employee_id, date
            )),
            other => other,
        })?;

        Ok(AttendanceRecord {
            id,
            employee_id: employee_id.to_string(),
            date: date.to_string(),
            check_in: Some(timeclock::format_time_for_display(time)),
            check_out: None,
            status,
            total_hours: "0:00".to_string(),
            total_hours_decimal: 0.0,
        })
    }

    /// Record the punch-out for today's attendance record.
    pub async fn punch_out(
        &self,
        employee_id: &str,
        date: &str,
        time: &str,
    ) -> Result<AttendanceRecord, AppError> {
        let row = sqlx::query(
            "SELECT id, employee_id, date, check_in, check_out, status FROM attendance WHERE employee_id = ? AND date = ?"
        )
        .bind(employee_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        let record = row.as_ref().map(attendance_from_row).ok_or_else(|| {
            AppError::NotFound(format!(
                "No punch-in recorded for employee {} on {}",
                employee_id, date
            ))
        })?;

        if record.check_out.is_some() {
            return Err(AppError::Conflict(format!(
                "Employee {} already punched out on {}",
                employee_id, date
            )));
        }

        sqlx::query("UPDATE attendance SET check_out = ? WHERE id = ?")
            .bind(time)
            .bind(&record.id)
            .execute(&self.pool)
            .await?;

        self.get_attendance(&record.id).await?.ok_or_else(|| {
            AppError::Internal("Attendance record vanished after update".to_string())
        })
    }

    /// Get an attendance record by ID.
    pub async fn get_attendance(&self, id: &str) -> Result<Option<AttendanceRecord>, AppError> {
        let row = sqlx::query(
            "SELECT id, employee_id, date, check_in, check_out, status FROM attendance WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(attendance_from_row))
    }

    /// List attendance records, optionally filtered by employee and/or date.
    pub async fn list_attendance(
        &self,
        employee_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let rows = sqlx::query(
            "SELECT id, employee_id, date, check_in, check_out, status FROM attendance \
             WHERE (? IS NULL OR employee_id = ?) AND (? IS NULL OR date = ?) \
             ORDER BY date DESC, employee_id",
        )
        .bind(employee_id)
        .bind(employee_id)
        .bind(date)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(attendance_from_row).collect())
    }

    /// Administrative edit of an attendance record.
    pub async fn update_attendance(
        &self,
        id: &str,
        request: &UpdateAttendanceRequest,
    ) -> Result<AttendanceRecord, AppError> {
        let existing = self
            .get_attendance(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attendance record {} not found", id)))?;

        let check_in = request.check_in.clone().or(existing.check_in.clone());
        let check_out = request.check_out.clone().or(existing.check_out.clone());
        let status = request.status.unwrap_or(existing.status);

        tracing::info!(record = id, "Administrative attendance edit");

        sqlx::query("UPDATE attendance SET check_in = ?, check_out = ?, status = ? WHERE id = ?")
            .bind(&check_in)
            .bind(&check_out)
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_attendance(id).await?.ok_or_else(|| {
            AppError::Internal("Attendance record vanished after update".to_string())
        })
    }
}

fn attendance_from_row(row: &sqlx::sqlite::SqliteRow) -> AttendanceRecord {
    let status_str: String = row.get("status");
    let check_in: Option<String> = row.get("check_in");
    let check_out: Option<String> = row.get("check_out");

    let total_hours = match (&check_in, &check_out) {
        (Some(start), Some(end)) => timeclock::calculate_total_hours(start, end),
        _ => "0:00".to_string(),
    };

    let total_hours_decimal = timeclock::duration_to_decimal_hours(&total_hours);

    AttendanceRecord {
        id: row.get("id"),
        employee_id: row.get("employee_id"),
        date: row.get("date"),
        check_in: check_in.as_deref().map(timeclock::format_time_for_display),
        check_out: check_out.as_deref().map(timeclock::format_time_for_display),
        status: AttendanceStatus::from_str(&status_str).unwrap_or(AttendanceStatus::Present),
        total_hours,
        total_hours_decimal,
    }
}
