//! Intern CRUD and termination operations.
//!
//! Internship status is derived at read time by the tenure utilities; the
//! stored column only matters for the sticky `Terminated` state.

use sqlx::Row;

use super::repository::{now_rfc3339, parse_json_array};
use super::Repository;
use crate::assignment;
use crate::errors::AppError;
use crate::models::{
    CreateInternRequest, Intern, InternshipStatus, JobRole, TerminateInternRequest,
    UpdateInternRequest,
};
use crate::tenure;

const INTERN_COLUMNS: &str = "id, display_name, email, login_email, role, projects, start_date, \
     end_date, status, termination_date, termination_reason, created_at, updated_at";

impl Repository {
    /// List all interns, with status and duration derived at read time.
    pub async fn list_interns(&self) -> Result<Vec<Intern>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {INTERN_COLUMNS} FROM interns ORDER BY display_name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(intern_from_row).collect())
    }

    /// Get an intern by ID.
    pub async fn get_intern(&self, id: &str) -> Result<Option<Intern>, AppError> {
        let row = sqlx::query(&format!("SELECT {INTERN_COLUMNS} FROM interns WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(intern_from_row))
    }

    /// Create a new intern.
    pub async fn create_intern(&self, request: &CreateInternRequest) -> Result<Intern, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_rfc3339();

        sqlx::query(
            "INSERT INTO interns (id, display_name, email, login_email, role, projects, start_date, end_date, status, created_at, updated_at) VALUES (?, ?, ?, ?, 'Developer', '[]', ?, ?, 'Active', ?, ?)"
        )
        .bind(&id)
        .bind(&request.display_name)
        .bind(&request.email)
        .bind(&request.login_email)
        .bind(&request.start_date)
        .bind(&request.end_date)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        // Re-read so the response carries the derived status and duration.
        self.get_intern(&id)
            .await?
            .ok_or_else(|| AppError::Internal("Intern vanished after insert".to_string()))
    }

    /// Update an intern's profile and engagement dates.
    pub async fn update_intern(
        &self,
        id: &str,
        request: &UpdateInternRequest,
    ) -> Result<Intern, AppError> {
        let existing = self
            .get_intern(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Intern {} not found", id)))?;

        let now = now_rfc3339();
        let display_name = request
            .display_name
            .as_ref()
            .unwrap_or(&existing.display_name);
        let email = request.email.as_ref().unwrap_or(&existing.email);
        let login_email = request.login_email.clone().or(existing.login_email.clone());
        let start_date = request.start_date.as_ref().unwrap_or(&existing.start_date);
        let end_date = request.end_date.clone().or(existing.end_date.clone());

        sqlx::query(
            "UPDATE interns SET display_name = ?, email = ?, login_email = ?, start_date = ?, end_date = ?, updated_at = ? WHERE id = ?"
        )
        .bind(display_name)
        .bind(email)
        .bind(&login_email)
        .bind(start_date)
        .bind(&end_date)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get_intern(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Intern {} not found", id)))
    }

    /// Terminate an internship. Sets the sticky `Terminated` status with
    /// today's date and the optional reason.
    pub async fn terminate_intern(
        &self,
        id: &str,
        request: &TerminateInternRequest,
    ) -> Result<Intern, AppError> {
        let now = now_rfc3339();
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();

        let result = sqlx::query(
            "UPDATE interns SET status = 'Terminated', termination_date = ?, termination_reason = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&today)
        .bind(&request.reason)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Intern {} not found", id)));
        }

        self.get_intern(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Intern {} not found", id)))
    }

    /// Delete an intern.
    pub async fn delete_intern(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM interns WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Intern {} not found", id)));
        }

        Ok(())
    }
}

pub(super) fn intern_from_row(row: &sqlx::sqlite::SqliteRow) -> Intern {
    let role_str: String = row.get("role");
    let projects_str: String = row.get("projects");
    let projects = parse_json_array(&projects_str);
    let primary_project = assignment::primary_project(&projects).to_string();

    let start_date: String = row.get("start_date");
    let end_date: Option<String> = row.get("end_date");
    let stored_status: String = row.get("status");

    let status = tenure::get_internship_status(
        &start_date,
        end_date.as_deref(),
        InternshipStatus::from_str(&stored_status),
    );
    let duration = tenure::calculate_internship_duration(&start_date, end_date.as_deref());

    Intern {
        id: row.get("id"),
        display_name: row.get("display_name"),
        email: row.get("email"),
        login_email: row.get("login_email"),
        role: JobRole::from_str(&role_str).unwrap_or(JobRole::Developer),
        projects,
        primary_project,
        start_date,
        end_date,
        status,
        termination_date: row.get("termination_date"),
        termination_reason: row.get("termination_reason"),
        duration,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
