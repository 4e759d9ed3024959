//! Employee CRUD operations.

use sqlx::Row;

use super::repository::{now_rfc3339, parse_json_array};
use super::Repository;
use crate::assignment;
use crate::errors::AppError;
use crate::models::{CreateEmployeeRequest, Employee, JobRole, UpdateEmployeeRequest};

const EMPLOYEE_COLUMNS: &str =
    "id, display_name, email, login_email, role, projects, active, created_at, updated_at";

impl Repository {
    /// List all employees.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY display_name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(employee_from_row).collect())
    }

    /// Get an employee by ID.
    pub async fn get_employee(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(employee_from_row))
    }

    /// Create a new employee. New hires start unassigned with the baseline
    /// role unless a role is given.
    pub async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_rfc3339();
        let role = request.role.unwrap_or(JobRole::Developer);

        sqlx::query(
            "INSERT INTO employees (id, display_name, email, login_email, role, projects, active, created_at, updated_at) VALUES (?, ?, ?, ?, ?, '[]', ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.display_name)
        .bind(&request.email)
        .bind(&request.login_email)
        .bind(role.as_str())
        .bind(request.active as i32)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            id,
            display_name: request.display_name.clone(),
            email: request.email.clone(),
            login_email: request.login_email.clone(),
            role,
            projects: Vec::new(),
            primary_project: assignment::UNASSIGNED.to_string(),
            active: request.active,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update an employee's profile fields. Role and project membership are
    /// mutated only through the assignment path.
    pub async fn update_employee(
        &self,
        id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        let existing = self
            .get_employee(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

        let now = now_rfc3339();
        let display_name = request
            .display_name
            .as_ref()
            .unwrap_or(&existing.display_name);
        let email = request.email.as_ref().unwrap_or(&existing.email);
        let login_email = request.login_email.clone().or(existing.login_email.clone());
        let active = request.active.unwrap_or(existing.active);

        sqlx::query(
            "UPDATE employees SET display_name = ?, email = ?, login_email = ?, active = ?, updated_at = ? WHERE id = ?"
        )
        .bind(display_name)
        .bind(email)
        .bind(&login_email)
        .bind(active as i32)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            id: id.to_string(),
            display_name: display_name.clone(),
            email: email.clone(),
            login_email,
            role: existing.role,
            projects: existing.projects.clone(),
            primary_project: existing.primary_project,
            active,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete an employee.
    pub async fn delete_employee(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        Ok(())
    }
}

pub(super) fn employee_from_row(row: &sqlx::sqlite::SqliteRow) -> Employee {
    let active: i32 = row.get("active");
    let role_str: String = row.get("role");
    let projects_str: String = row.get("projects");
    let projects = parse_json_array(&projects_str);
    let primary_project = assignment::primary_project(&projects).to_string();

    Employee {
        id: row.get("id"),
        display_name: row.get("display_name"),
        email: row.get("email"),
        login_email: row.get("login_email"),
        role: JobRole::from_str(&role_str).unwrap_or(JobRole::Developer),
        projects,
        primary_project,
        active: active != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
