//! Project CRUD and team listing.

use sqlx::Row;

use super::employees::employee_from_row;
use super::interns::intern_from_row;
use super::repository::now_rfc3339;
use super::Repository;
use crate::assignment;
use crate::errors::AppError;
use crate::models::{
    CreateProjectRequest, Project, ProjectStatus, ProjectTeamEntry, UpdateProjectRequest,
};

impl Repository {
    /// List all projects.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, description, status, created_at, updated_at FROM projects ORDER BY name"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(project_from_row).collect())
    }

    /// Get a project by ID.
    pub async fn get_project(&self, id: &str) -> Result<Option<Project>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, description, status, created_at, updated_at FROM projects WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(project_from_row))
    }

    /// Create a new project. Names are unique; a duplicate maps to Conflict
    /// through the unique-violation conversion.
    pub async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_rfc3339();
        let status = request.status.unwrap_or(ProjectStatus::Active);

        sqlx::query(
            "INSERT INTO projects (id, name, description, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(status.as_str())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Project {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            status,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a project's description or status. Renames are not supported:
    /// person assignments reference projects by name.
    pub async fn update_project(
        &self,
        id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let existing = self
            .get_project(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        let now = now_rfc3339();
        let description = request.description.clone().or(existing.description.clone());
        let status = request.status.unwrap_or(existing.status);

        sqlx::query("UPDATE projects SET description = ?, status = ?, updated_at = ? WHERE id = ?")
            .bind(&description)
            .bind(status.as_str())
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Project {
            id: id.to_string(),
            name: existing.name,
            description,
            status,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a project. Refused while any person still has it assigned.
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let project = self
            .get_project(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        let row = sqlx::query(
            "SELECT (SELECT COUNT(*) FROM employees WHERE EXISTS \
                (SELECT 1 FROM json_each(employees.projects) WHERE json_each.value = ?)) \
             + (SELECT COUNT(*) FROM interns WHERE EXISTS \
                (SELECT 1 FROM json_each(interns.projects) WHERE json_each.value = ?)) AS in_use",
        )
        .bind(&project.name)
        .bind(&project.name)
        .fetch_one(&self.pool)
        .await?;

        let in_use: i64 = row.get("in_use");
        if in_use > 0 {
            return Err(AppError::Conflict(format!(
                "Project {} still has {} assigned member(s)",
                project.name, in_use
            )));
        }

        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List everyone assigned to a project, with the role each person
    /// displays there (actual role on their primary project, "Member"
    /// anywhere else).
    pub async fn project_team(&self, id: &str) -> Result<Vec<ProjectTeamEntry>, AppError> {
        let project = self
            .get_project(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        let mut team = Vec::new();

        let employee_rows = sqlx::query(
            "SELECT id, display_name, email, login_email, role, projects, active, created_at, updated_at \
             FROM employees WHERE EXISTS \
                (SELECT 1 FROM json_each(employees.projects) WHERE json_each.value = ?) \
             ORDER BY display_name",
        )
        .bind(&project.name)
        .fetch_all(&self.pool)
        .await?;

        for row in &employee_rows {
            let employee = employee_from_row(row);
            let is_primary = employee.primary_project == project.name;
            team.push(ProjectTeamEntry {
                person_id: employee.id,
                display_name: employee.display_name,
                kind: "employee",
                is_primary,
                displayed_role: assignment::effective_role(employee.role, is_primary).to_string(),
            });
        }

        let intern_rows = sqlx::query(
            "SELECT id, display_name, email, login_email, role, projects, start_date, end_date, \
                    status, termination_date, termination_reason, created_at, updated_at \
             FROM interns WHERE EXISTS \
                (SELECT 1 FROM json_each(interns.projects) WHERE json_each.value = ?) \
             ORDER BY display_name",
        )
        .bind(&project.name)
        .fetch_all(&self.pool)
        .await?;

        for row in &intern_rows {
            let intern = intern_from_row(row);
            let is_primary = intern.primary_project == project.name;
            team.push(ProjectTeamEntry {
                person_id: intern.id,
                display_name: intern.display_name,
                kind: "intern",
                is_primary,
                displayed_role: assignment::effective_role(intern.role, is_primary).to_string(),
            });
        }

        Ok(team)
    }
}

fn project_from_row(row: &sqlx::sqlite::SqliteRow) -> Project {
    let status_str: String = row.get("status");
    Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        status: ProjectStatus::from_str(&status_str).unwrap_or(ProjectStatus::Active),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
