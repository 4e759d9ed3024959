//! Task CRUD operations.

use sqlx::Row;

use super::repository::now_rfc3339;
use super::Repository;
use crate::errors::AppError;
use crate::models::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};

impl Repository {
    /// List all tasks.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, assignee_id, project, status, due_date, created_at, updated_at FROM tasks ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(task_from_row).collect())
    }

    /// Get a task by ID.
    pub async fn get_task(&self, id: &str) -> Result<Option<Task>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, description, assignee_id, project, status, due_date, created_at, updated_at FROM tasks WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(task_from_row))
    }

    /// Create a new task.
    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_rfc3339();

        sqlx::query(
            "INSERT INTO tasks (id, title, description, assignee_id, project, status, due_date, created_at, updated_at) VALUES (?, ?, ?, ?, ?, 'Todo', ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.assignee_id)
        .bind(&request.project)
        .bind(&request.due_date)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Task {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            assignee_id: request.assignee_id.clone(),
            project: request.project.clone(),
            status: TaskStatus::Todo,
            due_date: request.due_date.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a task.
    pub async fn update_task(&self, id: &str, request: &UpdateTaskRequest) -> Result<Task, AppError> {
        let existing = self
            .get_task(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))?;

        let now = now_rfc3339();
        let title = request.title.as_ref().unwrap_or(&existing.title);
        let description = request.description.clone().or(existing.description.clone());
        let assignee_id = request.assignee_id.clone().or(existing.assignee_id.clone());
        let project = request.project.clone().or(existing.project.clone());
        let status = request.status.unwrap_or(existing.status);
        let due_date = request.due_date.clone().or(existing.due_date.clone());

        sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, assignee_id = ?, project = ?, status = ?, due_date = ?, updated_at = ? WHERE id = ?"
        )
        .bind(title)
        .bind(&description)
        .bind(&assignee_id)
        .bind(&project)
        .bind(status.as_str())
        .bind(&due_date)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Task {
            id: id.to_string(),
            title: title.clone(),
            description,
            assignee_id,
            project,
            status,
            due_date,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a task.
    pub async fn delete_task(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task {} not found", id)));
        }

        Ok(())
    }
}

fn task_from_row(row: &sqlx::sqlite::SqliteRow) -> Task {
    let status_str: String = row.get("status");
    Task {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        assignee_id: row.get("assignee_id"),
        project: row.get("project"),
        status: TaskStatus::from_str(&status_str).unwrap_or(TaskStatus::Todo),
        due_date: row.get("due_date"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
