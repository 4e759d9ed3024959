//! Project assignment and team-lead succession.
//!
//! The whole read-check-write sequence runs inside one transaction so two
//! concurrent assignments to the same project cannot both observe the same
//! incumbent and leave two leads behind.

use super::repository::now_rfc3339;
use super::Repository;
use crate::assignment;
use crate::errors::AppError;
use crate::models::{Employee, Intern};

/// Person tables participating in project membership. The team-lead invariant
/// spans both.
const PERSON_TABLES: [&str; 2] = ["employees", "interns"];

impl Repository {
    /// Assign an ordered project list to an employee and run succession.
    pub async fn assign_employee_projects(
        &self,
        id: &str,
        projects: &[String],
    ) -> Result<Employee, AppError> {
        self.assign_projects("employees", id, projects).await?;
        self.get_employee(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    /// Assign an ordered project list to an intern and run succession.
    pub async fn assign_intern_projects(
        &self,
        id: &str,
        projects: &[String],
    ) -> Result<Intern, AppError> {
        self.assign_projects("interns", id, projects).await?;
        self.get_intern(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Intern {} not found", id)))
    }

    async fn assign_projects(
        &self,
        table: &'static str,
        id: &str,
        projects: &[String],
    ) -> Result<(), AppError> {
        // The sentinel is not a project; an assignment consisting of it alone
        // clears membership and leaves the role untouched.
        let projects: Vec<&String> = projects
            .iter()
            .filter(|name| name.as_str() != assignment::UNASSIGNED)
            .collect();

        let mut tx = self.pool.begin().await?;

        let person = sqlx::query(&format!("SELECT 1 FROM {table} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if person.is_none() {
            return Err(AppError::NotFound(format!("Person {} not found", id)));
        }

        for name in &projects {
            let found = sqlx::query("SELECT 1 FROM projects WHERE name = ?")
                .bind(name.as_str())
                .fetch_optional(&mut *tx)
                .await?;
            if found.is_none() {
                return Err(AppError::NotFound(format!("Project {} not found", name)));
            }
        }

        let now = now_rfc3339();
        let projects_json = serde_json::to_string(&projects)?;

        sqlx::query(&format!(
            "UPDATE {table} SET projects = ?, updated_at = ? WHERE id = ?"
        ))
        .bind(&projects_json)
        .bind(&now)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let primary = projects.first().map(|s| s.as_str());
        if let Some(primary) = primary {
            // Demote whoever currently leads this project, excluding the
            // requester. Matching every holder also repairs a table that
            // already violated the one-lead-per-project invariant.
            for person_table in PERSON_TABLES {
                let demoted = sqlx::query(&format!(
                    "UPDATE {person_table} SET role = 'Developer', updated_at = ? \
                     WHERE role = 'TeamLead' AND json_extract(projects, '$[0]') = ? AND id != ?"
                ))
                .bind(&now)
                .bind(primary)
                .bind(id)
                .execute(&mut *tx)
                .await?;

                if demoted.rows_affected() > 0 {
                    tracing::info!(
                        project = primary,
                        table = person_table,
                        demoted = demoted.rows_affected(),
                        "Demoted previous team lead"
                    );
                }
            }

            sqlx::query(&format!(
                "UPDATE {table} SET role = 'TeamLead', updated_at = ? WHERE id = ?"
            ))
            .bind(&now)
            .bind(id)
            .execute(&mut *tx)
            .await?;

            tracing::info!(person = id, project = primary, "Promoted new team lead");
        }

        tx.commit().await?;
        Ok(())
    }
}
