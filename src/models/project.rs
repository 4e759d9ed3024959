//! Project model.

use serde::{Deserialize, Serialize};

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "OnHold",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(ProjectStatus::Active),
            "OnHold" => Some(ProjectStatus::OnHold),
            "Completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

/// A tracked project. Names are unique and referenced by person assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// Request body for updating an existing project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// One person on a project's team listing. The displayed role is the person's
/// actual role only on their primary project; any secondary membership is
/// reported as the generic "Member".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTeamEntry {
    pub person_id: String,
    pub display_name: String,
    /// "employee" or "intern"
    pub kind: &'static str,
    pub is_primary: bool,
    pub displayed_role: String,
}
