//! Employee model and job roles.

use serde::{Deserialize, Serialize};

use crate::assignment::ProjectAssignment;

/// Job role of a person. `TeamLead` is positional, not freely chosen: it
/// designates the lead of the person's primary project and is granted or
/// revoked by the succession policy, never by a plain profile edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobRole {
    Developer,
    Designer,
    Tester,
    Manager,
    Hr,
    TeamLead,
}

impl JobRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::Developer => "Developer",
            JobRole::Designer => "Designer",
            JobRole::Tester => "Tester",
            JobRole::Manager => "Manager",
            JobRole::Hr => "Hr",
            JobRole::TeamLead => "TeamLead",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Developer" => Some(JobRole::Developer),
            "Designer" => Some(JobRole::Designer),
            "Tester" => Some(JobRole::Tester),
            "Manager" => Some(JobRole::Manager),
            "Hr" => Some(JobRole::Hr),
            "TeamLead" => Some(JobRole::TeamLead),
            _ => None,
        }
    }
}

/// An employee of the company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub display_name: String,
    pub email: String,
    /// Secondary email used for external-identity matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_email: Option<String>,
    pub role: JobRole,
    /// Ordered project assignments; the first entry is the primary project.
    pub projects: Vec<String>,
    /// Derived from `projects`, never stored or accepted as input.
    #[serde(default)]
    pub primary_project: String,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new employee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub login_email: Option<String>,
    #[serde(default)]
    pub role: Option<JobRole>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Request body for updating an existing employee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login_email: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Request body for the assign-projects endpoint. Accepts either a single
/// project name (legacy shape) or an ordered list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignProjectsRequest {
    pub projects: ProjectAssignment,
}
