//! Intern model and internship lifecycle status.

use serde::{Deserialize, Serialize};

use super::JobRole;

/// Lifecycle status of an internship, derived from its dates at read time.
/// `Terminated` is sticky: once set it is never overwritten by derivation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InternshipStatus {
    Upcoming,
    Active,
    Completed,
    Terminated,
}

impl InternshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternshipStatus::Upcoming => "Upcoming",
            InternshipStatus::Active => "Active",
            InternshipStatus::Completed => "Completed",
            InternshipStatus::Terminated => "Terminated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Upcoming" => Some(InternshipStatus::Upcoming),
            "Active" => Some(InternshipStatus::Active),
            "Completed" => Some(InternshipStatus::Completed),
            "Terminated" => Some(InternshipStatus::Terminated),
            _ => None,
        }
    }
}

/// An intern. Parallel to [`super::Employee`] for project membership, with an
/// added time-bounded engagement (start/end/termination).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intern {
    pub id: String,
    pub display_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_email: Option<String>,
    pub role: JobRole,
    /// Ordered project assignments; the first entry is the primary project.
    pub projects: Vec<String>,
    /// Derived from `projects`, never stored or accepted as input.
    #[serde(default)]
    pub primary_project: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub status: InternshipStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_reason: Option<String>,
    /// Human-readable elapsed internship time, derived at read time.
    #[serde(default)]
    pub duration: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new intern.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternRequest {
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub login_email: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request body for updating an existing intern.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInternRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login_email: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request body for terminating an internship.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminateInternRequest {
    #[serde(default)]
    pub reason: Option<String>,
}
