//! Project membership model.
//!
//! A person's assignments are a single ordered list of project names; the
//! first entry is the primary project. There is no separately stored
//! "primary" field, so the two can never drift apart. The empty list means
//! unassigned and is rendered with the [`UNASSIGNED`] sentinel.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::JobRole;

/// Sentinel rendered as the primary project of a person with no assignments.
pub const UNASSIGNED: &str = "Unassigned";

/// Displayed role for any non-primary project membership.
pub const MEMBER: &str = "Member";

/// Input shape for a project assignment: either a single project name
/// (legacy clients) or an ordered list whose first entry is the primary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProjectAssignment {
    One(String),
    Many(Vec<String>),
}

impl ProjectAssignment {
    /// Normalize into the ordered project-name list, trimming whitespace and
    /// dropping empty entries. An empty result is a validation error.
    pub fn into_list(self) -> Result<Vec<String>, AppError> {
        let raw = match self {
            ProjectAssignment::One(name) => vec![name],
            ProjectAssignment::Many(names) => names,
        };

        let list: Vec<String> = raw
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if list.is_empty() {
            return Err(AppError::Validation(
                "At least one project name is required".to_string(),
            ));
        }

        Ok(list)
    }
}

/// The primary project is the first entry of the ordered list.
pub fn primary_project(projects: &[String]) -> &str {
    projects.first().map(String::as_str).unwrap_or(UNASSIGNED)
}

/// Role to display for a person on a given project's team listing.
///
/// A person's role applies only to their primary project; on any other
/// project they appear as a generic member regardless of global role.
pub fn effective_role(role: JobRole, is_primary: bool) -> &'static str {
    if is_primary {
        role.as_str()
    } else {
        MEMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_name_becomes_one_element_list() {
        let list = ProjectAssignment::One("Phoenix".to_string())
            .into_list()
            .unwrap();
        assert_eq!(list, vec!["Phoenix"]);
    }

    #[test]
    fn list_order_is_preserved() {
        let list = ProjectAssignment::Many(vec!["Phoenix".to_string(), "Odyssey".to_string()])
            .into_list()
            .unwrap();
        assert_eq!(list, vec!["Phoenix", "Odyssey"]);
        assert_eq!(primary_project(&list), "Phoenix");
    }

    #[test]
    fn blank_entries_are_dropped() {
        let list = ProjectAssignment::Many(vec![
            "  Phoenix ".to_string(),
            "".to_string(),
            "Odyssey".to_string(),
        ])
        .into_list()
        .unwrap();
        assert_eq!(list, vec!["Phoenix", "Odyssey"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(ProjectAssignment::Many(vec![]).into_list().is_err());
        assert!(ProjectAssignment::One("   ".to_string()).into_list().is_err());
    }

    #[test]
    fn empty_list_is_unassigned() {
        assert_eq!(primary_project(&[]), UNASSIGNED);
    }

    #[test]
    fn non_primary_membership_displays_as_member() {
        assert_eq!(effective_role(JobRole::TeamLead, true), "TeamLead");
        assert_eq!(effective_role(JobRole::TeamLead, false), "Member");
        assert_eq!(effective_role(JobRole::Developer, true), "Developer");
        assert_eq!(effective_role(JobRole::Developer, false), "Member");
    }
}
