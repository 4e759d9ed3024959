//! Data models for the OpsDesk operations application.
//!
//! These models match the frontend interfaces exactly for seamless interoperability.

mod attendance;
mod employee;
mod intern;
mod leave;
mod project;
mod task;

pub use attendance::*;
pub use employee::*;
pub use intern::*;
pub use leave::*;
pub use project::*;
pub use task::*;
