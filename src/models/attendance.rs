//! Attendance record model.

use serde::{Deserialize, Serialize};

/// Daily attendance status, fixed at punch-in time and never recomputed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    HalfDay,
    OnLeave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::HalfDay => "HalfDay",
            AttendanceStatus::OnLeave => "OnLeave",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(AttendanceStatus::Present),
            "Late" => Some(AttendanceStatus::Late),
            "Absent" => Some(AttendanceStatus::Absent),
            "HalfDay" => Some(AttendanceStatus::HalfDay),
            "OnLeave" => Some(AttendanceStatus::OnLeave),
            _ => None,
        }
    }
}

/// One attendance record, at most one per employee per calendar day.
///
/// `check_in`/`check_out` are stored in whatever text format they arrived in;
/// the display fields and `total_hours` are derived at read time by the
/// timeclock utilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    /// Calendar date, "YYYY-MM-DD"
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    pub status: AttendanceStatus,
    /// Derived "H:MM" span between the punches; "0:00" until punch-out.
    #[serde(default)]
    pub total_hours: String,
    /// `total_hours` as decimal hours, for payroll arithmetic.
    #[serde(default)]
    pub total_hours_decimal: f64,
}

/// Request body for punching in. `time` defaults to the current wall-clock
/// time when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchInRequest {
    pub employee_id: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// Request body for punching out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchOutRequest {
    pub employee_id: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// Request body for an administrative attendance edit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}
