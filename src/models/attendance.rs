//! Attendance and leave request models.
//!
//! Each employee has exactly one [`AttendanceRecord`] carrying a denormalized
//! copy of the employee's name, the daily [`AttendanceEntry`] history and the
//! [`LeaveRequest`]s filed for that employee.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Whether an employee was at work on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// The employee was at work.
    Present,
    /// The employee was not at work.
    Absent,
}

/// A single day of attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The day recorded.
    pub date: NaiveDate,
    /// Whether the employee was present.
    pub status: AttendanceStatus,
}

/// Lifecycle state of a leave request.
///
/// Requests are created as `Pending` and decided once; a later decision
/// overwrites the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Accepted by an administrator.
    Approved,
    /// Rejected by an administrator.
    Denied,
}

impl LeaveStatus {
    /// Returns the serialized name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Denied => "Denied",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    /// Parses a status, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [LeaveStatus::Pending, LeaveStatus::Approved, LeaveStatus::Denied]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown leave status: {}", s))
    }
}

/// The reasons offered when filing a leave request.
///
/// The store accepts any text; this list constrains what the API accepts.
pub const LEAVE_REASONS: [&str; 7] = [
    "Sick Leave",
    "Vacation",
    "Personal",
    "Family Responsibility",
    "Bereavement",
    "Medical Appointment",
    "Childcare",
];

/// Returns true if `reason` is one of [`LEAVE_REASONS`].
pub fn is_known_leave_reason(reason: &str) -> bool {
    LEAVE_REASONS.contains(&reason)
}

/// A request by an employee for a day of absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Store-wide unique identifier.
    pub id: String,
    /// The day requested.
    pub date: NaiveDate,
    /// Why the employee is requesting leave.
    pub reason: String,
    /// Current decision state.
    pub status: LeaveStatus,
}

/// A leave request before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    /// The day requested.
    pub date: NaiveDate,
    /// Why the employee is requesting leave.
    pub reason: String,
    /// Initial status, normally `Pending`.
    #[serde(default = "default_leave_status")]
    pub status: LeaveStatus,
}

fn default_leave_status() -> LeaveStatus {
    LeaveStatus::Pending
}

impl NewLeaveRequest {
    /// Creates a pending request.
    pub fn pending(date: NaiveDate, reason: impl Into<String>) -> Self {
        Self {
            date,
            reason: reason.into(),
            status: LeaveStatus::Pending,
        }
    }

    /// Attaches the store-assigned id.
    pub fn with_id(self, id: String) -> LeaveRequest {
        LeaveRequest {
            id,
            date: self.date,
            reason: self.reason,
            status: self.status,
        }
    }
}

/// Attendance history and leave requests for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Same id as the owning employee.
    pub employee_id: EmployeeId,
    /// Copy of the employee's name, kept in sync on rename.
    pub name: String,
    /// Daily entries in recorded order.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Leave requests in filing order.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
}

impl AttendanceRecord {
    /// Creates an empty record for a new employee.
    pub fn empty(employee_id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            employee_id,
            name: name.into(),
            attendance: Vec::new(),
            leave_requests: Vec::new(),
        }
    }

    /// Number of days recorded as present.
    pub fn present_days(&self) -> usize {
        self.attendance
            .iter()
            .filter(|entry| entry.status == AttendanceStatus::Present)
            .count()
    }

    /// Finds a leave request by id.
    pub fn leave_request_mut(&mut self, request_id: &str) -> Option<&mut LeaveRequest> {
        self.leave_requests.iter_mut().find(|lr| lr.id == request_id)
    }
}
