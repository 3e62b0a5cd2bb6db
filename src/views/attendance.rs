//! Attendance rates and flattened leave request lists.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{AttendanceRecord, EmployeeId, LeaveStatus};
use crate::store::Snapshot;

use super::{contains_ignore_case, percentage};

/// How many requests the "recent" list shows.
pub const RECENT_LEAVE_LIMIT: usize = 5;

/// A leave request tagged with the employee it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveRequestView {
    /// The request id.
    pub id: String,
    /// The owning employee's id.
    pub employee_id: EmployeeId,
    /// The owning employee's name.
    pub employee_name: String,
    /// The day requested.
    pub date: NaiveDate,
    /// The stated reason.
    pub reason: String,
    /// Current decision state.
    pub status: LeaveStatus,
}

/// Percentage of recorded days the employee was present, rounded.
///
/// Returns 0 for a record with no entries.
pub fn attendance_rate(record: &AttendanceRecord) -> u32 {
    percentage(record.present_days(), record.attendance.len())
}

/// Attendance records whose employee name contains `query`, ignoring case.
pub fn search_attendance<'a>(records: &'a [AttendanceRecord], query: &str) -> Vec<&'a AttendanceRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| contains_ignore_case(&r.name, &needle))
        .collect()
}

/// Flattens leave requests across employees, newest date first.
///
/// `status` keeps only requests in that state; `limit` truncates the sorted
/// list. Requests sharing a date keep their store order.
pub fn leave_requests(
    snapshot: Snapshot<'_>,
    status: Option<LeaveStatus>,
    limit: Option<usize>,
) -> Vec<LeaveRequestView> {
    let mut requests: Vec<LeaveRequestView> = snapshot
        .attendance
        .iter()
        .flat_map(|record| {
            record.leave_requests.iter().map(move |lr| LeaveRequestView {
                id: lr.id.clone(),
                employee_id: record.employee_id,
                employee_name: record.name.clone(),
                date: lr.date,
                reason: lr.reason.clone(),
                status: lr.status,
            })
        })
        .filter(|view| status.is_none_or(|s| view.status == s))
        .collect();

    requests.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        requests.truncate(limit);
    }
    requests
}

/// The most recent requests of any status.
pub fn recent_leave_requests(snapshot: Snapshot<'_>) -> Vec<LeaveRequestView> {
    leave_requests(snapshot, None, Some(RECENT_LEAVE_LIMIT))
}

/// Every request still awaiting a decision.
pub fn pending_leave_requests(snapshot: Snapshot<'_>) -> Vec<LeaveRequestView> {
    leave_requests(snapshot, Some(LeaveStatus::Pending), None)
}
