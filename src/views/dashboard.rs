//! Headline figures for the dashboard.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AttendanceRecord, AttendanceStatus, LeaveStatus};
use crate::store::Snapshot;

use super::{percentage, total};

/// Store-wide aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Number of employees.
    pub total_employees: usize,
    /// Sum of every payroll record's final salary.
    pub total_payroll: Decimal,
    /// Number of leave requests awaiting a decision.
    pub pending_leaves: usize,
    /// Present entries over all entries, as a rounded percentage.
    pub attendance_rate: u32,
}

/// Computes the dashboard aggregates from a snapshot.
pub fn dashboard_stats(snapshot: Snapshot<'_>) -> DashboardStats {
    let total_payroll = total(snapshot.payroll.iter().map(|p| p.final_salary));
    let pending_leaves = snapshot
        .attendance
        .iter()
        .flat_map(|a| a.leave_requests.iter())
        .filter(|lr| lr.status == LeaveStatus::Pending)
        .count();

    DashboardStats {
        total_employees: snapshot.employees.len(),
        total_payroll,
        pending_leaves,
        attendance_rate: overall_attendance_rate(snapshot.attendance),
    }
}

/// Attendance rate over every entry of every employee; 0 with no entries.
pub fn overall_attendance_rate(records: &[AttendanceRecord]) -> u32 {
    let (present, total) = records
        .iter()
        .flat_map(|a| a.attendance.iter())
        .fold((0usize, 0usize), |(present, total), entry| {
            let hit = usize::from(entry.status == AttendanceStatus::Present);
            (present + hit, total + 1)
        });
    percentage(present, total)
}
