//! Core data models for the HR console.
//!
//! This module contains the entity records owned by the data store and the
//! input and view shapes built around them.

mod attendance;
mod employee;
mod payroll;

pub use attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, LEAVE_REASONS, LeaveRequest,
    LeaveStatus, NewLeaveRequest, is_known_leave_reason,
};
pub use employee::{
    Department, Employee, EmployeeFields, EmployeeId, EmployeeUpdate, UnknownDepartment,
};
pub use payroll::{PayrollRecord, PayrollRow};
