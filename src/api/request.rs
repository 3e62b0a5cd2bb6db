//! Request types for the HR console API.
//!
//! Bodies are deserialized leniently (missing fields become `None`) and then
//! checked here, so a half-filled form produces one validation error listing
//! every missing field instead of serde's first-failure message.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceStatus, Department, EmployeeFields, EmployeeUpdate, LEAVE_REASONS, LeaveStatus,
    NewLeaveRequest, is_known_leave_reason,
};

use super::response::ApiErrorResponse;

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username to check.
    pub username: String,
    /// Password to check.
    pub password: String,
}

/// Body of `POST /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEmployeeRequest {
    /// Full name.
    pub name: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Department display name, e.g. `"QA"`.
    pub department: Option<String>,
    /// Monthly salary.
    pub salary: Option<Decimal>,
    /// Free-text employment history; optional.
    pub employment_history: Option<String>,
    /// Contact email.
    pub contact: Option<String>,
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_department(value: &str) -> Result<Department, ApiErrorResponse> {
    value
        .parse()
        .map_err(|e| ApiErrorResponse::validation(format!("{}", e)))
}

/// Largest salary a form may carry.
pub const MAX_SALARY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn check_salary(salary: Decimal) -> Result<Decimal, ApiErrorResponse> {
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(ApiErrorResponse::validation("Salary must not be negative"));
    }
    if salary > MAX_SALARY {
        return Err(ApiErrorResponse::validation(format!(
            "Salary must not exceed {}",
            MAX_SALARY
        )));
    }
    Ok(salary)
}

impl CreateEmployeeRequest {
    /// Checks the form and converts it into store input.
    pub fn validate(self) -> Result<EmployeeFields, ApiErrorResponse> {
        let mut missing = Vec::new();
        if filled(&self.name).is_none() {
            missing.push("name");
        }
        if filled(&self.position).is_none() {
            missing.push("position");
        }
        if filled(&self.department).is_none() {
            missing.push("department");
        }
        if self.salary.is_none() {
            missing.push("salary");
        }
        if filled(&self.contact).is_none() {
            missing.push("contact");
        }
        if !missing.is_empty() {
            return Err(ApiErrorResponse::missing_fields(&missing));
        }

        let department = parse_department(filled(&self.department).unwrap_or_default())?;
        let salary = check_salary(self.salary.unwrap_or_default())?;

        Ok(EmployeeFields {
            name: filled(&self.name).unwrap_or_default().to_string(),
            position: filled(&self.position).unwrap_or_default().to_string(),
            department,
            salary,
            employment_history: self.employment_history.unwrap_or_default(),
            contact: filled(&self.contact).unwrap_or_default().to_string(),
        })
    }
}

/// Body of `PATCH /employees/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateEmployeeRequest {
    /// New name.
    pub name: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New department display name.
    pub department: Option<String>,
    /// New salary.
    pub salary: Option<Decimal>,
    /// New employment history.
    pub employment_history: Option<String>,
    /// New contact email.
    pub contact: Option<String>,
}

impl UpdateEmployeeRequest {
    /// Checks the present fields and converts them into a store update.
    ///
    /// A required field that is present must not be blank.
    pub fn validate(self) -> Result<EmployeeUpdate, ApiErrorResponse> {
        let mut blank = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("position", &self.position),
            ("department", &self.department),
            ("contact", &self.contact),
        ] {
            if value.is_some() && filled(value).is_none() {
                blank.push(field);
            }
        }
        if !blank.is_empty() {
            return Err(ApiErrorResponse::missing_fields(&blank));
        }

        let department = match filled(&self.department) {
            Some(name) => Some(parse_department(name)?),
            None => None,
        };
        let salary = self.salary.map(check_salary).transpose()?;

        Ok(EmployeeUpdate {
            name: filled(&self.name).map(str::to_string),
            position: filled(&self.position).map(str::to_string),
            department,
            salary,
            employment_history: self.employment_history,
            contact: filled(&self.contact).map(str::to_string),
        })
    }
}

/// Body of `POST /employees/:id/leave-requests`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveRequestBody {
    /// Requested day.
    pub date: Option<NaiveDate>,
    /// One of the known leave reasons.
    pub reason: Option<String>,
}

impl LeaveRequestBody {
    /// Checks the form; new requests always start as pending.
    pub fn validate(self) -> Result<NewLeaveRequest, ApiErrorResponse> {
        let reason = filled(&self.reason).map(str::to_string);
        let (date, reason) = match (self.date, reason) {
            (Some(date), Some(reason)) => (date, reason),
            (date, reason) => {
                let mut missing = Vec::new();
                if date.is_none() {
                    missing.push("date");
                }
                if reason.is_none() {
                    missing.push("reason");
                }
                return Err(ApiErrorResponse::missing_fields(&missing));
            }
        };

        if !is_known_leave_reason(&reason) {
            return Err(ApiErrorResponse::validation(format!(
                "Unknown leave reason '{}'; expected one of: {}",
                reason,
                LEAVE_REASONS.join(", ")
            )));
        }
        Ok(NewLeaveRequest::pending(date, reason))
    }
}

/// Body of `PUT /employees/:id/leave-requests/:request_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// `Approved` or `Denied`, case-insensitive.
    pub status: String,
}

impl DecisionRequest {
    /// Parses the decision. A request cannot be moved back to pending.
    pub fn validate(&self) -> Result<LeaveStatus, ApiErrorResponse> {
        match self.status.parse::<LeaveStatus>() {
            Ok(LeaveStatus::Pending) => Err(ApiErrorResponse::validation(
                "A decision must be Approved or Denied",
            )),
            Ok(status) => Ok(status),
            Err(e) => Err(ApiErrorResponse::validation(e)),
        }
    }
}

/// Body of `POST /employees/:id/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The day being recorded.
    pub date: NaiveDate,
    /// Whether the employee was there.
    pub status: AttendanceStatus,
}

/// Query of `GET /employees`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeQuery {
    /// Free-text search.
    pub search: String,
    /// Department display name; empty or `all` means every department.
    pub department: Option<String>,
}

impl EmployeeQuery {
    /// The department filter, if one was selected.
    pub fn department_filter(&self) -> Result<Option<Department>, ApiErrorResponse> {
        match self.department.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) if name.eq_ignore_ascii_case("all") => Ok(None),
            Some(name) => parse_department(name).map(Some),
        }
    }
}

/// Query of `GET /attendance` and `GET /payroll`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Free-text search.
    pub search: String,
}

/// Query of `GET /leave-requests`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeaveQuery {
    /// Keep only requests in this state.
    pub status: Option<String>,
    /// Keep at most this many of the newest requests.
    pub limit: Option<usize>,
}

impl LeaveQuery {
    /// The status filter, if one was given.
    pub fn status_filter(&self) -> Result<Option<LeaveStatus>, ApiErrorResponse> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(ApiErrorResponse::validation),
        }
    }
}
