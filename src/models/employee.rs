//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, the fixed [`Department`] set,
//! and the input shapes used to create ([`EmployeeFields`]) and partially
//! update ([`EmployeeUpdate`]) an employee.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier assigned to an employee by the data store.
pub type EmployeeId = u32;

/// The departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Software development.
    Development,
    /// Human resources.
    #[serde(rename = "HR")]
    Hr,
    /// Quality assurance.
    #[serde(rename = "QA")]
    Qa,
    /// Sales.
    Sales,
    /// Marketing.
    Marketing,
    /// Product and visual design.
    Design,
    /// Information technology and infrastructure.
    #[serde(rename = "IT")]
    It,
    /// Finance and accounting.
    Finance,
    /// Customer support.
    Support,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Department; 9] = [
        Department::Development,
        Department::Hr,
        Department::Qa,
        Department::Sales,
        Department::Marketing,
        Department::Design,
        Department::It,
        Department::Finance,
        Department::Support,
    ];

    /// Returns the display name, which is also the serialized form.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_console::models::Department;
    ///
    /// assert_eq!(Department::Hr.as_str(), "HR");
    /// assert_eq!(Department::Development.as_str(), "Development");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Development => "Development",
            Department::Hr => "HR",
            Department::Qa => "QA",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Design => "Design",
            Department::It => "IT",
            Department::Finance => "Finance",
            Department::Support => "Support",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDepartment(pub String);

impl fmt::Display for UnknownDepartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown department: {}", self.0)
    }
}

impl std::error::Error for UnknownDepartment {}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

/// An employee record owned by the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the store.
    pub employee_id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    pub department: Department,
    /// Monthly salary.
    pub salary: Decimal,
    /// Free-text employment history.
    #[serde(default)]
    pub employment_history: String,
    /// Contact email address.
    pub contact: String,
}

/// The fields needed to create an employee; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    pub department: Department,
    /// Monthly salary.
    pub salary: Decimal,
    /// Free-text employment history.
    #[serde(default)]
    pub employment_history: String,
    /// Contact email address.
    pub contact: String,
}

impl EmployeeFields {
    /// Builds the employee record for the given id.
    pub fn into_employee(self, employee_id: EmployeeId) -> Employee {
        Employee {
            employee_id,
            name: self.name,
            position: self.position,
            department: self.department,
            salary: self.salary,
            employment_history: self.employment_history,
            contact: self.contact,
        }
    }
}

/// A partial update: only the fields that are `Some` are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdate {
    /// New name, propagated to the attendance record.
    pub name: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New department.
    pub department: Option<Department>,
    /// New salary. Payroll figures are not recomputed.
    pub salary: Option<Decimal>,
    /// New employment history.
    pub employment_history: Option<String>,
    /// New contact email.
    pub contact: Option<String>,
}

impl EmployeeUpdate {
    /// Merges the present fields into `employee`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_console::models::{Department, Employee, EmployeeUpdate};
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee {
    ///     employee_id: 1,
    ///     name: "Thabo Molefe".to_string(),
    ///     position: "Quality Analyst".to_string(),
    ///     department: Department::Qa,
    ///     salary: Decimal::new(55000, 0),
    ///     employment_history: String::new(),
    ///     contact: "thabo.molefe@moderntech.com".to_string(),
    /// };
    /// let update = EmployeeUpdate {
    ///     position: Some("Senior Quality Analyst".to_string()),
    ///     ..Default::default()
    /// };
    /// update.apply_to(&mut employee);
    /// assert_eq!(employee.position, "Senior Quality Analyst");
    /// assert_eq!(employee.name, "Thabo Molefe");
    /// ```
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(position) = &self.position {
            employee.position = position.clone();
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(history) = &self.employment_history {
            employee.employment_history = history.clone();
        }
        if let Some(contact) = &self.contact {
            employee.contact = contact.clone();
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.employment_history.is_none()
            && self.contact.is_none()
    }
}
