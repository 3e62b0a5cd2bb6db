//! Payroll models.
//!
//! [`PayrollRecord`] is the stored per-employee payroll figure set.
//! [`PayrollRow`] is the joined, read-only view of an employee and their
//! payroll record that the payroll views and the report generator consume.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Department, EmployeeId};

/// Stored payroll figures for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Same id as the owning employee.
    pub employee_id: EmployeeId,
    /// Hours worked in the current period.
    pub hours_worked: Decimal,
    /// Leave deductions recorded for the period.
    pub leave_deductions: Decimal,
    /// Salary payable after deductions.
    pub final_salary: Decimal,
}

impl PayrollRecord {
    /// The record created alongside a new employee: no hours, no deductions,
    /// full salary payable.
    pub fn initial(employee_id: EmployeeId, salary: Decimal) -> Self {
        Self {
            employee_id,
            hours_worked: Decimal::ZERO,
            leave_deductions: Decimal::ZERO,
            final_salary: salary,
        }
    }
}

/// An employee joined with their payroll figures.
///
/// # Example
///
/// ```
/// use hr_console::models::{Department, PayrollRow};
/// use rust_decimal::Decimal;
///
/// let row = PayrollRow {
///     employee_id: 1,
///     name: "Sibongile Nkosi".to_string(),
///     position: "Software Engineer".to_string(),
///     department: Department::Development,
///     base_salary: Decimal::new(70000, 0),
///     hours_worked: Decimal::new(160, 0),
///     leave_deductions: Decimal::new(8, 0),
///     final_salary: Decimal::new(69500, 0),
/// };
/// assert_eq!(row.deductions(), Decimal::new(500, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// The employee's id.
    pub employee_id: EmployeeId,
    /// The employee's name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// The employee's department.
    pub department: Department,
    /// Current salary from the employee record.
    pub base_salary: Decimal,
    /// Hours worked from the payroll record.
    pub hours_worked: Decimal,
    /// Leave deductions from the payroll record.
    pub leave_deductions: Decimal,
    /// Final salary from the payroll record.
    pub final_salary: Decimal,
}

impl PayrollRow {
    /// The amount withheld: base salary minus final salary, saturating at the
    /// representable bounds.
    pub fn deductions(&self) -> Decimal {
        self.base_salary.saturating_sub(self.final_salary)
    }
}
