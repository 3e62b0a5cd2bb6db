//! Payroll table rows and their totals.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::PayrollRow;
use crate::store::Snapshot;

use super::{contains_ignore_case, round_half_up, total};

/// Totals across a set of payroll rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollStats {
    /// Sum of final salaries.
    pub total_payroll: Decimal,
    /// Mean final salary to two decimal places; 0 with no rows.
    pub average_salary: Decimal,
    /// Sum of hours worked.
    pub total_hours: Decimal,
    /// Sum of `base_salary - final_salary`.
    pub total_deductions: Decimal,
}

/// Joins every employee with their payroll record, in employee order.
///
/// An employee without a payroll record shows no hours, no deductions and
/// their full salary as final salary.
pub fn payroll_rows(snapshot: Snapshot<'_>) -> Vec<PayrollRow> {
    snapshot
        .employees
        .iter()
        .map(|employee| {
            let record = snapshot
                .payroll
                .iter()
                .find(|p| p.employee_id == employee.employee_id);
            PayrollRow {
                employee_id: employee.employee_id,
                name: employee.name.clone(),
                position: employee.position.clone(),
                department: employee.department,
                base_salary: employee.salary,
                hours_worked: record.map_or(Decimal::ZERO, |p| p.hours_worked),
                leave_deductions: record.map_or(Decimal::ZERO, |p| p.leave_deductions),
                final_salary: record.map_or(employee.salary, |p| p.final_salary),
            }
        })
        .collect()
}

/// Rows whose name or department contains `query`, ignoring case.
pub fn search_payroll<'a>(rows: &'a [PayrollRow], query: &str) -> Vec<&'a PayrollRow> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|r| {
            contains_ignore_case(&r.name, &needle)
                || contains_ignore_case(r.department.as_str(), &needle)
        })
        .collect()
}

/// Sums payroll figures across `rows`.
pub fn payroll_stats(rows: &[PayrollRow]) -> PayrollStats {
    let total_payroll = total(rows.iter().map(|r| r.final_salary));
    let average_salary = if rows.is_empty() {
        Decimal::ZERO
    } else {
        round_half_up(total_payroll / Decimal::from(rows.len()), 2)
    };

    PayrollStats {
        total_payroll,
        average_salary,
        total_hours: total(rows.iter().map(|r| r.hours_worked)),
        total_deductions: total(rows.iter().map(PayrollRow::deductions)),
    }
}
