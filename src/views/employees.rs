//! Employee search and per-department aggregates.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Department, Employee};

use super::{contains_ignore_case, round_half_up};

/// Number of employees in a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentHeadcount {
    /// The department.
    pub department: Department,
    /// How many employees belong to it.
    pub count: usize,
}

/// Average salary in a department, rounded to a whole amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentAverage {
    /// The department.
    pub department: Department,
    /// `sum(salary) / count`, rounded half away from zero.
    pub average_salary: Decimal,
}

/// Filters employees by a free-text query and an optional department.
///
/// The query matches case-insensitively as a substring of the name, position
/// or contact. An empty query matches every employee.
///
/// # Examples
///
/// ```
/// use hr_console::models::{Department, Employee};
/// use hr_console::views::search_employees;
/// use rust_decimal::Decimal;
///
/// let employees = vec![Employee {
///     employee_id: 1,
///     name: "Sibongile Nkosi".to_string(),
///     position: "Software Engineer".to_string(),
///     department: Department::Development,
///     salary: Decimal::new(70000, 0),
///     employment_history: String::new(),
///     contact: "sibongile.nkosi@moderntech.com".to_string(),
/// }];
///
/// assert_eq!(search_employees(&employees, "ENGINEER", None).len(), 1);
/// assert!(search_employees(&employees, "", Some(Department::Sales)).is_empty());
/// ```
pub fn search_employees<'a>(
    employees: &'a [Employee],
    query: &str,
    department: Option<Department>,
) -> Vec<&'a Employee> {
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|e| {
            contains_ignore_case(&e.name, &needle)
                || contains_ignore_case(&e.position, &needle)
                || contains_ignore_case(&e.contact, &needle)
        })
        .filter(|e| department.is_none_or(|d| e.department == d))
        .collect()
}

/// Counts employees per department, in order of first appearance.
pub fn department_headcounts(employees: &[Employee]) -> Vec<DepartmentHeadcount> {
    let mut counts: Vec<DepartmentHeadcount> = Vec::new();
    for employee in employees {
        match counts.iter_mut().find(|c| c.department == employee.department) {
            Some(entry) => entry.count += 1,
            None => counts.push(DepartmentHeadcount {
                department: employee.department,
                count: 1,
            }),
        }
    }
    counts
}

/// Averages salary per department, in order of first appearance.
pub fn department_average_salaries(employees: &[Employee]) -> Vec<DepartmentAverage> {
    let mut totals: Vec<(Department, Decimal, u32)> = Vec::new();
    for employee in employees {
        match totals.iter_mut().find(|(d, _, _)| *d == employee.department) {
            Some((_, total, count)) => {
                *total = total.saturating_add(employee.salary);
                *count += 1;
            }
            None => totals.push((employee.department, employee.salary, 1)),
        }
    }

    totals
        .into_iter()
        .map(|(department, total, count)| DepartmentAverage {
            department,
            average_salary: round_half_up(total / Decimal::from(count), 0),
        })
        .collect()
}
