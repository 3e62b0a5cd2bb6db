//! Single-employee payslip.

use crate::models::PayrollRow;

use super::document::{Block, Document, TableBlock};
use super::format::{format_amount, format_deduction};
use super::ReportContext;

/// Builds the payslip for one employee's payroll row.
///
/// The breakdown table lists base salary, hours worked and leave deductions
/// (`base_salary - final_salary`, shown negative), closed by the final
/// salary.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hr_console::models::{Department, PayrollRow};
/// use hr_console::report::{payslip, ReportContext};
/// use rust_decimal::Decimal;
///
/// let row = PayrollRow {
///     employee_id: 6,
///     name: "Sipho Zulu".to_string(),
///     position: "UI/UX Designer".to_string(),
///     department: Department::Design,
///     base_salary: Decimal::new(65000, 0),
///     hours_worked: Decimal::new(168, 0),
///     leave_deductions: Decimal::new(2, 0),
///     final_salary: Decimal::new(64800, 0),
/// };
/// let generated_at = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let context = ReportContext::new("ModernTech Solutions", "R", generated_at);
///
/// let document = payslip(&row, &context);
/// assert_eq!(document.filename, "payslip_Sipho_Zulu_2025-07.txt");
/// ```
pub fn payslip(row: &PayrollRow, context: &ReportContext) -> Document {
    let breakdown = TableBlock {
        head: vec![
            "Description".to_string(),
            format!("Amount ({})", context.currency_symbol),
        ],
        body: vec![
            vec!["Base Salary".to_string(), format_amount(row.base_salary)],
            vec!["Hours Worked".to_string(), row.hours_worked.normalize().to_string()],
            vec!["Leave Deductions".to_string(), format_deduction(row.deductions())],
        ],
        foot: Some(vec!["Final Salary".to_string(), format_amount(row.final_salary)]),
    };

    Document {
        filename: format!("payslip_{}_{}.txt", file_stem(&row.name), context.year_month()),
        title: context.company_name.clone(),
        subtitle: "Digital Payslip".to_string(),
        blocks: vec![
            Block::Heading {
                text: "Employee Information".to_string(),
            },
            Block::Fields {
                fields: vec![
                    ("Name".to_string(), row.name.clone()),
                    ("Employee ID".to_string(), row.employee_id.to_string()),
                    ("Position".to_string(), row.position.clone()),
                    ("Department".to_string(), row.department.to_string()),
                    ("Pay Period".to_string(), context.period_label()),
                ],
            },
            Block::Heading {
                text: "Salary Breakdown".to_string(),
            },
            Block::Table(breakdown),
            Block::Note {
                text: "This is a computer-generated document. No signature is required."
                    .to_string(),
            },
            Block::Note {
                text: format!("Generated on: {}", context.generated_at.format("%Y-%m-%d %H:%M:%S")),
            },
        ],
    }
}

/// Turns an employee name into a single path component: whitespace runs and
/// anything outside `[A-Za-z0-9._-]` become `_`, and `..` never survives.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    stem.replace("..", "_")
}
