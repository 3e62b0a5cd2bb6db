//! Bulk payroll report across all employees.

use crate::models::PayrollRow;
use crate::views::{payroll_stats, round_half_up};

use super::document::{Block, Document, TableBlock};
use super::format::{format_amount, format_money};
use super::ReportContext;

/// Builds the payroll report: a summary header followed by one row per
/// employee.
pub fn payroll_report(rows: &[PayrollRow], context: &ReportContext) -> Document {
    let stats = payroll_stats(rows);
    let symbol = context.currency_symbol.as_str();

    let table = TableBlock {
        head: ["Name", "Department", "Position", "Hours", "Deductions", "Final Salary"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        body: rows
            .iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.department.to_string(),
                    row.position.clone(),
                    row.hours_worked.normalize().to_string(),
                    format_money(symbol, row.deductions()),
                    format_money(symbol, row.final_salary),
                ]
            })
            .collect(),
        foot: None,
    };

    Document {
        filename: format!("payroll_report_{}.txt", context.year_month()),
        title: context.company_name.clone(),
        subtitle: format!("Payroll Report - {}", context.period_label()),
        blocks: vec![
            Block::Heading {
                text: "Summary".to_string(),
            },
            Block::Fields {
                fields: vec![
                    ("Total Employees".to_string(), rows.len().to_string()),
                    (
                        "Total Payroll".to_string(),
                        format_money(symbol, stats.total_payroll),
                    ),
                    (
                        "Average Salary".to_string(),
                        format!("{}{}", symbol, format_amount(round_half_up(stats.average_salary, 0))),
                    ),
                ],
            },
            Block::Table(table),
        ],
    }
}
