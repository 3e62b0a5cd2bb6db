//! Payslip and payroll report generation.
//!
//! Builders turn payroll rows into a [`Document`] without touching the
//! store; [`ReportWriter`] is the only step with a side effect, writing the
//! rendered document to a file named after the employee (payslips) or the
//! current year and month (bulk reports).

mod document;
mod format;
mod payslip;
mod summary;
mod writer;

use chrono::NaiveDateTime;

pub use document::{Block, Document, TableBlock};
pub use format::{format_amount, format_deduction, format_money};
pub use payslip::payslip;
pub use summary::payroll_report;
pub use writer::ReportWriter;

/// Presentation settings and the timestamp a report is generated at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Company name printed in the header.
    pub company_name: String,
    /// Currency symbol prefixed to amounts.
    pub currency_symbol: String,
    /// When the report is generated; fixes the pay period and filename.
    pub generated_at: NaiveDateTime,
}

impl ReportContext {
    /// Creates a context.
    pub fn new(
        company_name: impl Into<String>,
        currency_symbol: impl Into<String>,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            currency_symbol: currency_symbol.into(),
            generated_at,
        }
    }

    /// Pay period label, e.g. `July 2025`.
    pub fn period_label(&self) -> String {
        self.generated_at.format("%B %Y").to_string()
    }

    /// Filename stamp, e.g. `2025-07`.
    pub fn year_month(&self) -> String {
        self.generated_at.format("%Y-%m").to_string()
    }
}
