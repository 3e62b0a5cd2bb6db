//! Derived views over a store snapshot.
//!
//! Every function here is pure: it takes borrowed collections (usually a
//! [`Snapshot`](crate::store::Snapshot)) and computes a fresh result. Nothing
//! is cached and nothing is written back, so a view can never disagree with
//! the store it was computed from.

mod attendance;
mod dashboard;
mod employees;
mod payroll;

use rust_decimal::{Decimal, RoundingStrategy};

pub use attendance::{
    LeaveRequestView, RECENT_LEAVE_LIMIT, attendance_rate, leave_requests, pending_leave_requests,
    recent_leave_requests, search_attendance,
};
pub use dashboard::{DashboardStats, dashboard_stats, overall_attendance_rate};
pub use employees::{
    DepartmentAverage, DepartmentHeadcount, department_average_salaries, department_headcounts,
    search_employees,
};
pub use payroll::{PayrollStats, payroll_rows, payroll_stats, search_payroll};

/// Rounds to `dp` decimal places with halves going away from zero.
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums money amounts, pinning at the representable bounds instead of
/// panicking on overflow.
pub(crate) fn total(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |sum, amount| sum.saturating_add(amount))
}

/// `round(part / whole * 100)` as an integer percentage; 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part * 200 + whole) / (2 * whole)) as u32
}

/// Case-insensitive substring test; an empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(Decimal::new(1505, 1), 0), Decimal::new(151, 0));
        assert_eq!(round_half_up(Decimal::new(1504, 1), 0), Decimal::new(150, 0));
    }

    #[test]
    fn test_total_saturates() {
        assert_eq!(total([Decimal::ONE, Decimal::TWO]), Decimal::new(3, 0));
        assert_eq!(total([Decimal::MAX, Decimal::MAX]), Decimal::MAX);
        assert_eq!(total([Decimal::MIN, Decimal::NEGATIVE_ONE]), Decimal::MIN);
        assert_eq!(total([]), Decimal::ZERO);
    }
}
