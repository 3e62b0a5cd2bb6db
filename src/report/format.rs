//! Amount formatting for reports.

use rust_decimal::Decimal;

use crate::views::round_half_up;

/// Formats an amount with thousands separators and at most two decimals.
///
/// # Examples
///
/// ```
/// use hr_console::report::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(7000000, 2)), "70,000");
/// assert_eq!(format_amount(Decimal::new(193333, 2)), "1,933.33");
/// assert_eq!(format_amount(Decimal::new(-500, 0)), "-500");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_half_up(amount, 2).normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Formats an amount prefixed with a currency symbol, sign first.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(magnitude) => format!("-{}{}", symbol, magnitude),
        None => format!("{}{}", symbol, formatted),
    }
}

/// Formats a deduction as a negative figure: 500 becomes `-500`.
pub fn format_deduction(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format_amount(-amount)
    } else {
        format!("-{}", format_amount(amount))
    }
}
