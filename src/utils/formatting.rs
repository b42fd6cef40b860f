//! Formatting utilities used for CLI and export outputs.

use crate::core::calculator::to_cents;
use rust_decimal::Decimal;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Money with exactly two decimals: `150` → "150.00".
pub fn money(v: Decimal) -> String {
    format!("{:.2}", to_cents(v))
}

/// Money for deductions: zero is shown as "-".
pub fn deduction(v: Decimal) -> String {
    if v.is_zero() {
        "-".to_string()
    } else {
        format!("-{}", money(v))
    }
}
